//! PairSet definitions.
//!
//! A `PairSet` is the working collection of the layer extraction: it
//! stores pairs as compact `P1KEY` values in a `nohash` integer set,
//! so membership tests inside the O(L^3) recursion stay cheap.
//!
//! Being a set, it deduplicates on insertion; callers handing over
//! structure-annotation output with repeated rows get set semantics.
//!

use std::fmt;

use nohash_hasher::IntSet;

use crate::Pair;
use crate::StructureError;
use crate::P1KEY;
use crate::RESIDX;


/// A collection of base pairs represented as compact integer keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PairSet {
    pairs: IntSet<P1KEY>,
}

impl PairSet {
    /// Create an empty pair set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pairs contained in the set.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Insert a new pair; returns true if it was newly inserted.
    pub fn insert(&mut self, pair: Pair) -> bool {
        self.pairs.insert(pair.key())
    }

    /// Remove a pair; returns true if it was present.
    pub fn remove(&mut self, pair: &Pair) -> bool {
        self.pairs.remove(&pair.key())
    }

    /// Check if a pair exists in the set.
    pub fn contains(&self, pair: &Pair) -> bool {
        self.pairs.contains(&pair.key())
    }

    /// Iterator over all pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Pair> + '_ {
        self.pairs.iter().map(|&k| Pair::from_key(k))
    }

    /// Return all pairs as a Vec (for deterministic inspection).
    pub fn to_vec(&self) -> Vec<Pair> {
        let mut v: Vec<_> = self.iter().collect();
        v.sort_unstable_by_key(|p| (p.i(), p.j()));
        v
    }

    /// Sorted, deduplicated list of all residues occurring in any pair.
    pub fn residues(&self) -> Vec<RESIDX> {
        let mut v: Vec<RESIDX> = Vec::with_capacity(2 * self.pairs.len());
        for pair in self.iter() {
            v.push(pair.i());
            v.push(pair.j());
        }
        v.sort_unstable();
        v.dedup();
        v
    }
}

impl FromIterator<Pair> for PairSet {
    fn from_iter<T: IntoIterator<Item = Pair>>(iter: T) -> Self {
        let mut set = PairSet::new();
        for pair in iter {
            set.insert(pair);
        }
        set
    }
}

impl TryFrom<&[(RESIDX, RESIDX)]> for PairSet {
    type Error = StructureError;

    /// Build a set from unordered endpoint tuples. Fails on the first
    /// self-pair; duplicates collapse silently.
    fn try_from(tuples: &[(RESIDX, RESIDX)]) -> Result<Self, Self::Error> {
        let mut set = PairSet::new();
        for &(i, j) in tuples {
            set.insert(Pair::try_new(i, j)?);
        }
        Ok(set)
    }
}

impl fmt::Display for PairSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for pair in self.to_vec() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{pair}")?;
            first = false;
        }
        Ok(())
    }
}
