//! Sparse-to-dense residue index compression.
//!
//! Residue numbers from structure annotation are arbitrary integers;
//! the dynamic programming table wants a contiguous 0-based range. A
//! `DenseIndex` is the bijection between the residues of one working
//! pair set and `[0, len)`: ranks are assigned by ascending sort, and
//! the sorted vector doubles as the reverse lookup.
//!
//! The mapping is rebuilt for every extracted layer, since residues
//! disappear from the working set together with their pairs.
//!

use ahash::AHashMap;

use pk_structure::Pair;
use pk_structure::PairSet;
use pk_structure::RESIDX;


/// Bijection between a working set's residues and their dense ranks.
#[derive(Debug, Clone, Default)]
pub struct DenseIndex {
    ranks: AHashMap<RESIDX, RESIDX>,
    residues: Vec<RESIDX>, // rank -> original residue, ascending
}

impl From<&PairSet> for DenseIndex {
    fn from(pairs: &PairSet) -> Self {
        let residues = pairs.residues();
        let ranks = residues
            .iter()
            .enumerate()
            .map(|(rank, &residue)| (residue, rank as RESIDX))
            .collect();
        Self { ranks, residues }
    }
}

impl DenseIndex {
    /// Number of distinct residues covered by the mapping.
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Returns true if the mapping covers no residues.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Rank of an original residue index, if it occurs in the mapping.
    pub fn rank(&self, residue: RESIDX) -> Option<RESIDX> {
        self.ranks.get(&residue).copied()
    }

    /// Original residue index at a given rank. Panics if out of range.
    pub fn residue(&self, rank: RESIDX) -> RESIDX {
        self.residues[rank as usize]
    }

    /// Rewrite a pair set into dense 0-based ranks. Ranks preserve the
    /// residue order, so i < j survives compression.
    pub fn compress(&self, pairs: &PairSet) -> PairSet {
        pairs
            .iter()
            .map(|p| Pair::new(self.ranks[&p.i()], self.ranks[&p.j()]))
            .collect()
    }

    /// Map a dense pair set back to original residue indices.
    pub fn decompress(&self, pairs: &PairSet) -> PairSet {
        pairs
            .iter()
            .map(|p| Pair::new(self.residue(p.i()), self.residue(p.j())))
            .collect()
    }
}
