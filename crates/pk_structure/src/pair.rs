//! Pair definition and pair-vs-pair geometry.
//!
//! A `Pair` holds two 32-bit residue indices (`RESIDX`) packed into a
//! 64-bit integer key (`P1KEY`) for efficient set and map storage.
//!
//! Unlike dense 0-based sequence positions, residue indices here come
//! straight from structure annotation and may be sparse or negative;
//! the key packing only relies on the fixed bit widths, not on sign.
//!

use std::cmp::Ordering;
use std::fmt;

use crate::StructureError;
use crate::P1KEY;
use crate::RESIDX;


/// A base pair (i, j) with i < j.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    i: RESIDX,
    j: RESIDX,
}

impl Pair {
    /// Create a new pair (i, j). Panics in debug if i >= j.
    pub fn new(i: RESIDX, j: RESIDX) -> Self {
        debug_assert!(i < j);
        Pair { i, j }
    }

    /// Create a pair from unordered endpoints; rejects self-pairs.
    pub fn try_new(i: RESIDX, j: RESIDX) -> Result<Self, StructureError> {
        match i.cmp(&j) {
            Ordering::Less => Ok(Pair { i, j }),
            Ordering::Greater => Ok(Pair { i: j, j: i }),
            Ordering::Equal => Err(StructureError::SelfPair(i)),
        }
    }

    /// Return the 5'-side index.
    pub fn i(&self) -> RESIDX {
        self.i
    }

    /// Return the 3'-side index.
    pub fn j(&self) -> RESIDX {
        self.j
    }

    /// Compact 64-bit key encoding both indices.
    pub fn key(&self) -> P1KEY {
        ((self.i as u32 as P1KEY) << 32) | (self.j as u32 as P1KEY)
    }

    /// Decode a key back into a `Pair`.
    pub fn from_key(key: P1KEY) -> Self {
        let i = (key >> 32) as u32 as RESIDX;
        let j = (key & 0xFFFF_FFFF) as u32 as RESIDX;
        debug_assert!(i < j);
        Pair { i, j }
    }

    /// True if the two pairs cross (i1 < i2 < j1 < j2 up to swapping
    /// the roles of self and other). Nested and disjoint pairs do not
    /// cross; neither do pairs sharing an endpoint.
    pub fn crosses(&self, other: &Pair) -> bool {
        let (a, b) = if self.i < other.i {
            (self, other)
        } else {
            (other, self)
        };
        a.i < b.i && b.i < a.j && a.j < b.j
    }

    /// True if the two pairs have an endpoint in common.
    pub fn shares_residue(&self, other: &Pair) -> bool {
        self.i == other.i || self.i == other.j || self.j == other.i || self.j == other.j
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.i, self.j)
    }
}
