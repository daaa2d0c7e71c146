use std::fmt;

use crate::RESIDX;

/// Error type for base-pair representation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureError {
    /// A pair with identical endpoints (i, i); base pairs must
    /// connect two distinct residues.
    SelfPair(RESIDX),
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::SelfPair(i) => {
                write!(f, "self-pair ({i}, {i}): a residue cannot pair with itself")
            }
        }
    }
}

impl std::error::Error for StructureError {}
