use std::fmt;

use pk_structure::StructureError;

/// Error type for pseudoknot layer decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompositionError {
    /// The input was rejected before any table was built.
    InvalidInput(StructureError),

    /// A traceback round consumed no pair although pairs remain.
    /// This cannot happen for a correctly filled table; it signals a
    /// defect in the engine, not a problem with the input.
    StalledTraceback { remaining: usize },
}

impl fmt::Display for DecompositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompositionError::InvalidInput(e) => write!(f, "invalid input: {e}"),
            DecompositionError::StalledTraceback { remaining } => {
                write!(f, "traceback stalled with {remaining} pairs unassigned")
            }
        }
    }
}

impl std::error::Error for DecompositionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecompositionError::InvalidInput(e) => Some(e),
            DecompositionError::StalledTraceback { .. } => None,
        }
    }
}

impl From<StructureError> for DecompositionError {
    fn from(e: StructureError) -> Self {
        DecompositionError::InvalidInput(e)
    }
}
