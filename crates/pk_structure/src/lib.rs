//! The pk_structure crate.
//!
//! Provides compact base-pair representations for pseudoknot
//! layer extraction:
//!  - Pairs over arbitrary residue indices.
//!  - PairSets (integer-set backed pair collections).
//!  - Crossing / nesting predicates between pairs.
//!

mod error;
mod pair;
mod pair_set;

pub use error::*;
pub use pair::*;
pub use pair_set::*;


/// RESidue InDeX: we use `i32`, since residue numbers taken from
/// structure files are arbitrary integers (sparse, and occasionally
/// negative). Beware that `P1KEY` needs to be *twice as large* (in
/// bits) as `RESIDX`, since pairs `(RESIDX, RESIDX)` are compacted
/// into one `P1KEY`.
pub type RESIDX = i32;

/// Pair key. Must be >= 2×`RESIDX` in bit width so we can safely pack two indices.
pub type P1KEY = u64;

/// Compile-time sanity check: 2×RESIDX bits must fit into P1KEY.
const _: () = {
    debug_assert!(2 * RESIDX::BITS <= P1KEY::BITS);
};
