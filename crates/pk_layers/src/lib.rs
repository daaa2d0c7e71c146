//! The pk_layers crate.
//!
//! Decomposes an arbitrary set of base pairs into an ordered sequence
//! of mutually non-crossing subsets ("pseudoknot layers"):
//!  - layer 0 is a maximum non-crossing subset of the whole input,
//!  - layer k is a maximum non-crossing subset of whatever layers
//!    0..k left behind.
//!
//! The number of layers is the pseudoknot order of the structure.
//! Each round compresses the residues still in play to a dense range,
//! fills a Nussinov-style table over that range, and walks one optimal
//! solution back out. Everything is synchronous and owned by the call;
//! concurrent decompositions need no coordination.
//!

mod compression;
mod decompose;
mod error;
mod nussinov;
mod traceback;

pub use compression::*;
pub use decompose::*;
pub use error::*;
