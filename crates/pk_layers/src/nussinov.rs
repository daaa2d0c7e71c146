//! Nussinov-style base-pair maximization over a fixed candidate set.
//!
//! Unlike sequence folding, the pairing bonus is not derived from
//! complementarity: position pair (a, b) scores 1 exactly when it
//! occurs in the working pair set. The table entry gamma[(a, b)] is
//! the size of the largest non-crossing subset of the candidates that
//! fits inside the closed range [a, b].
//!

use ndarray::Array2;

use pk_structure::Pair;
use pk_structure::PairSet;
use pk_structure::RESIDX;


/// Dense gamma table for one compression round. O(len^2) space.
#[derive(Debug, Clone)]
pub(crate) struct GammaTable {
    gamma: Array2<usize>,
}

impl GammaTable {
    /// Fill the table for `len` dense residues in O(len^3) time.
    ///
    /// The table is zero-initialized; entries on and below the
    /// diagonal never get written and double as the gamma[a][a] = 0
    /// and gamma[a][a-1] = 0 base cases of the recursion. `len` of 0
    /// or 1 skips the loop entirely.
    pub fn new(pairs: &PairSet, len: usize) -> Self {
        let mut gamma = Array2::from_elem((len, len), 0);
        for d in 1..len {
            for a in 0..len - d {
                let b = a + d;
                let mut best = gamma[(a + 1, b)].max(gamma[(a, b - 1)]);
                let bonus = usize::from(pairs.contains(&Pair::new(a as RESIDX, b as RESIDX)));
                best = best.max(gamma[(a + 1, b - 1)] + bonus);
                for k in a..b {
                    best = best.max(gamma[(a, k)] + gamma[(k + 1, b)]);
                }
                gamma[(a, b)] = best;
            }
        }
        Self { gamma }
    }

    /// Dense residue count the table was built for.
    pub fn len(&self) -> usize {
        self.gamma.nrows()
    }

    /// Table lookup for a sub-range [a, b] with a <= b + 1.
    pub fn get(&self, a: usize, b: usize) -> usize {
        self.gamma[(a, b)]
    }

    /// Size of the maximum non-crossing subset over the full range.
    pub fn max_pairs(&self) -> usize {
        match self.len() {
            0 => 0,
            n => self.gamma[(0, n - 1)],
        }
    }
}
