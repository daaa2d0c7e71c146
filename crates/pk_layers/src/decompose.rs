//! Pseudoknot layer decomposition.
//!
//! Owns the working pair set and repeats compress -> table ->
//! traceback -> decompress rounds until every input pair sits in some
//! layer. Layer 0 is a maximum non-crossing subset of the whole
//! input; each later layer is a maximum non-crossing subset of the
//! leftovers. The layer count is the pseudoknot order.
//!

use std::fmt;

use log::debug;

use pk_structure::Pair;
use pk_structure::PairSet;
use pk_structure::RESIDX;

use crate::compression::DenseIndex;
use crate::error::DecompositionError;
use crate::nussinov::GammaTable;
use crate::traceback::extract_layer;


/// One non-crossing subset of the input pairs, in original residue
/// indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pairs: PairSet,
}

impl Layer {
    /// Number of pairs in the layer.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the layer holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Check if a pair belongs to the layer.
    pub fn contains(&self, pair: &Pair) -> bool {
        self.pairs.contains(pair)
    }

    /// Iterator over the layer's pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Pair> + '_ {
        self.pairs.iter()
    }

    /// Return the layer's pairs as a sorted Vec.
    pub fn to_vec(&self) -> Vec<Pair> {
        self.pairs.to_vec()
    }

    /// True if no two pairs cross and no residue is used twice.
    pub fn is_noncrossing(&self) -> bool {
        let v = self.pairs.to_vec();
        for (n, p) in v.iter().enumerate() {
            for q in &v[n + 1..] {
                if p.crosses(q) || p.shares_residue(q) {
                    return false;
                }
            }
        }
        true
    }
}

impl From<PairSet> for Layer {
    fn from(pairs: PairSet) -> Self {
        Layer { pairs }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pairs.fmt(f)
    }
}


/// Ordered sequence of non-crossing layers covering the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decomposition {
    layers: Vec<Layer>,
}

impl Decomposition {
    /// Number of layers, i.e. the pseudoknot order of the input.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if the input had no pairs at all.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// The layers in extraction order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Iterator over the layers in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    /// Consume the decomposition, yielding the layers.
    pub fn into_layers(self) -> Vec<Layer> {
        self.layers
    }

    /// Render the decomposition as an extended dot-bracket string
    /// spanning the occupied residue range: layer 0 uses `()`, the
    /// next layers `[]`, `{}`, `<>`, then letter pairs `Aa` onward.
    /// Positions without a pair show as `.`. Meant for compact residue
    /// numberings; the string covers min..=max occupied residue.
    pub fn to_dotbracket(&self) -> String {
        let mut lo = RESIDX::MAX;
        let mut hi = RESIDX::MIN;
        for layer in &self.layers {
            for pair in layer.iter() {
                lo = lo.min(pair.i());
                hi = hi.max(pair.j());
            }
        }
        if self.layers.is_empty() {
            return String::new();
        }

        let mut out = vec!['.'; (hi - lo + 1) as usize];
        for (depth, layer) in self.layers.iter().enumerate() {
            let (open, close) = brackets(depth);
            for pair in layer.iter() {
                out[(pair.i() - lo) as usize] = open;
                out[(pair.j() - lo) as usize] = close;
            }
        }
        out.into_iter().collect()
    }
}

/// Bracket symbols per layer depth; letter pairs cycle after `Zz`.
fn brackets(depth: usize) -> (char, char) {
    match depth {
        0 => ('(', ')'),
        1 => ('[', ']'),
        2 => ('{', '}'),
        3 => ('<', '>'),
        d => {
            let letter = ((d - 4) % 26) as u8;
            ((b'A' + letter) as char, (b'a' + letter) as char)
        }
    }
}


/// Decompose base pairs into pseudoknot layers.
///
/// Accepts unordered endpoint tuples with arbitrary (possibly
/// negative, non-contiguous) residue indices; duplicates collapse.
/// Fails up front on any self-pair `(i, i)`, before any table is
/// built. Empty input yields an empty decomposition.
pub fn decompose(pairs: &[(RESIDX, RESIDX)]) -> Result<Decomposition, DecompositionError> {
    let working = PairSet::try_from(pairs)?;
    decompose_set(working)
}

impl TryFrom<&PairSet> for Decomposition {
    type Error = DecompositionError;

    fn try_from(pairs: &PairSet) -> Result<Self, Self::Error> {
        decompose_set(pairs.clone())
    }
}

fn decompose_set(mut working: PairSet) -> Result<Decomposition, DecompositionError> {
    let mut layers = Vec::new();
    while !working.is_empty() {
        let index = DenseIndex::from(&working);
        let mut dense = index.compress(&working);
        let gamma = GammaTable::new(&dense, index.len());
        let layer = extract_layer(&gamma, &mut dense);
        debug_assert_eq!(layer.len(), gamma.max_pairs());
        if layer.is_empty() {
            // The used-residue guard refused every candidate; a
            // correctly filled table never lets this happen.
            return Err(DecompositionError::StalledTraceback {
                remaining: working.len(),
            });
        }
        debug!(
            "layer {}: {} pairs taken, {} remaining",
            layers.len(),
            layer.len(),
            dense.len()
        );
        layers.push(Layer::from(index.decompress(&layer)));
        working = index.decompress(&dense);
    }
    Ok(Decomposition { layers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use pk_structure::StructureError;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn pairs(layer: &Layer) -> Vec<(RESIDX, RESIDX)> {
        layer.to_vec().iter().map(|p| (p.i(), p.j())).collect()
    }

    /// Size of the largest non-crossing subset, by exhaustive search.
    fn brute_force_max(tuples: &[(RESIDX, RESIDX)]) -> usize {
        let all: Vec<Pair> = PairSet::try_from(tuples).unwrap().to_vec();
        all.iter()
            .copied()
            .powerset()
            .filter(|subset| {
                subset.iter().enumerate().all(|(n, p)| {
                    subset[n + 1..]
                        .iter()
                        .all(|q| !p.crosses(q) && !p.shares_residue(q))
                })
            })
            .map(|subset| subset.len())
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_empty_input() {
        let d = decompose(&[]).unwrap();
        assert!(d.is_empty());
        assert_eq!(d.depth(), 0);
    }

    #[test]
    fn test_nested_input_single_layer() {
        let d = decompose(&[(1, 4), (2, 3)]).unwrap();
        assert_eq!(d.depth(), 1);
        assert_eq!(pairs(&d.layers()[0]), vec![(1, 4), (2, 3)]);
    }

    #[test]
    fn test_crossing_input_two_layers() {
        init_logging();
        let d = decompose(&[(1, 5), (2, 6)]).unwrap();
        assert_eq!(d.depth(), 2);
        assert_eq!(d.layers()[0].len(), 1);
        assert_eq!(d.layers()[1].len(), 1);
        // Fixed tie-break: dropping the lowest residue first means
        // (2, 6) wins layer 0.
        assert_eq!(pairs(&d.layers()[0]), vec![(2, 6)]);
        assert_eq!(pairs(&d.layers()[1]), vec![(1, 5)]);
    }

    #[test]
    fn test_crossing_plus_disjoint() {
        let d = decompose(&[(1, 3), (2, 4), (5, 6)]).unwrap();
        assert_eq!(d.depth(), 2);
        assert_eq!(d.layers()[0].len(), 2);
        assert_eq!(d.layers()[1].len(), 1);
        assert!(d.layers()[0].contains(&Pair::new(5, 6)));
    }

    #[test]
    fn test_self_pair_rejected_before_work() {
        let r = decompose(&[(1, 4), (2, 2)]);
        assert_eq!(
            r,
            Err(DecompositionError::InvalidInput(StructureError::SelfPair(2)))
        );
    }

    #[test]
    fn test_partition_property() {
        let input = [(1, 10), (2, 9), (3, 12), (4, 11), (5, 8), (6, 14), (7, 13)];
        let d = decompose(&input).unwrap();

        let mut covered = PairSet::new();
        let mut total = 0;
        for layer in d.iter() {
            total += layer.len();
            for pair in layer.iter() {
                assert!(covered.insert(pair), "pair {pair} appears in two layers");
            }
        }
        assert_eq!(total, input.len());
        assert_eq!(covered, PairSet::try_from(input.as_slice()).unwrap());
    }

    #[test]
    fn test_every_layer_noncrossing() {
        let input = [
            (1, 20),
            (2, 19),
            (3, 15),
            (4, 18),
            (5, 16),
            (6, 12),
            (7, 17),
            (8, 11),
            (9, 21),
            (10, 22),
        ];
        let d = decompose(&input).unwrap();
        for layer in d.iter() {
            assert!(layer.is_noncrossing(), "layer {layer} crosses itself");
        }
    }

    #[test]
    fn test_layer_zero_optimality() {
        // An H-type pseudoknot with a free stem on the side.
        let input = [
            (1, 12),
            (2, 11),
            (3, 10),
            (5, 17),
            (6, 16),
            (7, 15),
            (20, 25),
            (21, 24),
        ];
        let d = decompose(&input).unwrap();
        assert_eq!(d.layers()[0].len(), brute_force_max(&input));
    }

    #[test]
    fn test_layer_sizes_never_grow() {
        let input = [(1, 6), (2, 7), (3, 8), (4, 9), (5, 10), (11, 12)];
        let d = decompose(&input).unwrap();
        for w in d.layers().windows(2) {
            assert!(w[0].len() >= w[1].len());
        }
    }

    #[test]
    fn test_deterministic_repeat() {
        let input = [(1, 5), (2, 6), (3, 7), (4, 8), (9, 12), (10, 13)];
        let a = decompose(&input).unwrap();
        let b = decompose(&input).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sparse_and_negative_indices() {
        // Same shape as [(1,5),(2,6)] after compression.
        let d = decompose(&[(-100, 3000), (7, 90000)]).unwrap();
        assert_eq!(d.depth(), 2);
        assert_eq!(pairs(&d.layers()[0]), vec![(7, 90000)]);
        assert_eq!(pairs(&d.layers()[1]), vec![(-100, 3000)]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let d = decompose(&[(1, 4), (4, 1), (1, 4)]).unwrap();
        assert_eq!(d.depth(), 1);
        assert_eq!(d.layers()[0].len(), 1);
    }

    #[test]
    fn test_try_from_pair_set() {
        let ps = PairSet::try_from([(1, 4), (2, 3)].as_slice()).unwrap();
        let d = Decomposition::try_from(&ps).unwrap();
        assert_eq!(d.depth(), 1);
    }

    #[test]
    fn test_dotbracket_nested() {
        let d = decompose(&[(1, 4), (2, 3)]).unwrap();
        assert_eq!(d.to_dotbracket(), "(())");
    }

    #[test]
    fn test_dotbracket_pseudoknot() {
        let d = decompose(&[(1, 5), (2, 6)]).unwrap();
        // Layer 0 is (2, 6); layer 1 is (1, 5).
        assert_eq!(d.to_dotbracket(), "[(..])");
    }

    #[test]
    fn test_dotbracket_empty() {
        let d = decompose(&[]).unwrap();
        assert_eq!(d.to_dotbracket(), "");
    }

    #[test]
    fn test_deep_knot_order() {
        // A ladder of mutually crossing pairs: order equals pair count.
        let input: Vec<(RESIDX, RESIDX)> = (0..5).map(|n| (n, n + 5)).collect();
        let d = decompose(&input).unwrap();
        assert_eq!(d.depth(), 5);
        for layer in d.iter() {
            assert_eq!(layer.len(), 1);
        }
    }
}
