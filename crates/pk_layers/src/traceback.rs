//! Layer extraction from a completed gamma table.
//!
//! Reconstructs one concrete optimum with an explicit stack instead of
//! recursion, so the traversal depth stays bounded for large inputs.
//!
//! The candidate order below is the deterministic tie-break: when
//! several subsets reach the same score, the one produced is decided
//! by checking a-unpaired first, then b-unpaired, then the pair
//! (a, b) itself, then the first matching split point scanning k
//! upward from a. Changing this order changes which of the equally
//! large layers comes out.
//!

use pk_structure::Pair;
use pk_structure::PairSet;
use pk_structure::RESIDX;

use crate::nussinov::GammaTable;


/// Extract one maximum non-crossing layer from the dense working set.
///
/// Pairs taken into the layer are removed from `working`; everything
/// else stays behind for later rounds. The `used` markers stop a
/// residue from being assigned twice even when table scores would
/// coincidentally admit it.
pub(crate) fn extract_layer(gamma: &GammaTable, working: &mut PairSet) -> PairSet {
    let len = gamma.len();
    let mut layer = PairSet::new();
    if len < 2 {
        return layer;
    }

    let mut used = vec![false; len];
    let mut stack: Vec<(usize, usize)> = vec![(0, len - 1)];

    while let Some((a, b)) = stack.pop() {
        if a >= b {
            continue;
        }
        let score = gamma.get(a, b);
        let pair = Pair::new(a as RESIDX, b as RESIDX);

        if gamma.get(a + 1, b) == score {
            // a unpaired
            stack.push((a + 1, b));
        } else if gamma.get(a, b - 1) == score {
            // b unpaired
            stack.push((a, b - 1));
        } else if working.contains(&pair)
            && gamma.get(a + 1, b - 1) + 1 == score
            && !used[a]
            && !used[b]
        {
            used[a] = true;
            used[b] = true;
            working.remove(&pair);
            layer.insert(pair);
            stack.push((a + 1, b - 1));
        } else {
            // bifurcation: first matching split point wins; the left
            // half is pushed last so it is visited first.
            for k in a..b {
                if gamma.get(a, k) + gamma.get(k + 1, b) == score {
                    stack.push((k + 1, b));
                    stack.push((a, k));
                    break;
                }
            }
        }
    }
    layer
}
