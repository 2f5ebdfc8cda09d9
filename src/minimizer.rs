use log::{debug, info};
use crate::aggregation::{ensure_distinct, Aggregation};
use crate::error::{SfmError, SfmResult};
use crate::oracle::{checked_evaluate, SetFunction};
use crate::pendent_pair::find_pendent_pair;
use crate::set_ops::set_difference;

/// split of the ground set into two disjoint, nonempty blocks
/// -> both blocks are sorted, the block containing the smallest element comes first
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bipartition {
    pub first: Vec<usize>,
    pub second: Vec<usize>,
}

impl Bipartition {
    /// creates the canonical bipartition (block, ground \ block)
    /// -> element IDs may be arbitrarily large, so the complement is found by binary search
    pub fn from_block(ground: &[usize], block: &[usize]) -> Self {
        let mut block = block.to_vec();
        block.sort_unstable();
        let mut rest: Vec<usize> = ground.iter()
            .copied()
            .filter(|x| block.binary_search(x).is_err())
            .collect();
        rest.sort_unstable();
        if block.first() < rest.first() || rest.is_empty() {
            Bipartition { first: block, second: rest }
        } else {
            Bipartition { first: rest, second: block }
        }
    }
}

/// minimum found by the minimizer: the bipartition (R, V \ R) and f(R)
#[derive(Clone, Debug, PartialEq)]
pub struct Minimum {
    pub partition: Bipartition,
    pub value: f64,
}

/// checks that 'ground' has at least two elements and no duplicates
pub(crate) fn validate_ground(ground: &[usize]) -> SfmResult<()> {
    if ground.len() < 2 {
        return Err(SfmError::invalid_input(
            format!("the ground set needs at least 2 elements, got {}", ground.len())));
    }
    ensure_distinct(ground, "ground set")
}

/// minimizes the symmetric submodular function 'f' over all nonempty proper subsets of 'ground'
/// (Queyranne's algorithm)
/// -> n-1 rounds: find a pendent pair (s, t), store S[t] as a candidate, contract t into s;
/// the candidate with the smallest value (first one on ties) is returned
/// -> O(n³) oracle calls, every oracle error aborts the whole run
pub fn minimize<P, F>(ground: &[usize], f: &F, params: &P) -> SfmResult<Minimum>
where
    P: ?Sized,
    F: SetFunction<P> + ?Sized,
{
    validate_ground(ground)?;
    let n = ground.len();
    let mut aggregation = Aggregation::singletons(ground)?;
    let mut active: Vec<usize> = (0..n).collect();
    let mut candidates: Vec<(Vec<usize>, f64)> = Vec::with_capacity(n - 1);

    for round in 0..n - 1 {
        let pair = find_pendent_pair(&active, ground, &aggregation, f, params)?;
        let cut = aggregation.members(pair.t).to_vec();
        let value = checked_evaluate(f, &cut, ground, params)?;
        debug!("round {round}: contracting {} into {} (candidate {cut:?}, value {value})", pair.t, pair.s);
        candidates.push((cut, value));

        aggregation.merge(pair.s, pair.t)?;
        active = set_difference(&active, &[pair.t]);
    }
    debug_assert_eq!(aggregation.active_count(), 1);

    let mut best = 0;
    for (i, (_, value)) in candidates.iter().enumerate().skip(1) {
        if *value < candidates[best].1 {
            best = i;
        }
    }
    let (block, value) = candidates.swap_remove(best);
    let partition = Bipartition::from_block(ground, &block);
    info!("minimum {value} attained by {:?} | {:?}", partition.first, partition.second);

    Ok(Minimum { partition, value })
}
