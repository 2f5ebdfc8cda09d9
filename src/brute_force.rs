//! Exhaustive enumeration of set partitions. Exponential in |V|, only meant to validate the
//! minimizer on small instances.

use crate::error::SfmResult;
use crate::minimizer::{validate_ground, Bipartition, Minimum};
use crate::oracle::{checked_evaluate, SetFunction};

/// returns all partitions of 'ground' into exactly 'k' nonempty blocks
/// -> every block is sorted and the blocks are ordered by their smallest element, so each
/// partition is listed exactly once (duplicates in 'ground' are ignored)
pub fn enumerate_partitions(ground: &[usize], k: usize) -> Vec<Vec<Vec<usize>>> {
    let mut elements = ground.to_vec();
    elements.sort_unstable();
    elements.dedup();
    let mut partitions = Vec::new();
    let mut blocks: Vec<Vec<usize>> = Vec::with_capacity(k);
    extend_partition(&elements, k, &mut blocks, &mut partitions);
    partitions
}

/// places the first element of 'rest' in every admissible block and recurses
fn extend_partition(rest: &[usize], k: usize, blocks: &mut Vec<Vec<usize>>, partitions: &mut Vec<Vec<Vec<usize>>>) {
    if blocks.len() + rest.len() < k {
        return;  // too few elements left to open the missing blocks
    }
    let Some((&x, tail)) = rest.split_first() else {
        if blocks.len() == k {
            partitions.push(blocks.clone());
        }
        return;
    };
    for i in 0..blocks.len() {
        blocks[i].push(x);
        extend_partition(tail, k, blocks, partitions);
        blocks[i].pop();
    }
    if blocks.len() < k {
        blocks.push(vec![x]);
        extend_partition(tail, k, blocks, partitions);
        blocks.pop();
    }
}

/// minimizes 'f' over all nonempty proper subsets of 'ground' by trying every bipartition
/// -> both blocks are evaluated (no symmetry assumed); ties go to the first subset tried
pub fn minimum_by_enumeration<P, F>(ground: &[usize], f: &F, params: &P) -> SfmResult<Minimum>
where
    P: ?Sized,
    F: SetFunction<P> + ?Sized,
{
    validate_ground(ground)?;
    let mut best: Option<(Vec<usize>, f64)> = None;
    for partition in enumerate_partitions(ground, 2) {
        for block in partition {
            let value = checked_evaluate(f, &block, ground, params)?;
            match best {
                Some((_, min)) if min <= value => {},
                _ => best = Some((block, value)),
            }
        }
    }
    // a ground set with two or more elements has at least one bipartition
    let (block, value) = best.unwrap_or_default();
    Ok(Minimum { partition: Bipartition::from_block(ground, &block), value })
}
