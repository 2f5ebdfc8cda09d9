use log::trace;
use crate::aggregation::{ensure_distinct, Aggregation};
use crate::error::{SfmError, SfmResult};
use crate::oracle::{checked_evaluate, SetFunction};

/// pendent pair (s, t) of the active nodes; 'value' is the key with which 't' was picked last
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendentPair {
    pub s: usize,
    pub t: usize,
    pub value: f64,
}

/// finds a pendent pair among the nodes 'active' (handles into 'aggregation')
/// -> starts a chain at active[0] and repeatedly attaches the unvisited node j minimizing
/// f(chain ∪ S[j]) - f(S[j]); the last two nodes attached form the pendent pair
/// (ties: the first node in 'active' order wins)
pub fn find_pendent_pair<P, F>(active: &[usize], ground: &[usize], aggregation: &Aggregation,
                               f: &F, params: &P) -> SfmResult<PendentPair>
where
    P: ?Sized,
    F: SetFunction<P> + ?Sized,
{
    let n = active.len();
    if n < 2 {
        return Err(SfmError::invalid_input(
            format!("a pendent pair needs at least 2 candidates, got {n}")));
    }
    for &node in active {
        if !aggregation.is_active(node) {
            return Err(SfmError::invalid_input(format!("node {node} is not active")));
        }
    }
    ensure_distinct(active, "pendent pair candidates")?;

    let mut used = vec![false; n];
    used[0] = true;
    let mut head = 0;  // position (in 'active') of the current chain head
    let mut prev = head;
    let mut value = 0.0;
    // buffer[..chain_len] holds the chain (elements absorbed so far, in absorption order);
    // the active nodes are disjoint, so chain ++ S[j] never repeats an element
    let mut buffer: Vec<usize> = Vec::with_capacity(ground.len());
    let mut chain_len = 0;

    for round in 0..n - 1 {
        prev = head;
        buffer.truncate(chain_len);
        buffer.extend_from_slice(aggregation.members(active[head]));
        chain_len = buffer.len();

        let mut best: Option<(usize, f64)> = None;
        for (j, &node) in active.iter().enumerate() {
            if used[j] {
                continue;
            }
            let members = aggregation.members(node);
            buffer.truncate(chain_len);
            buffer.extend_from_slice(members);
            let key = checked_evaluate(f, &buffer, ground, params)?
                - checked_evaluate(f, members, ground, params)?;
            match best {
                Some((_, min_key)) if min_key <= key => {},
                _ => best = Some((j, key)),
            }
        }

        // every round leaves at least one unvisited node behind
        let Some((next, key)) = best else { break; };
        trace!("pendent pair round {round}: attached node {} (key {key})", active[next]);
        used[next] = true;
        head = next;
        value = key;
    }

    Ok(PendentPair { s: active[prev], t: active[head], value })
}
