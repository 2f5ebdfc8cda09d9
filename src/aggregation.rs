use ahash::AHashSet;
use crate::error::{SfmError, SfmResult};

/// returns an error naming the first element of 'ids' that occurs twice
pub(crate) fn ensure_distinct(ids: &[usize], what: &str) -> SfmResult<()> {
    let mut seen: AHashSet<usize> = AHashSet::with_capacity(ids.len());
    for &x in ids {
        if !seen.insert(x) {
            return Err(SfmError::invalid_input(format!("{x} occurs twice in the {what}")));
        }
    }
    Ok(())
}

/// arena mapping node handles to the original ground set elements they represent
/// -> handle 'i' starts out as the singleton {V[i]}; merging appends the absorbed node's elements
/// to the surviving node and invalidates the absorbed handle (handles are never removed)
#[derive(Clone, Debug)]
pub struct Aggregation {
    members: Vec<Vec<usize>>,
    active: Vec<bool>,
    active_count: usize,
}

impl Aggregation {
    /// creates one node per element of 'ground' (node 'i' owns [ground[i]])
    /// -> fails if 'ground' contains an element twice (the nodes would not partition it)
    pub fn singletons(ground: &[usize]) -> SfmResult<Self> {
        ensure_distinct(ground, "ground set")?;
        Ok(Aggregation {
            members: ground.iter().map(|&x| vec![x]).collect(),
            active: vec![true; ground.len()],
            active_count: ground.len(),
        })
    }

    /// returns the number of handles (active or absorbed)
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// returns the number of nodes that have not been absorbed yet
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// returns whether 'node' is a handle that has not been absorbed into another node
    pub fn is_active(&self, node: usize) -> bool {
        self.active.get(node).copied().unwrap_or(false)
    }

    /// returns the elements represented by 'node' (empty for absorbed or unknown handles)
    pub fn members(&self, node: usize) -> &[usize] {
        match self.members.get(node) {
            Some(m) => m,
            None => &[],
        }
    }

    /// contracts 'absorbed' into 'keep': S[keep] = S[keep] ∪ S[absorbed], S[absorbed] = ∅
    pub fn merge(&mut self, keep: usize, absorbed: usize) -> SfmResult<()> {
        if keep == absorbed {
            return Err(SfmError::invalid_input(format!("cannot merge node {keep} with itself")));
        }
        for node in [keep, absorbed] {
            if !self.is_active(node) {
                return Err(SfmError::invalid_input(format!("node {node} is not active")));
            }
        }
        let moved = std::mem::take(&mut self.members[absorbed]);
        self.members[keep].extend(moved);
        self.active[absorbed] = false;
        self.active_count -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_test() {
        let mut s = Aggregation::singletons(&[10, 11, 12, 13]).unwrap();
        assert_eq!(s.active_count(), 4);
        assert_eq!(s.members(2), &[12]);

        s.merge(2, 3).unwrap();
        s.merge(0, 2).unwrap();
        assert_eq!(s.members(0), &[10, 12, 13]);
        assert!(s.members(2).is_empty());
        assert!(s.members(3).is_empty());
        assert!(!s.is_active(2));
        assert!(s.is_active(0) && s.is_active(1));
        assert_eq!(s.active_count(), 2);
        assert_eq!(s.size(), 4);  // handles stay valid indices

        // active nodes still partition the ground set
        let mut covered: Vec<usize> = (0..s.size()).flat_map(|i| s.members(i).to_vec()).collect();
        covered.sort_unstable();
        assert_eq!(covered, vec![10, 11, 12, 13]);
    }

    #[test]
    fn invalid_merges() {
        let mut s = Aggregation::singletons(&[0, 1, 2]).unwrap();
        assert!(s.merge(1, 1).is_err());
        s.merge(0, 1).unwrap();
        assert!(s.merge(1, 2).is_err());  // 1 has been absorbed
        assert!(s.merge(0, 7).is_err());  // unknown handle
        assert!(s.members(7).is_empty());
        assert_eq!(s.active_count(), 2);
    }

    #[test]
    fn duplicate_elements_are_rejected() {
        assert!(matches!(Aggregation::singletons(&[1, 2, 1]), Err(SfmError::InvalidInput(_))));
        assert!(matches!(Aggregation::singletons(&[usize::MAX, usize::MAX]), Err(SfmError::InvalidInput(_))));
        assert_eq!(Aggregation::singletons(&[]).unwrap().size(), 0);
        assert_eq!(Aggregation::singletons(&[4]).unwrap().active_count(), 1);
    }
}
