/// largest presence vector (relative to the input size) that 'set_difference' is willing to allocate
const DENSE_FACTOR: usize = 8;
const DENSE_MIN: usize = 1024;

/// returns the relative complement A \ B as a sorted list (duplicates in 'a' collapse)
/// -> marks the elements of 'a' in a presence vector of size max(a ∪ b) + 1, unmarks the ones of
/// 'b' and collects the remaining marks in increasing order
/// -> sparse inputs (huge elements compared to the number of elements) are sorted and searched
/// instead, so the vector never outgrows the input
pub fn set_difference(a: &[usize], b: &[usize]) -> Vec<usize> {
    let Some(&m) = a.iter().chain(b.iter()).max() else {
        return Vec::new();  // both sets empty
    };
    let limit = (a.len() + b.len()).saturating_mul(DENSE_FACTOR).max(DENSE_MIN);
    match m.checked_add(1) {
        Some(size) if size <= limit => dense_difference(a, b, size),
        _ => sparse_difference(a, b),
    }
}

fn dense_difference(a: &[usize], b: &[usize], size: usize) -> Vec<usize> {
    let mut present = vec![false; size];
    for &x in a {
        present[x] = true;
    }
    for &x in b {
        present[x] = false;
    }
    present.iter()
        .enumerate()
        .filter_map(|(x, &p)| if p { Some(x) } else { None })
        .collect()
}

fn sparse_difference(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut removed = b.to_vec();
    removed.sort_unstable();
    let mut diff = a.to_vec();
    diff.sort_unstable();
    diff.dedup();
    diff.retain(|x| removed.binary_search(x).is_err());
    diff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difference_test() {
        assert_eq!(set_difference(&[4, 1, 3, 0], &[3, 7]), vec![0, 1, 4]);
        assert_eq!(set_difference(&[5, 2, 2, 9], &[]), vec![2, 5, 9]);  // sorted + deduplicated
        assert_eq!(set_difference(&[0, 1, 2], &[0, 1, 2]), Vec::<usize>::new());
        assert_eq!(set_difference(&[], &[3, 8]), Vec::<usize>::new());
        assert_eq!(set_difference(&[], &[]), Vec::<usize>::new());
    }

    #[test]
    fn difference_of_self_is_empty() {
        let a = [12, 0, 7, 3, 3];
        assert!(set_difference(&a, &a).is_empty());
    }

    #[test]
    fn huge_elements() {
        assert_eq!(set_difference(&[usize::MAX, 3, 0], &[3]), vec![0, usize::MAX]);
        assert_eq!(set_difference(&[1 << 46, 5, 1 << 46], &[]), vec![5, 1 << 46]);
        assert_eq!(set_difference(&[7, 2], &[usize::MAX, 7]), vec![2]);
        assert!(set_difference(&[usize::MAX], &[usize::MAX]).is_empty());
    }

    #[test]
    fn dense_and_sparse_agree() {
        let a = [17, 3, 900, 3, 41, 0, 2000];
        let b = [41, 5, 2000, 1];
        let expected = vec![0, 3, 17, 900];
        assert_eq!(dense_difference(&a, &b, 2001), expected);
        assert_eq!(sparse_difference(&a, &b), expected);
        assert_eq!(set_difference(&a, &b), expected);
    }
}
