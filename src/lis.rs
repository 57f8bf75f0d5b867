//! Longest increasing subsequence.
//!
//! Patience sorting with back-pointers: O(n log n) time, O(n) space.
//! Used to pick the largest set of common items that can stay in place.

/// Mark the members of one longest strictly increasing subsequence.
///
/// Returns a mask the same length as `values`; `mask[i]` is true when
/// `values[i]` belongs to the chosen subsequence. When several longest
/// subsequences exist, the same one is chosen for the same input.
pub fn longest_increasing(values: &[usize]) -> Vec<bool> {
    let mut mask = vec![false; values.len()];
    if values.is_empty() {
        return mask;
    }

    // tails[k] = index of the smallest tail of an increasing run of length k + 1
    let mut tails: Vec<usize> = Vec::new();
    let mut prev: Vec<Option<usize>> = vec![None; values.len()];

    for (i, &value) in values.iter().enumerate() {
        let k = tails.partition_point(|&t| values[t] < value);
        if k > 0 {
            prev[i] = Some(tails[k - 1]);
        }
        if k == tails.len() {
            tails.push(i);
        } else {
            tails[k] = i;
        }
    }

    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        mask[i] = true;
        cursor = prev[i];
    }
    return mask;
}

/// Length of the longest strictly increasing subsequence.
pub fn longest_increasing_len(values: &[usize]) -> usize {
    return longest_increasing(values).iter().filter(|&&kept| kept).count();
}
