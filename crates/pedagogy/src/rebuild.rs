//! The simplest possible differ: throw everything away and start over.
//!
//! Always correct, never efficient. Useful as the worst case in
//! benchmarks, and as a reminder of what a display has to do without
//! a differ at all: redraw every row.

use std::hash::Hash;

use crate::differ::Differ;
use crate::op::Op;

#[derive(Debug, Clone, Copy, Default)]
pub struct RebuildDiffer;

impl Differ for RebuildDiffer {
    fn name(&self) -> &'static str {
        return "rebuild";
    }

    fn diff<T, K>(
        &self,
        old: &[T],
        new: &[T],
        _key: impl Fn(&T) -> K,
        _same: impl Fn(&T, &T) -> bool,
    ) -> Vec<Op<T>>
    where
        T: Clone,
        K: Eq + Hash,
    {
        let mut ops = Vec::with_capacity(old.len() + new.len());
        for i in (0..old.len()).rev() {
            ops.push(Op::Remove(i));
        }
        for (j, item) in new.iter().enumerate() {
            ops.push(Op::Insert(j, item.clone()));
        }
        return ops;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differ::tests::verify_round_trip;

    #[test]
    fn round_trip() {
        verify_round_trip(&RebuildDiffer);
    }

    #[test]
    fn op_count_is_sum_of_lengths() {
        let ops = RebuildDiffer.diff(&[1, 2], &[1, 2, 3], |n| *n, |a, b| a == b);
        assert_eq!(ops.len(), 5);
    }
}
