//! The Differ trait defines the interface shared by the reference differs.
//!
//! A shared interface enables:
//! - Conformance testing with one helper for every implementation
//! - Benchmarking the differs side by side

use std::hash::Hash;

use crate::op::Op;

/// Computes the edits that turn one list into another.
pub trait Differ {
    /// Short name for benchmark and test output.
    fn name(&self) -> &'static str;

    /// Compute the edits that turn `old` into `new`.
    ///
    /// Keys must be unique within each list. Items with equal keys are the
    /// same entity; `same` decides whether its content changed.
    fn diff<T, K>(
        &self,
        old: &[T],
        new: &[T],
        key: impl Fn(&T) -> K,
        same: impl Fn(&T, &T) -> bool,
    ) -> Vec<Op<T>>
    where
        T: Clone,
        K: Eq + Hash;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::op::apply;

    /// Pairs of key lists exercising the usual shapes of change.
    pub const CASES: &[(&[u32], &[u32])] = &[
        (&[], &[]),
        (&[], &[1, 2]),
        (&[1, 2], &[]),
        (&[1, 2, 3], &[1, 2, 3]),
        (&[1, 2, 3], &[2, 3, 1]),
        (&[1, 2, 3, 4], &[4, 3, 2, 1]),
        (&[1, 2, 3], &[1, 4, 3]),
        (&[1, 2, 3, 4, 5, 6], &[7, 6, 2, 8, 4, 1]),
    ];

    /// Test helper to verify the round trip for a Differ implementation.
    pub fn verify_round_trip<D: Differ>(differ: &D) {
        for (old, new) in CASES {
            // Content is the key times ten, bumped for even keys in `new`,
            // so some common items also change.
            let old: Vec<(u32, u32)> = old.iter().map(|&k| (k, k * 10)).collect();
            let new: Vec<(u32, u32)> = new
                .iter()
                .map(|&k| (k, k * 10 + (k % 2 == 0) as u32))
                .collect();
            let ops = differ.diff(&old, &new, |p| p.0, |a, b| a == b);

            let mut items = old.clone();
            apply(&mut items, &ops);
            assert_eq!(items, new, "{} round trip, ops {:?}", differ.name(), ops);
        }
    }
}
