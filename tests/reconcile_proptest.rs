//! Property-based tests for the reconciler.

use proptest::prelude::*;

use listdiff::{compute_edits, EditScript, FnCallback, ReconcileOptions, Reconciler, Snapshot};
use pedagogy::differ::Differ;
use pedagogy::greedy::GreedyDiffer;
use pedagogy::lcs::LcsDiffer;
use pedagogy::op::{move_count, Op};

// =============================================================================
// Test helpers
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Item {
    key: u8,
    content: u8,
}

/// A list of items with unique keys, drawn from a small key space so that
/// two lists usually share many keys.
fn arbitrary_list() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((0u8..40, 0u8..3), 0..40).prop_map(|pairs| {
        let mut seen = [false; 40];
        let mut items = Vec::new();
        for (key, content) in pairs {
            if !seen[key as usize] {
                seen[key as usize] = true;
                items.push(Item { key, content });
            }
        }
        items
    })
}

fn diff(old: &[Item], new: &[Item]) -> EditScript<Item> {
    let old = Snapshot::from(old);
    let new = Snapshot::from(new);
    return compute_edits(&old, &new, |i| i.key, |a, b| a == b).unwrap();
}

/// Old ranks of the common items, taken in new order.
fn common_ranks(old: &[Item], new: &[Item]) -> Vec<usize> {
    let common_old: Vec<u8> = old
        .iter()
        .filter(|o| new.iter().any(|n| n.key == o.key))
        .map(|o| o.key)
        .collect();
    return new
        .iter()
        .filter_map(|n| common_old.iter().position(|&k| k == n.key))
        .collect();
}

/// Quadratic LIS length, independent of the crate's own.
fn lis_len(values: &[usize]) -> usize {
    let mut best = vec![1usize; values.len()];
    for i in 0..values.len() {
        for j in 0..i {
            if values[j] < values[i] {
                best[i] = best[i].max(best[j] + 1);
            }
        }
    }
    return best.into_iter().max().unwrap_or(0);
}

fn structural_ops<T>(ops: &[Op<T>]) -> usize {
    return ops
        .iter()
        .filter(|op| matches!(op, Op::Insert(..) | Op::Remove(..)))
        .count();
}

// =============================================================================
// Core properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Applying the script to old always yields new.
    #[test]
    fn round_trip(old in arbitrary_list(), new in arbitrary_list()) {
        let script = diff(&old, &new);
        let mut items = old.clone();
        script.apply_to(&mut items).unwrap();
        prop_assert_eq!(items, new);
    }

    /// Diffing a list against itself produces nothing.
    #[test]
    fn identity_is_empty(list in arbitrary_list()) {
        prop_assert!(diff(&list, &list).is_empty());
    }

    /// Moves = common items - longest increasing run of their old ranks.
    #[test]
    fn moves_are_minimal(old in arbitrary_list(), new in arbitrary_list()) {
        let ranks = common_ranks(&old, &new);
        let script = diff(&old, &new);
        prop_assert_eq!(script.counts().moves, ranks.len() - lis_len(&ranks));
    }

    /// Every old-only item is removed and every new-only item inserted,
    /// exactly once.
    #[test]
    fn removes_and_inserts_match_key_sets(old in arbitrary_list(), new in arbitrary_list()) {
        let old_only = old.iter().filter(|o| !new.iter().any(|n| n.key == o.key)).count();
        let new_only = new.iter().filter(|n| !old.iter().any(|o| o.key == n.key)).count();
        let counts = diff(&old, &new).counts();
        prop_assert_eq!(counts.removes, old_only);
        prop_assert_eq!(counts.inserts, new_only);
    }

    /// Shuffling a list only ever produces moves.
    #[test]
    fn permutation_is_moves_only(list in arbitrary_list(), seed in any::<u64>()) {
        let mut shuffled = list.clone();
        // Deterministic Fisher-Yates from the seed.
        let mut state = seed | 1;
        for i in (1..shuffled.len()).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            shuffled.swap(i, (state % (i as u64 + 1)) as usize);
        }
        let counts = diff(&list, &shuffled).counts();
        prop_assert_eq!(counts.inserts + counts.removes + counts.updates, 0);
    }
}

// =============================================================================
// Agreement with the reference differs
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Never moves more than the greedy differ.
    #[test]
    fn no_more_moves_than_greedy(old in arbitrary_list(), new in arbitrary_list()) {
        let greedy = GreedyDiffer.diff(&old, &new, |i| i.key, |a, b| a == b);
        prop_assert!(diff(&old, &new).counts().moves <= move_count(&greedy));
    }

    /// Without move detection, the structural edit count equals the LCS
    /// differ's: both keep exactly a longest common subsequence.
    #[test]
    fn narrowed_mode_matches_lcs(old in arbitrary_list(), new in arbitrary_list()) {
        let reconciler = Reconciler::new(ReconcileOptions::new().detect_moves(false));
        let callback = FnCallback::new(|i: &Item| i.key, |a: &Item, b: &Item| a == b);
        let script = reconciler.compute(&callback, &old, &new).unwrap();

        let mut items = old.clone();
        script.apply_to(&mut items).unwrap();
        prop_assert_eq!(&items, &new);

        let counts = script.counts();
        prop_assert_eq!(counts.moves, 0);
        let lcs = LcsDiffer.diff(&old, &new, |i| i.key, |a, b| a == b);
        prop_assert_eq!(counts.inserts + counts.removes, structural_ops(&lcs));
    }
}
