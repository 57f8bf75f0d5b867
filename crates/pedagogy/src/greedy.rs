//! Greedy left-to-right differ with moves.
//!
//! After dropping old-only items, walk the new list one position at a
//! time. If the item already sitting at that position is the right one,
//! keep it; if the right one is further down, move it up; otherwise insert
//! it. Easy to get right, but it can move far more items than needed:
//! sending the first item to the back moves every other item forward
//! instead of moving that one item.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::differ::Differ;
use crate::op::Op;

#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyDiffer;

impl Differ for GreedyDiffer {
    fn name(&self) -> &'static str {
        return "greedy";
    }

    fn diff<T, K>(
        &self,
        old: &[T],
        new: &[T],
        key: impl Fn(&T) -> K,
        same: impl Fn(&T, &T) -> bool,
    ) -> Vec<Op<T>>
    where
        T: Clone,
        K: Eq + Hash,
    {
        let old_keys: Vec<K> = old.iter().map(&key).collect();
        let new_keys: Vec<K> = new.iter().map(&key).collect();
        let in_new: FxHashSet<&K> = new_keys.iter().collect();

        let mut ops = Vec::new();

        // Old positions of the items currently in the list, None for inserts.
        let mut current: Vec<Option<usize>> = Vec::with_capacity(new.len());
        for i in (0..old.len()).rev() {
            if !in_new.contains(&old_keys[i]) {
                ops.push(Op::Remove(i));
            }
        }
        for i in 0..old.len() {
            if in_new.contains(&old_keys[i]) {
                current.push(Some(i));
            }
        }

        for (j, wanted) in new_keys.iter().enumerate() {
            let found = (j..current.len())
                .find(|&p| current[p].is_some_and(|i| &old_keys[i] == wanted));
            let Some(p) = found else {
                ops.push(Op::Insert(j, new[j].clone()));
                current.insert(j, None);
                continue;
            };
            if p != j {
                ops.push(Op::Move(p, j));
                let entry = current.remove(p);
                current.insert(j, entry);
            }
            if let Some(i) = current[j] {
                if !same(&old[i], &new[j]) {
                    ops.push(Op::Update(j, new[j].clone()));
                }
            }
        }
        return ops;
    }
}
