//! Longest common subsequence differ.
//!
//! The textbook approach: find the longest common subsequence of the two
//! key lists, keep it, remove everything else from old and insert
//! everything else from new. There is no notion of a move, so an item
//! that changed places is removed and inserted again.
//!
//! A full (n + 1) x (m + 1) table is filled, so time and memory are both
//! O(n * m). Fine for the list sizes tests use, hopeless for large lists.

use std::hash::Hash;

use crate::differ::Differ;
use crate::op::Op;

#[derive(Debug, Clone, Copy, Default)]
pub struct LcsDiffer;

impl Differ for LcsDiffer {
    fn name(&self) -> &'static str {
        return "lcs";
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
        let (n, m) = (old.len(), new.len());

        // table[i][j] = LCS length of old[i..] and new[j..]
        let width = m + 1;
        let mut table = vec![0u32; (n + 1) * width];
        for i in (0..n).rev() {
            for j in (0..m).rev() {
                table[i * width + j] = if old_keys[i] == new_keys[j] {
                    table[(i + 1) * width + j + 1] + 1
                } else {
                    table[(i + 1) * width + j].max(table[i * width + j + 1])
                };
            }
        }

        let mut ops = Vec::new();
        let (mut i, mut j, mut pos) = (0, 0, 0);
        while i < n || j < m {
            if i < n && j < m && old_keys[i] == new_keys[j] {
                if !same(&old[i], &new[j]) {
                    ops.push(Op::Update(pos, new[j].clone()));
                }
                i += 1;
                j += 1;
                pos += 1;
            } else if j < m && (i == n || table[i * width + j + 1] >= table[(i + 1) * width + j]) {
                ops.push(Op::Insert(pos, new[j].clone()));
                j += 1;
                pos += 1;
            } else {
                ops.push(Op::Remove(pos));
                i += 1;
            }
        }
        return ops;
    }
}
