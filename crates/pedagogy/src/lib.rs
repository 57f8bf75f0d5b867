//! Educational list diffing algorithms.
//!
//! This crate provides small, easy-to-check list differs. They are the
//! yardstick the production reconciler in `listdiff` is tested and
//! benchmarked against:
//!
//! - Learning how keyed list diffing works, one idea at a time
//! - Comparing edit counts (how many removes, inserts, moves)
//! - Serving as an oracle in property tests
//!
//! # Implementations
//!
//! | Implementation | Algorithm | Moves | Cost |
//! |----------------|-----------|-------|------|
//! | `RebuildDiffer` | Remove all, insert all | No | O(n + m) |
//! | `LcsDiffer` | Longest common subsequence of keys | No | O(n * m) |
//! | `GreedyDiffer` | Fix positions left to right | Yes, not minimal | O(n * m) |
//!
//! # Properties
//!
//! All implementations must satisfy:
//!
//! - **Round trip**: applying `diff(old, new)` to `old` yields `new`
//! - **Identity**: `diff(s, s)` is empty (except `RebuildDiffer`)
//!
//! # Example
//!
//! ```
//! use pedagogy::differ::Differ;
//! use pedagogy::lcs::LcsDiffer;
//! use pedagogy::op::apply;
//!
//! let old = vec!['a', 'b', 'c'];
//! let new = vec!['a', 'c', 'd'];
//! let ops = LcsDiffer.diff(&old, &new, |c| *c, |a, b| a == b);
//!
//! let mut items = old.clone();
//! apply(&mut items, &ops);
//! assert_eq!(items, new);
//! ```

pub mod differ;
pub mod greedy;
pub mod lcs;
pub mod op;
pub mod rebuild;
