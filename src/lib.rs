//! Listdiff - keyed list reconciliation for UI lists.
//!
//! Turns an old list into a new one with a minimal script of inserts,
//! removals, moves and updates, matching items by a stable identity key.
//!
//! # Quick Start
//!
//! ```
//! use listdiff::{compute_edits, Snapshot};
//!
//! let old = Snapshot::new(vec![1, 2, 3]);
//! let new = Snapshot::new(vec![2, 3, 1, 4]);
//!
//! let script = compute_edits(&old, &new, |n| *n, |a, b| a == b).unwrap();
//! let mut items = old.to_vec();
//! script.apply_to(&mut items).unwrap();
//! assert_eq!(items, vec![2, 3, 1, 4]);
//! ```

pub mod adapter;
pub mod callback;
pub mod edit;
pub mod error;
pub mod event;
pub mod lis;
mod rank_tree;
pub mod reconcile;
pub mod snapshot;

pub use adapter::{ListAdapter, ListObserver, Notification, RecordingObserver, SubscriptionId};
pub use callback::{FnCallback, ItemCallback, KeyedEq};
pub use edit::{Edit, EditCounts, EditKind, EditScript};
pub use error::{ReconcileError, Side};
pub use event::OneShot;
pub use reconcile::{compute_edits, ReconcileOptions, Reconciler};
pub use snapshot::Snapshot;
