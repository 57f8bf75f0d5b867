//! Keyed list reconciliation.
//!
//! Given an old and a new list, produce an [`EditScript`] that turns the
//! old list into the new one, matching items by identity key. The script
//! is minimal in moves: common items are ranked by their old position, a
//! longest increasing subsequence of those ranks (taken in new order) stays
//! put, and every other common item is moved exactly once.
//!
//! Edits are emitted in four phases, each against the list as left by the
//! previous phase:
//!
//! 1. Removals of old-only items, from the back so earlier positions hold.
//! 2. Moves, in new order. Each moved item is placed directly after its
//!    predecessor among the common items (or at the front).
//! 3. Insertions of new-only items, in ascending new position.
//! 4. Updates of changed common items, at their new position.
//!
//! # Move positions
//!
//! During phase 2 the list holds only common items. Every position such an
//! item can occupy is laid out ahead of time in a static slot order: for
//! each gap between two kept items, first the target slots of the items
//! that will be moved into the gap (new order), then the current slots of
//! the moved items that start in the gap (old order). A moved item's target
//! slot always directly follows its predecessor's, so the list position of
//! any slot is the number of live slots before it. A [`RankTree`] answers
//! that in O(log n), for O((n + m) log(n + m)) overall.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use tracing::{debug, error, trace, warn};

use crate::callback::{FnCallback, ItemCallback};
use crate::edit::{Edit, EditScript};
use crate::error::{ReconcileError, Side};
use crate::lis::longest_increasing;
use crate::rank_tree::RankTree;
use crate::snapshot::Snapshot;

/// Reconciler settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Emit `Move` edits for reordered items. When off, a reordered item is
    /// removed and re-inserted instead, and no `Move` is ever produced.
    pub detect_moves: bool,
    /// Emit `Update` edits for items whose content changed.
    pub emit_updates: bool,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        return ReconcileOptions {
            detect_moves: true,
            emit_updates: true,
        };
    }
}

impl ReconcileOptions {
    pub fn new() -> ReconcileOptions {
        return ReconcileOptions::default();
    }

    pub fn detect_moves(mut self, detect_moves: bool) -> ReconcileOptions {
        self.detect_moves = detect_moves;
        return self;
    }

    pub fn emit_updates(mut self, emit_updates: bool) -> ReconcileOptions {
        self.emit_updates = emit_updates;
        return self;
    }
}

/// A stateless list reconciler.
///
/// Holds only its options; every call is independent of every other.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconciler {
    options: ReconcileOptions,
}

/// Compute the edits that turn `old` into `new`.
///
/// `identity` must return a key unique within each snapshot, and
/// `content_eq` must be reflexive and symmetric.
///
/// ```
/// use listdiff::{compute_edits, Edit, Snapshot};
///
/// let old = Snapshot::new(vec![(1, "a"), (2, "b")]);
/// let new = Snapshot::new(vec![(2, "b"), (1, "A")]);
/// let script = compute_edits(&old, &new, |item| item.0, |a, b| a == b).unwrap();
///
/// let mut items = old.to_vec();
/// script.apply_to(&mut items).unwrap();
/// assert_eq!(items, new.to_vec());
/// assert_eq!(script.counts().moves, 1);
/// assert!(script.iter().any(|e| matches!(e, Edit::Update { position: 1, .. })));
/// ```
pub fn compute_edits<T, K, I, E>(
    old: &Snapshot<T>,
    new: &Snapshot<T>,
    identity: I,
    content_eq: E,
) -> Result<EditScript<T>, ReconcileError>
where
    T: Clone,
    K: Eq + std::hash::Hash,
    I: Fn(&T) -> K,
    E: Fn(&T, &T) -> bool,
{
    let callback = FnCallback::new::<T>(identity, content_eq);
    return Reconciler::default().compute(&callback, old.as_slice(), new.as_slice());
}

/// Map each key to its position, failing on the first repeated key.
fn index_keys<T, C: ItemCallback<T>>(
    callback: &C,
    items: &[T],
    side: Side,
) -> Result<FxHashMap<C::Key, usize>, ReconcileError> {
    let mut index = FxHashMap::with_capacity_and_hasher(items.len(), Default::default());
    for (position, item) in items.iter().enumerate() {
        match index.entry(callback.key(item)) {
            Entry::Occupied(entry) => {
                let first = *entry.get();
                warn!(%side, first, second = position, "duplicate identity key");
                return Err(ReconcileError::DuplicateIdentity {
                    side,
                    first,
                    second: position,
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(position);
            }
        }
    }
    return Ok(index);
}

/// Matching between the two lists, by position.
struct Matching {
    /// For each new position, the old position of the same item.
    new_to_old: Vec<Option<usize>>,
    /// For each old position, whether the item survives into the new list.
    old_in_new: Vec<bool>,
    /// New positions of the common items, in new order.
    common: Vec<usize>,
    /// For each entry of `common`, the item's rank among common items in
    /// old order.
    ranks: Vec<usize>,
}

impl Matching {
    fn build<T, C: ItemCallback<T>>(
        callback: &C,
        old: &[T],
        new: &[T],
    ) -> Result<Matching, ReconcileError> {
        let old_index = index_keys(callback, old, Side::Old)?;
        let new_index = index_keys(callback, new, Side::New)?;

        let mut new_to_old = vec![None; new.len()];
        let mut old_in_new = vec![false; old.len()];
        for (key, &j) in &new_index {
            if let Some(&i) = old_index.get(key) {
                new_to_old[j] = Some(i);
                old_in_new[i] = true;
            }
        }

        // Rank of each surviving old item among the survivors.
        let mut old_rank = vec![usize::MAX; old.len()];
        let mut next_rank = 0;
        for i in 0..old.len() {
            if old_in_new[i] {
                old_rank[i] = next_rank;
                next_rank += 1;
            }
        }

        let mut common = Vec::with_capacity(next_rank);
        let mut ranks = Vec::with_capacity(next_rank);
        for (j, old_pos) in new_to_old.iter().enumerate() {
            if let Some(i) = *old_pos {
                common.push(j);
                ranks.push(old_rank[i]);
            }
        }

        return Ok(Matching {
            new_to_old,
            old_in_new,
            common,
            ranks,
        });
    }
}

impl Reconciler {
    pub fn new(options: ReconcileOptions) -> Reconciler {
        return Reconciler { options };
    }

    pub fn options(&self) -> ReconcileOptions {
        return self.options;
    }

    /// Compute the edits that turn `old` into `new`, comparing items with
    /// `callback`.
    pub fn compute<T, C>(
        &self,
        callback: &C,
        old: &[T],
        new: &[T],
    ) -> Result<EditScript<T>, ReconcileError>
    where
        T: Clone,
        C: ItemCallback<T>,
    {
        let matching = Matching::build(callback, old, new)?;
        let kept = longest_increasing(&matching.ranks);

        // An old item stays if it survives and is either kept in place or
        // allowed to move. Everything else is removed; new items that no
        // old item stays for are inserted.
        let mut stays = matching.old_in_new.clone();
        let mut reinsert = vec![false; new.len()];
        if !self.options.detect_moves {
            for (c, &j) in matching.common.iter().enumerate() {
                if !kept[c] {
                    reinsert[j] = true;
                    if let Some(i) = matching.new_to_old[j] {
                        stays[i] = false;
                    }
                }
            }
        }

        let mut script = EditScript::with_capacity(old.len().max(new.len()));

        for i in (0..old.len()).rev() {
            if !stays[i] {
                script.push(Edit::Remove { position: i });
            }
        }

        if self.options.detect_moves {
            emit_moves(&mut script, &kept, &matching.ranks);
        }

        for (j, item) in new.iter().enumerate() {
            if matching.new_to_old[j].is_none() || reinsert[j] {
                script.push(Edit::Insert {
                    position: j,
                    item: item.clone(),
                });
            }
        }

        if self.options.emit_updates {
            for &j in &matching.common {
                if reinsert[j] {
                    continue;
                }
                if let Some(i) = matching.new_to_old[j] {
                    if !callback.same_content(&old[i], &new[j]) {
                        script.push(Edit::Update {
                            position: j,
                            item: new[j].clone(),
                        });
                    }
                }
            }
        }

        let final_len = script.check_ranges(old.len()).inspect_err(|err| {
            error!(%err, old = old.len(), new = new.len(), "edit script out of range");
        })?;
        debug_assert_eq!(final_len, new.len(), "edit script ends at the wrong length");
        if final_len != new.len() {
            error!(final_len, new = new.len(), "edit script ends at the wrong length");
            return Err(ReconcileError::InvalidRange {
                edit_index: script.len(),
                position: final_len,
                len: new.len(),
            });
        }

        let counts = script.counts();
        debug!(
            old = old.len(),
            new = new.len(),
            inserts = counts.inserts,
            removes = counts.removes,
            moves = counts.moves,
            updates = counts.updates,
            "reconciled",
        );
        return Ok(script);
    }
}

/// Emit one `Move` per common item outside the kept subsequence.
///
/// `ranks[c]` is the old rank of the c-th common item in new order, and
/// `kept[c]` marks the subsequence that stays in place.
fn emit_moves<T>(script: &mut EditScript<T>, kept: &[bool], ranks: &[usize]) {
    let len = ranks.len();
    let kept_count = kept.iter().filter(|&&k| k).count();
    if kept_count == len {
        return;
    }

    // Common items in old order, as indices into `ranks`.
    let mut by_rank = vec![0; len];
    for (c, &rank) in ranks.iter().enumerate() {
        by_rank[rank] = c;
    }

    let moved = len - kept_count;
    let mut old_slot = vec![0; len];
    let mut new_slot = vec![0; len];
    let mut live = Vec::with_capacity(kept_count + 2 * moved);

    // Walk both orders gap by gap. Kept items appear in the same relative
    // order in both walks, so they line the gaps up.
    let mut a = 0; // new order
    let mut b = 0; // old order
    loop {
        while a < len && !kept[a] {
            new_slot[a] = live.len();
            live.push(false);
            a += 1;
        }
        while b < len && !kept[by_rank[b]] {
            old_slot[by_rank[b]] = live.len();
            live.push(true);
            b += 1;
        }
        if a == len {
            break;
        }
        debug_assert_eq!(a, by_rank[b]);
        live.push(true);
        a += 1;
        b += 1;
    }

    let mut tree = RankTree::from_live(live);
    for c in 0..len {
        if kept[c] {
            continue;
        }
        let from = tree.rank(old_slot[c]);
        tree.clear(old_slot[c]);
        let to = tree.rank(new_slot[c]);
        tree.fill(new_slot[c]);
        trace!(from, to, "move");
        script.push(Edit::Move { from, to });
    }
}
