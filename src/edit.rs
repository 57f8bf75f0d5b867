//! Edit scripts.
//!
//! An edit script is an ordered list of structural edits that turns the
//! old list into the new one when applied front to back. Every position
//! refers to the list as it is at the moment the edit is applied, not to
//! either snapshot.

use crate::error::ReconcileError;

/// A single structural edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    /// Insert `item` so that it ends up at `position`.
    Insert { position: usize, item: T },
    /// Remove the item at `position`.
    Remove { position: usize },
    /// Remove the item at `from`, then insert it at `to`.
    ///
    /// `to` indexes the list after the removal.
    Move { from: usize, to: usize },
    /// Replace the item at `position` with a newer version of itself.
    Update { position: usize, item: T },
}

/// Which kind of edit, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    Insert,
    Remove,
    Move,
    Update,
}

impl<T> Edit<T> {
    pub fn kind(&self) -> EditKind {
        return match self {
            Edit::Insert { .. } => EditKind::Insert,
            Edit::Remove { .. } => EditKind::Remove,
            Edit::Move { .. } => EditKind::Move,
            Edit::Update { .. } => EditKind::Update,
        };
    }

    /// Transform the item payload, keeping positions.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Edit<U> {
        return match self {
            Edit::Insert { position, item } => Edit::Insert { position, item: f(item) },
            Edit::Remove { position } => Edit::Remove { position },
            Edit::Move { from, to } => Edit::Move { from, to },
            Edit::Update { position, item } => Edit::Update { position, item: f(item) },
        };
    }

    /// Return the list length after this edit, or the offending position
    /// if the edit does not fit a list of length `len`.
    fn fits(&self, len: usize) -> Result<usize, usize> {
        return match *self {
            Edit::Insert { position, .. } if position <= len => Ok(len + 1),
            Edit::Insert { position, .. } => Err(position),
            Edit::Remove { position } if position < len => Ok(len - 1),
            Edit::Remove { position } => Err(position),
            Edit::Move { from, .. } if from >= len => Err(from),
            Edit::Move { to, .. } if to >= len => Err(to),
            Edit::Move { .. } => Ok(len),
            Edit::Update { position, .. } if position < len => Ok(len),
            Edit::Update { position, .. } => Err(position),
        };
    }
}

/// Per-kind edit counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditCounts {
    pub inserts: usize,
    pub removes: usize,
    pub moves: usize,
    pub updates: usize,
}

/// An ordered sequence of edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript<T> {
    edits: Vec<Edit<T>>,
}

impl<T> Default for EditScript<T> {
    fn default() -> Self {
        return EditScript::new();
    }
}

impl<T> EditScript<T> {
    pub fn new() -> EditScript<T> {
        return EditScript { edits: Vec::new() };
    }

    pub(crate) fn with_capacity(capacity: usize) -> EditScript<T> {
        return EditScript {
            edits: Vec::with_capacity(capacity),
        };
    }

    pub(crate) fn push(&mut self, edit: Edit<T>) {
        self.edits.push(edit);
    }

    pub fn len(&self) -> usize {
        return self.edits.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.edits.is_empty();
    }

    pub fn edits(&self) -> &[Edit<T>] {
        return &self.edits;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edit<T>> {
        return self.edits.iter();
    }

    pub fn into_edits(self) -> Vec<Edit<T>> {
        return self.edits;
    }

    pub fn counts(&self) -> EditCounts {
        let mut counts = EditCounts::default();
        for edit in &self.edits {
            match edit.kind() {
                EditKind::Insert => counts.inserts += 1,
                EditKind::Remove => counts.removes += 1,
                EditKind::Move => counts.moves += 1,
                EditKind::Update => counts.updates += 1,
            }
        }
        return counts;
    }

    /// Walk the script against a list of length `len`, checking that every
    /// position is in bounds at the moment it is used.
    ///
    /// Returns the final length.
    pub fn check_ranges(&self, len: usize) -> Result<usize, ReconcileError> {
        let mut len = len;
        for (edit_index, edit) in self.edits.iter().enumerate() {
            len = edit.fits(len).map_err(|position| ReconcileError::InvalidRange {
                edit_index,
                position,
                len,
            })?;
        }
        return Ok(len);
    }
}

impl<T: Clone> EditScript<T> {
    /// Apply the script to `items` in place.
    ///
    /// The range check runs first, so on error `items` is left untouched.
    pub fn apply_to(&self, items: &mut Vec<T>) -> Result<(), ReconcileError> {
        self.check_ranges(items.len())?;
        for edit in &self.edits {
            match edit {
                Edit::Insert { position, item } => items.insert(*position, item.clone()),
                Edit::Remove { position } => {
                    items.remove(*position);
                }
                Edit::Move { from, to } => {
                    let item = items.remove(*from);
                    items.insert(*to, item);
                }
                Edit::Update { position, item } => items[*position] = item.clone(),
            }
        }
        return Ok(());
    }
}

impl<T> IntoIterator for EditScript<T> {
    type Item = Edit<T>;
    type IntoIter = std::vec::IntoIter<Edit<T>>;

    fn into_iter(self) -> Self::IntoIter {
        return self.edits.into_iter();
    }
}

impl<'a, T> IntoIterator for &'a EditScript<T> {
    type Item = &'a Edit<T>;
    type IntoIter = std::slice::Iter<'a, Edit<T>>;

    fn into_iter(self) -> Self::IntoIter {
        return self.edits.iter();
    }
}

impl<T> From<Vec<Edit<T>>> for EditScript<T> {
    fn from(edits: Vec<Edit<T>>) -> Self {
        return EditScript { edits };
    }
}
