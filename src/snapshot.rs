//! Immutable list snapshots.
//!
//! A snapshot is the state of a list at one point in time. Snapshots are
//! never mutated; a changed list is always a new snapshot. Cloning is O(1)
//! since the items live behind an `Arc`.

use std::ops::Index;
use std::sync::Arc;

/// An immutable, ordered sequence of items.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Snapshot<T> {
    items: Arc<[T]>,
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        return Snapshot {
            items: Arc::clone(&self.items),
        };
    }
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        return Snapshot::empty();
    }
}

impl<T> Snapshot<T> {
    /// Create a snapshot with no items.
    pub fn empty() -> Snapshot<T> {
        return Snapshot {
            items: Arc::from(Vec::new()),
        };
    }

    /// Create a snapshot from owned items.
    pub fn new(items: Vec<T>) -> Snapshot<T> {
        return Snapshot {
            items: Arc::from(items),
        };
    }

    pub fn len(&self) -> usize {
        return self.items.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.items.is_empty();
    }

    pub fn get(&self, position: usize) -> Option<&T> {
        return self.items.get(position);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        return self.items.iter();
    }

    pub fn as_slice(&self) -> &[T] {
        return &self.items;
    }

    /// Return true if both snapshots share the same allocation.
    ///
    /// Sharing implies equality, so callers can skip diffing entirely.
    pub fn ptr_eq(&self, other: &Snapshot<T>) -> bool {
        return Arc::ptr_eq(&self.items, &other.items);
    }
}

impl<T: Clone> Snapshot<T> {
    /// Copy the items out into a vector the caller may edit.
    pub fn to_vec(&self) -> Vec<T> {
        return self.items.to_vec();
    }
}

impl<T> From<Vec<T>> for Snapshot<T> {
    fn from(items: Vec<T>) -> Self {
        return Snapshot::new(items);
    }
}

impl<T: Clone> From<&[T]> for Snapshot<T> {
    fn from(items: &[T]) -> Self {
        return Snapshot {
            items: Arc::from(items),
        };
    }
}

impl<T> FromIterator<T> for Snapshot<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        return Snapshot::new(iter.into_iter().collect());
    }
}

impl<T> Index<usize> for Snapshot<T> {
    type Output = T;

    fn index(&self, position: usize) -> &T {
        return &self.items[position];
    }
}

impl<'a, T> IntoIterator for &'a Snapshot<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.items.iter();
    }
}
