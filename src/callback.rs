//! Item identity and content comparison.
//!
//! The reconciler asks two questions about a pair of items: are they the
//! same entity (compared by identity key), and if so, did the displayed
//! content change. An [`ItemCallback`] answers both.

use std::hash::Hash;
use std::marker::PhantomData;

/// Identity and content comparison for items of type `T`.
pub trait ItemCallback<T> {
    /// The identity key. Must be unique within a snapshot.
    type Key: Eq + Hash;

    /// Extract the identity key of an item. Must be pure.
    fn key(&self, item: &T) -> Self::Key;

    /// Return true if two items with the same key look the same.
    ///
    /// Must be reflexive and symmetric.
    fn same_content(&self, old: &T, new: &T) -> bool;
}

/// An [`ItemCallback`] built from two closures.
pub struct FnCallback<K, I, E> {
    identity: I,
    content_eq: E,
    _key: PhantomData<fn() -> K>,
}

impl<K, I, E> FnCallback<K, I, E> {
    pub fn new<T>(identity: I, content_eq: E) -> FnCallback<K, I, E>
    where
        I: Fn(&T) -> K,
        E: Fn(&T, &T) -> bool,
    {
        return FnCallback {
            identity,
            content_eq,
            _key: PhantomData,
        };
    }
}

impl<T, K, I, E> ItemCallback<T> for FnCallback<K, I, E>
where
    K: Eq + Hash,
    I: Fn(&T) -> K,
    E: Fn(&T, &T) -> bool,
{
    type Key = K;

    fn key(&self, item: &T) -> K {
        return (self.identity)(item);
    }

    fn same_content(&self, old: &T, new: &T) -> bool {
        return (self.content_eq)(old, new);
    }
}

/// An [`ItemCallback`] that compares content with `PartialEq`.
///
/// Suits plain data records where "same content" is whole-value equality.
pub struct KeyedEq<K, I> {
    identity: I,
    _key: PhantomData<fn() -> K>,
}

impl<K, I> KeyedEq<K, I> {
    pub fn new<T>(identity: I) -> KeyedEq<K, I>
    where
        I: Fn(&T) -> K,
    {
        return KeyedEq {
            identity,
            _key: PhantomData,
        };
    }
}

impl<T, K, I> ItemCallback<T> for KeyedEq<K, I>
where
    T: PartialEq,
    K: Eq + Hash,
    I: Fn(&T) -> K,
{
    type Key = K;

    fn key(&self, item: &T) -> K {
        return (self.identity)(item);
    }

    fn same_content(&self, old: &T, new: &T) -> bool {
        return old == new;
    }
}
