//! Caller-owned item sequences, compared by instance identity.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// An item that can sit in a deck.
pub trait DeckItem {
    /// Stable key that distinguishes this item from its neighbours.
    type Id: Clone + Eq + Hash + fmt::Debug;

    fn id(&self) -> Self::Id;
}

/// Shared, immutable list of deck items.
///
/// Two sequences are equal only when they are the *same instance*. Building a
/// new sequence from identical items produces a different instance, and the
/// deck treats that as "start over".
pub struct Sequence<T>(Arc<[T]>);

impl<T> Sequence<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self(Arc::from(items))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&T> {
        self.0.get(position)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn same_instance(&self, other: &Sequence<T>) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> From<Arc<[T]>> for Sequence<T> {
    fn from(items: Arc<[T]>) -> Self {
        Self(items)
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("len", &self.len())
            .field("instance", &Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}
