//! Doubly-linked list.

use std::fmt;

use crate::chain::{self, double::DoubleChain};
use crate::error::ContainerError;

pub use crate::chain::double::{IntoIter, Iter};

/// A doubly-linked list with head and tail links.
///
/// Unlike [`SinglyLinkedList`](super::SinglyLinkedList), removing the last
/// element is O(1) and iteration runs in both directions.
///
/// # Examples
///
/// ```rust
/// use chainkit::list::DoublyLinkedList;
///
/// let mut list: DoublyLinkedList<char> = "bd".chars().collect();
/// list.add_after(&'b', 'c');
/// list.add_first('a');
///
/// assert_eq!(list.iter().collect::<String>(), "abcd");
/// assert_eq!(list.iter().rev().collect::<String>(), "dcba");
/// ```
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    chain: DoubleChain<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chain: DoubleChain::new(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Prepends `value`.
    #[inline]
    pub fn add_first(&mut self, value: T) {
        self.chain.push_front(value);
    }

    /// Appends `value`.
    #[inline]
    pub fn add_last(&mut self, value: T) {
        self.chain.push_back(value);
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the list is empty.
    pub fn remove_first(&mut self) -> Result<T, ContainerError> {
        self.chain
            .pop_front()
            .ok_or(ContainerError::empty("DoublyLinkedList::remove_first"))
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the list is empty.
    pub fn remove_last(&mut self) -> Result<T, ContainerError> {
        self.chain
            .pop_back()
            .ok_or(ContainerError::empty("DoublyLinkedList::remove_last"))
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the list is empty.
    pub fn first(&self) -> Result<&T, ContainerError> {
        self.chain
            .head_value()
            .ok_or(ContainerError::empty("DoublyLinkedList::first"))
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the list is empty.
    pub fn last(&self) -> Result<&T, ContainerError> {
        self.chain
            .tail_value()
            .ok_or(ContainerError::empty("DoublyLinkedList::last"))
    }

    /// Drops every element.
    #[inline]
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Returns a double-ended iterator over the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Inserts `value` directly before the first element equal to `existing`.
    ///
    /// Returns `false` and leaves the list untouched when no element matches.
    pub fn add_before(&mut self, existing: &T, value: T) -> bool {
        match self.chain.position(|candidate| candidate == existing) {
            Some(id) => {
                self.chain.insert_before(id, value);
                true
            }
            None => {
                tracing::trace!(len = self.len(), "add_before: no matching element");
                false
            }
        }
    }

    /// Inserts `value` directly after the first element equal to `existing`.
    ///
    /// Returns `false` and leaves the list untouched when no element matches.
    pub fn add_after(&mut self, existing: &T, value: T) -> bool {
        match self.chain.position(|candidate| candidate == existing) {
            Some(id) => {
                self.chain.insert_after(id, value);
                true
            }
            None => {
                tracing::trace!(len = self.len(), "add_after: no matching element");
                false
            }
        }
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false` and leaves the list untouched when no element matches.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.chain.position(|candidate| candidate == value) {
            Some(id) => self.chain.unlink(id).is_some(),
            None => {
                tracing::trace!(len = self.len(), "remove: no matching element");
                false
            }
        }
    }

    /// Returns `true` if some element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|candidate| candidate == value)
    }
}

impl<T: Clone> DoublyLinkedList<T> {
    /// Builds a new list holding clones of `first`'s elements followed by
    /// `second`'s. Neither input changes.
    #[must_use]
    pub fn concat(first: &Self, second: &Self) -> Self {
        chain::concat(first, second)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for DoublyLinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for DoublyLinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.chain)
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        chain::fmt_sequence(formatter, self)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for DoublyLinkedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        chain::serialize_elements(serializer, self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for DoublyLinkedList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements: Vec<T> = chain::deserialize_elements(deserializer)?;
        Ok(Self::from(elements))
    }
}
