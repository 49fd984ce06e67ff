//! Singly-linked list.

use std::fmt;

use crate::chain::{self, single::SingleChain};
use crate::error::ContainerError;

pub use crate::chain::single::{IntoIter, Iter};

/// A singly-linked list with head and tail links.
///
/// # Time Complexity
///
/// | Operation                    | Complexity |
/// |------------------------------|------------|
/// | `add_first` / `add_last`     | O(1)       |
/// | `remove_first`               | O(1)       |
/// | `remove_last`                | O(n)       |
/// | `add_before` / `add_after`   | O(n)       |
/// | `remove`                     | O(n)       |
/// | `first` / `last` / `len`     | O(1)       |
///
/// # Examples
///
/// ```rust
/// use chainkit::list::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::from([1, 2, 4]);
/// list.add_before(&4, 3);
/// list.add_first(0);
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
/// assert_eq!(list.remove_last(), Ok(4));
/// ```
#[derive(Clone)]
pub struct SinglyLinkedList<T> {
    chain: SingleChain<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chain: SingleChain::new(),
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
            .ok_or(ContainerError::empty("SinglyLinkedList::remove_first"))
    }

    /// Removes and returns the last element.
    ///
    /// This walks the whole list to find the new tail.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the list is empty.
    pub fn remove_last(&mut self) -> Result<T, ContainerError> {
        self.chain
            .pop_back()
            .ok_or(ContainerError::empty("SinglyLinkedList::remove_last"))
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the list is empty.
    pub fn first(&self) -> Result<&T, ContainerError> {
        self.chain
            .head_value()
            .ok_or(ContainerError::empty("SinglyLinkedList::first"))
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the list is empty.
    pub fn last(&self) -> Result<&T, ContainerError> {
        self.chain
            .tail_value()
            .ok_or(ContainerError::empty("SinglyLinkedList::last"))
    }

    /// Drops every element. Calling it on an empty list does nothing.
    #[inline]
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Returns an iterator from the first element to the last.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Inserts `value` directly before the first element equal to `existing`.
    ///
    /// Returns `false` and leaves the list untouched when no element matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainkit::list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([2, 3]);
    /// assert!(list.add_before(&2, 1));
    /// assert!(!list.add_before(&9, 0));
    /// assert_eq!(list.to_string(), "[1, 2, 3]");
    /// ```
    pub fn add_before(&mut self, existing: &T, value: T) -> bool {
        match self.chain.position(|candidate| candidate == existing) {
            Some((previous, _)) => {
                self.chain.link_after(previous, value);
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
            Some((_, id)) => {
                self.chain.link_after(Some(id), value);
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
            Some((previous, _)) => self.chain.unlink_after(previous).is_some(),
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

impl<T: Clone> SinglyLinkedList<T> {
    /// Builds a new list holding clones of `first`'s elements followed by
    /// `second`'s. Neither input changes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainkit::list::SinglyLinkedList;
    ///
    /// let first = SinglyLinkedList::from([1, 2, 3]);
    /// let second = SinglyLinkedList::from([4, 5, 6]);
    /// let joined = SinglyLinkedList::concat(&first, &second);
    ///
    /// assert_eq!(joined.to_string(), "[1, 2, 3, 4, 5, 6]");
    /// assert_eq!(first.len(), 3);
    /// ```
    #[must_use]
    pub fn concat(first: &Self, second: &Self) -> Self {
        chain::concat(first, second)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SinglyLinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SinglyLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for SinglyLinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.chain)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        chain::fmt_sequence(formatter, self)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SinglyLinkedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        chain::serialize_elements(serializer, self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SinglyLinkedList<T>
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
