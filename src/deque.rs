//! Double-ended queue over a doubly-linked chain.
//!
//! # Examples
//!
//! ```rust
//! use chainkit::deque::Deque;
//!
//! let mut deque = Deque::new();
//! deque.push_first(1);
//! deque.push_last(2);
//!
//! assert_eq!(deque.pop_first(), Ok(1));
//! assert_eq!(deque.pop_last(), Ok(2));
//! assert!(deque.is_empty());
//! ```

use std::fmt;

use crate::chain::{self, double::DoubleChain};
use crate::error::ContainerError;

pub use crate::chain::double::{IntoIter, Iter};

/// A double-ended queue with O(1) access at both ends.
#[derive(Clone)]
pub struct Deque<T> {
    chain: DoubleChain<T>,
}

impl<T> Deque<T> {
    /// Creates an empty deque.
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

    /// Returns `true` if the deque holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Adds `value` at the front.
    #[inline]
    pub fn push_first(&mut self, value: T) {
        self.chain.push_front(value);
    }

    /// Adds `value` at the back.
    #[inline]
    pub fn push_last(&mut self, value: T) {
        self.chain.push_back(value);
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the deque is empty.
    pub fn pop_first(&mut self) -> Result<T, ContainerError> {
        self.chain
            .pop_front()
            .ok_or(ContainerError::empty("Deque::pop_first"))
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the deque is empty.
    pub fn pop_last(&mut self) -> Result<T, ContainerError> {
        self.chain
            .pop_back()
            .ok_or(ContainerError::empty("Deque::pop_last"))
    }

    /// Returns a reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the deque is empty.
    pub fn peek_first(&self) -> Result<&T, ContainerError> {
        self.chain
            .head_value()
            .ok_or(ContainerError::empty("Deque::peek_first"))
    }

    /// Returns a reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the deque is empty.
    pub fn peek_last(&self) -> Result<&T, ContainerError> {
        self.chain
            .tail_value()
            .ok_or(ContainerError::empty("Deque::peek_last"))
    }

    /// Drops every element.
    #[inline]
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Returns a double-ended iterator from front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T> Default for Deque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_last(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.chain)
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        chain::fmt_sequence(formatter, self)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Deque<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        chain::serialize_elements(serializer, self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Deque<T>
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
