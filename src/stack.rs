//! LIFO stack over a singly-linked chain.
//!
//! Only the top of the chain is touched: `push` links a new head, `pop`
//! unlinks it. Iteration runs from the top down.
//!
//! # Examples
//!
//! ```rust
//! use chainkit::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! stack.push(3);
//!
//! assert_eq!(stack.pop(), Ok(3));
//! assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
//! ```

use std::fmt;

use crate::chain::{self, single::SingleChain};
use crate::error::ContainerError;

pub use crate::chain::single::{IntoIter, Iter};

/// A last-in, first-out stack.
///
/// The top is the head of the backing [`SingleChain`]. The chain also keeps a
/// tail link for the queue and list that share it; the stack never reads it.
#[derive(Clone)]
pub struct Stack<T> {
    chain: SingleChain<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
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

    /// Returns `true` if the stack holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Places `value` on top.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.chain.push_front(value);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.chain
            .pop_front()
            .ok_or(ContainerError::empty("Stack::pop"))
    }

    /// Returns a reference to the top element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.chain
            .head_value()
            .ok_or(ContainerError::empty("Stack::peek"))
    }

    /// Drops every element.
    #[inline]
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Returns an iterator from the top of the stack to the bottom.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes each element in order, so the last one ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.chain)
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        chain::fmt_sequence(formatter, self)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Serializes from the top down.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Stack<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        chain::serialize_elements(serializer, self.iter())
    }
}

/// Expects the top-down order written by `Serialize` and pushes it back
/// bottom first, so the restored stack iterates exactly as the stored one.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Stack<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements: Vec<T> = chain::deserialize_elements(deserializer)?;
        Ok(elements.into_iter().rev().collect())
    }
}
