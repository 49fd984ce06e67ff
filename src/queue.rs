//! FIFO queue over a singly-linked chain.

use std::fmt;

use crate::chain::{self, single::SingleChain};
use crate::error::ContainerError;

pub use crate::chain::single::{IntoIter, Iter};

/// A first-in, first-out queue.
///
/// Elements enter at the tail and leave from the head, both in O(1).
///
/// # Examples
///
/// ```rust
/// use chainkit::queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// queue.enqueue(3);
///
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.peek(), Ok(&2));
/// assert_eq!(queue.to_string(), "[2, 3]");
/// ```
#[derive(Clone)]
pub struct Queue<T> {
    chain: SingleChain<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
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

    /// Returns `true` if the queue holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Adds `value` at the tail.
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.chain.push_back(value);
    }

    /// Removes and returns the element at the head.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        self.chain
            .pop_front()
            .ok_or(ContainerError::empty("Queue::dequeue"))
    }

    /// Returns a reference to the element at the head.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.chain
            .head_value()
            .ok_or(ContainerError::empty("Queue::peek"))
    }

    /// Drops every element.
    #[inline]
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Returns an iterator from the head (next to leave) to the tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T: Clone> Queue<T> {
    /// Builds a new queue holding clones of `first`'s elements followed by
    /// `second`'s. Neither input changes.
    #[must_use]
    pub fn concat(first: &Self, second: &Self) -> Self {
        chain::concat(first, second)
    }
}

impl<T> Default for Queue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.chain)
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        chain::fmt_sequence(formatter, self)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Queue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        chain::serialize_elements(serializer, self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Queue<T>
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_dequeue_last_element_resets_tail() {
        let mut queue = Queue::from([1]);
        assert_eq!(queue.dequeue(), Ok(1));
        queue.chain.assert_links();

        queue.enqueue(2);
        assert_eq!(queue.peek(), Ok(&2));
        queue.chain.assert_links();
    }

    #[rstest]
    fn test_interleaved_enqueue_dequeue() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Ok(1));
        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert!(queue.dequeue().is_err());
        queue.chain.assert_links();
    }

    #[rstest]
    fn test_peek_on_empty() {
        let queue: Queue<u8> = Queue::new();
        assert_eq!(queue.peek(), Err(ContainerError::empty("Queue::peek")));
    }
}
