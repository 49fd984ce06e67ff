//! Fixed-capacity circular buffer with a single rotating cursor.
//!
//! A [`Drum`] is a ring of `capacity` slots allocated once at construction.
//! There is no head or tail: the only position is the cursor, which moves one
//! slot at a time in either direction and wraps around. Slot `i` is followed
//! by `(i + 1) % capacity` and preceded by `(i + capacity - 1) % capacity`,
//! so every slot always has both neighbors.
//!
//! # Examples
//!
//! ```rust
//! use chainkit::drum::Drum;
//!
//! let mut drum = Drum::new(3)?;
//! for value in [1, 2, 3] {
//!     drum.write(value);
//!     drum.rotate_clockwise();
//! }
//!
//! // Three rotations on a ring of three land back on the first slot.
//! assert_eq!(drum.read(), &1);
//!
//! drum.rotate_counter_clockwise();
//! assert_eq!(drum.read(), &3);
//! # Ok::<(), chainkit::error::ContainerError>(())
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use crate::chain;
use crate::error::ContainerError;

const ZERO_CAPACITY: ContainerError = ContainerError::InvalidConfiguration {
    reason: "drum capacity must be greater than zero",
};

#[inline]
const fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    (index + addend) % capacity
}

#[inline]
const fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    (index + capacity - subtrahend) % capacity
}

/// A ring of fixed capacity addressed through a rotating cursor.
#[derive(Clone)]
pub struct Drum<T> {
    slots: Box<[T]>,
    cursor: usize,
}

impl<T: Default> Drum<T> {
    /// Creates a drum of `capacity` slots, each holding `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::InvalidConfiguration`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ContainerError> {
        NonZeroUsize::new(capacity)
            .map(Self::with_capacity)
            .ok_or(ZERO_CAPACITY)
    }

    /// Creates a drum of `capacity` slots, each holding `T::default()`.
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        tracing::trace!(capacity = capacity.get(), "allocating drum");
        Self {
            slots: std::iter::repeat_with(T::default)
                .take(capacity.get())
                .collect(),
            cursor: 0,
        }
    }

    /// Resets every slot to `T::default()`.
    ///
    /// Makes one full revolution, so the cursor ends on the slot it started
    /// from.
    pub fn clear(&mut self) {
        for _ in 0..self.capacity() {
            self.write(T::default());
            self.rotate_clockwise();
        }
    }
}

impl<T> Drum<T> {
    /// Returns the number of slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Moves the cursor to the next slot.
    #[inline]
    pub fn rotate_clockwise(&mut self) {
        self.cursor = wrap_add(self.cursor, 1, self.capacity());
    }

    /// Moves the cursor to the previous slot.
    #[inline]
    pub fn rotate_counter_clockwise(&mut self) {
        self.cursor = wrap_sub(self.cursor, 1, self.capacity());
    }

    /// Returns the value under the cursor.
    #[inline]
    #[must_use]
    pub fn read(&self) -> &T {
        &self.slots[self.cursor]
    }

    /// Overwrites the value under the cursor. The cursor does not move.
    #[inline]
    pub fn write(&mut self, value: T) {
        self.slots[self.cursor] = value;
    }

    /// Returns an iterator over every slot, starting at the cursor and
    /// going clockwise. The cursor itself does not move.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            position: self.cursor,
            remaining: self.capacity(),
        }
    }
}

impl<T: PartialEq> Drum<T> {
    /// Searches the ring for `value`, rotating clockwise as it goes.
    ///
    /// The slot under the cursor is compared first; after each miss the cursor
    /// advances one slot. On a match the search stops and the cursor **stays
    /// on the matching slot**. If nothing matches, the cursor has made a full
    /// revolution and is back where it started.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainkit::drum::Drum;
    ///
    /// let mut drum = Drum::try_from(vec![1, 2, 3]).unwrap();
    ///
    /// assert!(drum.contains(&2));
    /// assert_eq!(drum.read(), &2);
    ///
    /// assert!(!drum.contains(&9));
    /// assert_eq!(drum.read(), &2);
    /// ```
    pub fn contains(&mut self, value: &T) -> bool {
        for _ in 0..self.capacity() {
            if self.read() == value {
                return true;
            }
            self.rotate_clockwise();
        }
        false
    }
}

/// Builds a drum whose capacity is the number of values.
///
/// Slot `i` holds `values[i]` and the cursor starts on slot 0: the state left
/// by writing each value in turn and rotating clockwise after every write.
impl<T> TryFrom<Vec<T>> for Drum<T> {
    type Error = ContainerError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        if values.is_empty() {
            return Err(ZERO_CAPACITY);
        }
        Ok(Self {
            slots: values.into_boxed_slice(),
            cursor: 0,
        })
    }
}

/// Two drums are equal when they have the same capacity and read the same
/// values clockwise from their cursors.
impl<T: PartialEq> PartialEq for Drum<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Drum<T> {}

impl<'a, T> IntoIterator for &'a Drum<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Drum<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Drum")
            .field("capacity", &self.capacity())
            .field("cursor", &self.cursor)
            .field("slots", &self.slots)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Drum<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        chain::fmt_sequence(formatter, self)
    }
}

/// Clockwise iterator over the slots of a [`Drum`], starting at the cursor.
#[derive(Debug)]
pub struct Iter<'a, T> {
    slots: &'a [T],
    position: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slots = self.slots;
        let value = &slots[self.position];
        self.position = wrap_add(self.position, 1, slots.len());
        self.remaining -= 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            position: self.position,
            remaining: self.remaining,
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Serializes all `capacity` slots clockwise from the cursor.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Drum<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        chain::serialize_elements(serializer, self.iter())
    }
}

/// Rebuilds a drum with one slot per stored value; an empty sequence is
/// rejected.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Drum<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let elements: Vec<T> = chain::deserialize_elements(deserializer)?;
        Self::try_from(elements).map_err(D::Error::custom)
    }
}
