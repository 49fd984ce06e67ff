//! # chainkit
//!
//! Classic linear containers built on hand-managed nodes, plus a circular
//! "drum" buffer.
//!
//! ## Overview
//!
//! - **Lists**: [`SinglyLinkedList`](list::SinglyLinkedList) and
//!   [`DoublyLinkedList`](list::DoublyLinkedList), with boundary inserts,
//!   value-relative inserts, removal by position or value, and concatenation
//! - **Stack**: [`Stack`](stack::Stack), LIFO over a singly-linked chain
//! - **Queue**: [`Queue`](queue::Queue), FIFO over a singly-linked chain
//! - **Deque**: [`Deque`](deque::Deque), double-ended over a doubly-linked chain
//! - **Drum**: [`Drum`](drum::Drum), a fixed ring addressed by a rotating cursor
//! - **Persistence**: [`Persist`](persist::Persist), JSON file round trip
//!
//! Nodes live in a per-container slot arena and link to each other by index.
//! Each chain type has one pair of splice primitives (link in, unlink) and
//! every container operation is written in terms of them.
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for every container and the
//!   [`persist`] module
//! - `full`: Enable all features
//!
//! ## Thread Safety
//!
//! Containers are plain owned data: they are `Send`/`Sync` whenever `T` is,
//! and mutation needs `&mut`. Sharing one across threads for mutation
//! requires external synchronization such as a `Mutex`.
//!
//! ## Example
//!
//! ```rust
//! use chainkit::prelude::*;
//!
//! let mut queue = Queue::from([1, 2, 3]);
//! assert_eq!(queue.dequeue(), Ok(1));
//!
//! let mut stack: Stack<i32> = queue.iter().copied().collect();
//! assert_eq!(stack.pop(), Ok(3));
//!
//! let mut drum = Drum::try_from(vec!['x', 'y', 'z'])?;
//! assert!(drum.contains(&'y'));
//! assert_eq!(drum.read(), &'y');
//! # Ok::<(), ContainerError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every container and error type.
///
/// # Usage
///
/// ```rust
/// use chainkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::deque::Deque;
    pub use crate::drum::Drum;
    pub use crate::error::ContainerError;
    pub use crate::list::{DoublyLinkedList, SinglyLinkedList};
    pub use crate::queue::Queue;
    pub use crate::stack::Stack;

    #[cfg(feature = "serde")]
    pub use crate::error::PersistError;
    #[cfg(feature = "serde")]
    pub use crate::persist::Persist;
}

mod arena;
mod chain;
mod macros;
mod node;

pub mod deque;
pub mod drum;
pub mod error;
pub mod list;
pub mod queue;
pub mod stack;

#[cfg(feature = "serde")]
pub mod persist;
