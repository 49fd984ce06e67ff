//! General-purpose linked lists.
//!
//! - [`SinglyLinkedList`]: forward links only, O(n) `remove_last`
//! - [`DoublyLinkedList`]: forward and back links, double-ended iteration
//!
//! Both lists insert relative to a value (`add_before` / `add_after`) and remove
//! by value. A value that matches nothing leaves the list unchanged and the
//! call returns `false`; it is not an error.
//!
//! # Examples
//!
//! ```rust
//! use chainkit::list::{DoublyLinkedList, SinglyLinkedList};
//!
//! let mut singly = SinglyLinkedList::from([1, 3]);
//! singly.add_after(&1, 2);
//! assert_eq!(singly.to_string(), "[1, 2, 3]");
//!
//! let mut doubly = DoublyLinkedList::from([1, 2, 3]);
//! assert!(doubly.remove(&2));
//! assert!(!doubly.remove(&2));
//! assert_eq!(doubly.to_string(), "[1, 3]");
//! ```

pub mod doubly;
pub mod singly;

pub use doubly::DoublyLinkedList;
pub use singly::SinglyLinkedList;
