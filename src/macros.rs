//! Literal constructors for the linear containers.
//!
//! Each macro replays the same insertion as the container's `FromIterator`
//! impl: `add_last` for lists, `enqueue` for queues, `push_last` for deques
//! and `push` for stacks.

/// Creates a [`SinglyLinkedList`](crate::list::SinglyLinkedList) containing
/// the arguments.
///
/// # Examples
///
/// ```rust
/// use chainkit::singly;
///
/// let list = singly![1, 2, 3];
/// assert_eq!(list.to_string(), "[1, 2, 3]");
///
/// let empty: chainkit::list::SinglyLinkedList<i32> = singly![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! singly {
    () => {
        $crate::list::SinglyLinkedList::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::list::SinglyLinkedList::from([$($value),+])
    };
}

/// Creates a [`DoublyLinkedList`](crate::list::DoublyLinkedList) containing
/// the arguments.
///
/// ```rust
/// use chainkit::doubly;
///
/// let list = doubly!['a', 'b'];
/// assert_eq!(list.iter().rev().collect::<String>(), "ba");
/// ```
#[macro_export]
macro_rules! doubly {
    () => {
        $crate::list::DoublyLinkedList::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::list::DoublyLinkedList::from([$($value),+])
    };
}

/// Creates a [`Stack`](crate::stack::Stack) by pushing the arguments in
/// order; the last argument ends up on top.
///
/// ```rust
/// use chainkit::stack;
///
/// let stack = stack![1, 2, 3];
/// assert_eq!(stack.peek(), Ok(&3));
/// ```
#[macro_export]
macro_rules! stack {
    () => {
        $crate::stack::Stack::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::stack::Stack::from([$($value),+])
    };
}

/// Creates a [`Queue`](crate::queue::Queue) by enqueueing the arguments in
/// order.
///
/// ```rust
/// use chainkit::queue;
///
/// let queue = queue![1, 2, 3];
/// assert_eq!(queue.peek(), Ok(&1));
/// ```
#[macro_export]
macro_rules! queue {
    () => {
        $crate::queue::Queue::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::queue::Queue::from([$($value),+])
    };
}

/// Creates a [`Deque`](crate::deque::Deque) by pushing the arguments at the
/// back in order.
///
/// ```rust
/// use chainkit::deque;
///
/// let deque = deque![1, 2, 3];
/// assert_eq!(deque.peek_last(), Ok(&3));
/// ```
#[macro_export]
macro_rules! deque {
    () => {
        $crate::deque::Deque::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::deque::Deque::from([$($value),+])
    };
}
