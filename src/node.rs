//! Storage cells shared by every linked container.
//!
//! Nodes never point at each other directly. Links are [`NodeId`]s into the
//! [`Arena`](crate::arena::Arena) that owns the chain's nodes, so a forward
//! link is the only path that keeps a node reachable and a back link is a
//! plain observation of the predecessor.

/// Index of a node slot inside an arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// A cell of a singly-linked chain.
#[derive(Clone, Debug)]
pub(crate) struct SingleNode<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NodeId>,
}

impl<T> SingleNode<T> {
    #[inline]
    pub(crate) const fn new(value: T, next: Option<NodeId>) -> Self {
        Self { value, next }
    }
}

/// A cell of a doubly-linked chain.
#[derive(Clone, Debug)]
pub(crate) struct DoubleNode<T> {
    pub(crate) value: T,
    /// Non-owning back link.
    pub(crate) previous: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

impl<T> DoubleNode<T> {
    #[inline]
    pub(crate) const fn new(value: T, previous: Option<NodeId>, next: Option<NodeId>) -> Self {
        Self {
            value,
            previous,
            next,
        }
    }
}
