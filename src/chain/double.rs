//! Doubly-linked chain with head and tail links.
//!
//! [`DoubleChain::link_between`] and [`DoubleChain::unlink`] are the only
//! places that write a link. Every boundary insert, relative insert and
//! removal is expressed through them, so head/tail repair lives in one spot.

use std::iter::FusedIterator;

use crate::arena::Arena;
use crate::node::{DoubleNode, NodeId};

#[derive(Clone, Debug)]
pub(crate) struct DoubleChain<T> {
    nodes: Arena<DoubleNode<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> DoubleChain<T> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) fn head_value(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes[id].value)
    }

    #[inline]
    pub(crate) fn tail_value(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes[id].value)
    }

    #[inline]
    pub(crate) fn push_front(&mut self, value: T) -> NodeId {
        self.link_between(None, self.head, value)
    }

    #[inline]
    pub(crate) fn push_back(&mut self, value: T) -> NodeId {
        self.link_between(self.tail, None, value)
    }

    pub(crate) fn insert_before(&mut self, existing: NodeId, value: T) -> NodeId {
        let previous = self.nodes[existing].previous;
        self.link_between(previous, Some(existing), value)
    }

    pub(crate) fn insert_after(&mut self, existing: NodeId, value: T) -> NodeId {
        let next = self.nodes[existing].next;
        self.link_between(Some(existing), next, value)
    }

    #[inline]
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        self.unlink(self.head?)
    }

    #[inline]
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        self.unlink(self.tail?)
    }

    /// Links a new node between two adjacent positions.
    ///
    /// `None` on the left means the new node becomes the head, `None` on the
    /// right means it becomes the tail.
    fn link_between(&mut self, previous: Option<NodeId>, next: Option<NodeId>, value: T) -> NodeId {
        debug_assert_eq!(previous.map_or(self.head, |id| self.nodes[id].next), next);
        debug_assert_eq!(next.map_or(self.tail, |id| self.nodes[id].previous), previous);

        let id = self.nodes.insert(DoubleNode::new(value, previous, next));
        match previous {
            Some(previous) => self.nodes[previous].next = Some(id),
            None => self.head = Some(id),
        }
        match next {
            Some(next) => self.nodes[next].previous = Some(id),
            None => self.tail = Some(id),
        }
        self.len += 1;
        id
    }

    /// Splices `id` out, joining its neighbors to each other.
    pub(crate) fn unlink(&mut self, id: NodeId) -> Option<T> {
        let node = self.nodes.remove(id)?;
        match node.previous {
            Some(previous) => self.nodes[previous].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].previous = node.previous,
            None => self.tail = node.previous,
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Finds the first node, from the head, whose value satisfies `predicate`.
    pub(crate) fn position<P>(&self, mut predicate: P) -> Option<NodeId>
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self.head;
        while let Some(id) = current {
            let node = &self.nodes[id];
            if predicate(&node.value) {
                return Some(id);
            }
            current = node.next;
        }
        None
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    #[inline]
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_links(&self) {
        assert_eq!(self.nodes.occupied(), self.len);
        if self.len == 0 {
            assert_eq!(self.head, None);
            assert_eq!(self.tail, None);
            return;
        }
        if self.len == 1 {
            assert_eq!(self.head, self.tail);
        }
        let head = self.head.unwrap();
        let tail = self.tail.unwrap();
        assert_eq!(self.nodes[head].previous, None);
        assert_eq!(self.nodes[tail].next, None);

        let mut reachable = 0;
        let mut previous = None;
        let mut current = self.head;
        while let Some(id) = current {
            assert_eq!(self.nodes[id].previous, previous);
            reachable += 1;
            previous = current;
            current = self.nodes[id].next;
        }
        assert_eq!(reachable, self.len);
        assert_eq!(previous, self.tail);
    }
}

impl<T> Default for DoubleChain<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over a doubly-linked container.
///
/// Walks head to tail, or tail to head through the back links when used
/// with [`Iterator::rev`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a Arena<DoubleNode<T>>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.back?];
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator over a doubly-linked container.
#[derive(Debug)]
pub struct IntoIter<T> {
    chain: DoubleChain<T>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(crate) const fn new(chain: DoubleChain<T>) -> Self {
        Self { chain }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chain.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.len(), Some(self.chain.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chain.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
