//! Singly-linked chain with head and tail links.
//!
//! All link mutation goes through [`SingleChain::link_after`] and
//! [`SingleChain::unlink_after`]. Both address a position by the node that
//! precedes it, with `None` standing for the head slot, which is the only
//! handle a singly-linked predecessor has on its successor.

use std::iter::FusedIterator;

use crate::arena::Arena;
use crate::node::{NodeId, SingleNode};

#[derive(Clone, Debug)]
pub(crate) struct SingleChain<T> {
    nodes: Arena<SingleNode<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> SingleChain<T> {
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
        self.link_after(None, value)
    }

    #[inline]
    pub(crate) fn push_back(&mut self, value: T) -> NodeId {
        self.link_after(self.tail, value)
    }

    #[inline]
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        self.unlink_after(None)
    }

    /// O(n): the tail's predecessor has to be found by walking from the head.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        let previous = self.predecessor(tail);
        self.unlink_after(previous)
    }

    /// Links a new node directly after `previous`, or at the head when
    /// `previous` is `None`.
    pub(crate) fn link_after(&mut self, previous: Option<NodeId>, value: T) -> NodeId {
        let next = match previous {
            Some(previous) => self.nodes[previous].next,
            None => self.head,
        };
        let id = self.nodes.insert(SingleNode::new(value, next));
        match previous {
            Some(previous) => self.nodes[previous].next = Some(id),
            None => self.head = Some(id),
        }
        if next.is_none() {
            self.tail = Some(id);
        }
        self.len += 1;
        id
    }

    /// Unlinks the node directly after `previous`, or the head when
    /// `previous` is `None`.
    pub(crate) fn unlink_after(&mut self, previous: Option<NodeId>) -> Option<T> {
        let target = match previous {
            Some(previous) => self.nodes[previous].next?,
            None => self.head?,
        };
        let node = self.nodes.remove(target)?;
        match previous {
            Some(previous) => self.nodes[previous].next = node.next,
            None => self.head = node.next,
        }
        if node.next.is_none() {
            self.tail = previous;
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Finds the first node whose value satisfies `predicate`.
    ///
    /// Returns the node together with its predecessor so the caller can
    /// splice on either side of it.
    pub(crate) fn position<P>(&self, mut predicate: P) -> Option<(Option<NodeId>, NodeId)>
    where
        P: FnMut(&T) -> bool,
    {
        let mut previous = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = &self.nodes[id];
            if predicate(&node.value) {
                return Some((previous, id));
            }
            previous = current;
            current = node.next;
        }
        None
    }

    fn predecessor(&self, target: NodeId) -> Option<NodeId> {
        let mut previous = None;
        let mut current = self.head;
        while let Some(id) = current {
            if id == target {
                return previous;
            }
            previous = current;
            current = self.nodes[id].next;
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
            current: self.head,
            remaining: self.len,
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_links(&self) {
        assert_eq!(self.nodes.occupied(), self.len);
        match self.len {
            0 => {
                assert_eq!(self.head, None);
                assert_eq!(self.tail, None);
            }
            1 => assert_eq!(self.head, self.tail),
            _ => assert_ne!(self.head, self.tail),
        }
        let mut reachable = 0;
        let mut last = None;
        let mut current = self.head;
        while let Some(id) = current {
            reachable += 1;
            last = current;
            current = self.nodes[id].next;
        }
        assert_eq!(reachable, self.len);
        assert_eq!(last, self.tail);
    }
}

impl<T> Default for SingleChain<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over a singly-linked container, from head to tail.
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a Arena<SingleNode<T>>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.current?];
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
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
            nodes: self.nodes,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator over a singly-linked container, from head to tail.
#[derive(Debug)]
pub struct IntoIter<T> {
    chain: SingleChain<T>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(crate) const fn new(chain: SingleChain<T>) -> Self {
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

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
