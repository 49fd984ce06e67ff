//! Slot storage for chain nodes.
//!
//! An [`Arena`] owns every node of one chain. Removing a node vacates its slot
//! and the slot is recycled by the next insertion, so a chain that churns at a
//! steady length does not grow its backing vector.

use std::ops::{Index, IndexMut};

use crate::node::NodeId;

#[derive(Clone, Debug)]
pub(crate) struct Arena<N> {
    slots: Vec<Option<N>>,
    vacant: Vec<NodeId>,
}

impl<N> Arena<N> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    /// Stores `node` and returns the id of its slot.
    pub(crate) fn insert(&mut self, node: N) -> NodeId {
        if let Some(id) = self.vacant.pop() {
            self.slots[id.0] = Some(node);
            id
        } else {
            self.slots.push(Some(node));
            NodeId(self.slots.len() - 1)
        }
    }

    /// Takes the node out of its slot, leaving the slot vacant.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<N> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.vacant.push(id);
        Some(node)
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&N> {
        self.slots.get(id.0)?.as_ref()
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.slots.get_mut(id.0)?.as_mut()
    }

    /// Drops every node and forgets all slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }

    /// Number of occupied slots.
    #[cfg(test)]
    pub(crate) fn occupied(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }
}

impl<N> Default for Arena<N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        match self.get(id) {
            Some(node) => node,
            None => panic!("node slot {} is vacant", id.0),
        }
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("node slot {} is vacant", id.0),
        }
    }
}
