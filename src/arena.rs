//! Node storage for [`OrderedTree`](crate::OrderedTree).
//!
//! Nodes live in a slab of `Option<Node>` slots addressed by [`NodeId`].
//! Handles stay stable while the slab grows because they are indices, not
//! pointers. Released slots go on a free list and are reused by the next
//! allocation, so the arena never holds more slots than the peak node count.
//!
//! The arena is the only owner of node storage. Ownership *between* nodes is
//! expressed by the tree: a node is owned by whichever parent holds its handle
//! in `left`/`right`, or by the tree's root slot.

use crate::node::{Node, NodeId};

/// Slab allocator for tree nodes.
#[derive(Debug)]
pub struct NodeArena<K, V> {
    /// Node slots; `None` marks a released slot.
    slots: Vec<Option<Node<K, V>>>,

    /// Released slot indices, reused LIFO.
    free: Vec<NodeId>,
}

impl<K, V> NodeArena<K, V> {
    /// Create an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Create an empty arena with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Number of live nodes.
    #[inline]
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of slots ever allocated (live + free).
    #[cfg(test)]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Store `node` and return its handle.
    pub fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        if let Some(id) = self.free.pop() {
            debug_assert!(self.slots[id.index()].is_none(), "free list holds a live slot");
            self.slots[id.index()] = Some(node);
            return id;
        }

        let id: NodeId = NodeId::from_index(self.slots.len());
        self.slots.push(Some(node));
        id
    }

    /// Release the node at `id` and hand back its contents.
    ///
    /// # Panics
    /// Panics if `id` does not refer to a live node.
    #[expect(clippy::expect_used, reason = "Invariant ensured by caller")]
    pub fn dealloc(&mut self, id: NodeId) -> Node<K, V> {
        let node: Node<K, V> = self
            .slots
            .get_mut(id.index())
            .and_then(Option::take)
            .expect("NodeArena::dealloc called on a released or unknown handle");
        self.free.push(id);
        node
    }

    /// Borrow the node at `id`, or `None` if the slot is not live.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Mutably borrow the node at `id`, or `None` if the slot is not live.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<K, V>> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Borrow a node the tree knows to be live.
    ///
    /// # Panics
    /// Panics if `id` is dangling. Every handle reachable from the root is
    /// live, so a panic here means a link was left pointing at a released node.
    #[inline]
    #[must_use]
    #[expect(clippy::expect_used, reason = "Invariant ensured by caller")]
    pub fn node(&self, id: NodeId) -> &Node<K, V> {
        self.get(id).expect("dangling node handle in tree links")
    }

    /// Mutable counterpart of [`node`](Self::node).
    ///
    /// # Panics
    /// Panics if `id` is dangling.
    #[inline]
    #[expect(clippy::expect_used, reason = "Invariant ensured by caller")]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.get_mut(id).expect("dangling node handle in tree links")
    }

    /// Drop every node and forget all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<K, V> Default for NodeArena<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
//  Tests
// ============================================================================
