//! Tree node and its arena handle.
//!
//! A [`Node`] owns its children through [`NodeId`] handles: only the parent
//! holds a child's handle in `left`/`right`. The `parent` field is a
//! back-reference used for repair during removal and never owns anything.

use std::fmt as StdFmt;

/// Stable handle to a node slot in the `NodeArena`.
///
/// Handles stay valid until the node is released. A released slot may be
/// reused by a later insertion, so a handle must not outlive its node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Build a handle from a slot index.
    ///
    /// # Panics
    /// Panics if `index` does not fit the handle width.
    #[must_use]
    #[inline]
    #[expect(clippy::expect_used, reason = "arena never grows past u32::MAX slots")]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).expect("node arena exceeded u32::MAX slots"))
    }

    /// Slot index of this handle.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl StdFmt::Debug for NodeId {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which child slot of a parent holds a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The parent's `left` slot.
    Left,
    /// The parent's `right` slot.
    Right,
}

/// A single key/value entry with its structural links.
#[derive(Debug)]
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    /// Create a detached leaf under `parent`.
    #[must_use]
    #[inline]
    pub(crate) const fn leaf(key: K, value: V, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent,
        }
    }

    /// The node's key.
    #[must_use]
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// The node's value.
    #[must_use]
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Child handle on `side`.
    #[must_use]
    #[inline]
    pub const fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Mutable child slot on `side`.
    #[inline]
    pub(crate) const fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Consume the node, keeping only its payload.
    #[inline]
    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}
