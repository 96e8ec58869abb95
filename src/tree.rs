//! `OrderedTree` - an unbalanced binary search tree map.
//!
//! This module holds the mutation paths: insertion, lookup, and removal with
//! splice repair. Read-only structural queries live in `tree/query.rs` and
//! in-order iteration in `tree/iter.rs`.
//!
//! # Links
//!
//! Children are owned through `left`/`right` handles; `parent` is a
//! back-reference kept consistent by every mutation:
//!
//! ```text
//! node.parent == Some(p)  =>  p.left == Some(node) || p.right == Some(node)
//! node.parent == None     =>  tree.root == Some(node)
//! ```

use std::cmp::Ordering;
use std::fmt as StdFmt;
use std::mem as StdMem;

use crate::arena::NodeArena;
use crate::config::{DuplicatePolicy, TreeConfig};
use crate::error::TreeError;
use crate::node::{Node, NodeId, Side};
use crate::tracing_helpers::{debug_log, trace_log, warn_log};

mod iter;
mod query;

pub use iter::{Iter, Keys, Values};
pub use query::EMPTY_HEIGHT;

/// An ordered key-value map backed by an unbalanced binary search tree.
///
/// Keys are ordered by [`Ord`]. No rebalancing is done, so inserting keys in
/// sorted order produces a tree of height `len - 1`.
///
/// # Example
///
/// ```rust
/// use ordtree::{OrderedTree, TreeError};
///
/// let mut tree = OrderedTree::new();
/// for key in [3, 1, 4, 6, 9, 2, 5, 7] {
///     tree.insert(key, key * 10).unwrap();
/// }
///
/// assert_eq!(tree.height(), 4);
/// assert_eq!(tree.kth_largest(3), Ok(&6));
///
/// assert_eq!(tree.remove(&9), Ok(90));
/// assert_eq!(tree.find(&9), Err(TreeError::KeyNotFound));
/// assert_eq!(tree.kth_largest(3), Ok(&5));
/// ```
pub struct OrderedTree<K, V> {
    /// Owns every node.
    arena: NodeArena<K, V>,

    /// Root handle, `None` for the empty tree.
    root: Option<NodeId>,

    /// Number of entries.
    len: usize,

    config: TreeConfig,
}

impl<K, V> OrderedTree<K, V> {
    /// Create an empty tree that overwrites values on duplicate keys.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TreeConfig::new())
    }

    /// Create an empty tree with explicit settings.
    #[must_use]
    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            arena: NodeArena::with_capacity(config.capacity),
            root: None,
            len: 0,
            config,
        }
    }

    /// Settings this tree was created with.
    #[must_use]
    #[inline]
    pub const fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Number of entries.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when the tree holds no entries.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Leftmost node of the subtree at `id`.
    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena.node(id).left {
            id = left;
        }
        id
    }

    /// Rightmost node of the subtree at `id`.
    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.arena.node(id).right {
            id = right;
        }
        id
    }

    /// Smallest key, or `None` for an empty tree.
    #[must_use]
    pub fn first_key(&self) -> Option<&K> {
        self.root.map(|root| self.arena.node(self.leftmost(root)).key())
    }

    /// Largest key, or `None` for an empty tree.
    #[must_use]
    pub fn last_key(&self) -> Option<&K> {
        self.root.map(|root| self.arena.node(self.rightmost(root)).key())
    }

    /// Which of `parent`'s child slots holds `child`.
    fn side_of(&self, parent: NodeId, child: NodeId) -> Side {
        let node: &Node<K, V> = self.arena.node(parent);
        if node.left == Some(child) {
            Side::Left
        } else {
            debug_assert_eq!(node.right, Some(child), "parent link does not point back");
            Side::Right
        }
    }

    /// Put `replacement` where `target` sits and release `target`.
    ///
    /// `target` must have at most one child, and `replacement` must be that
    /// child (or `None`). A root target hands the tree's root slot to the
    /// replacement instead of rewriting a parent's child slot.
    fn splice(&mut self, target: NodeId, replacement: Option<NodeId>) -> (K, V) {
        let parent: Option<NodeId> = self.arena.node(target).parent;

        match parent {
            Some(parent) => {
                let side: Side = self.side_of(parent, target);
                *self.arena.node_mut(parent).child_mut(side) = replacement;
            }
            None => self.root = replacement,
        }

        if let Some(replacement) = replacement {
            self.arena.node_mut(replacement).parent = parent;
        }

        debug_log!(?target, ?replacement, ?parent, "splice");
        self.arena.dealloc(target).into_entry()
    }

    /// Unlink `target` and return its entry, repairing the links around it.
    fn remove_node(&mut self, target: NodeId) -> (K, V) {
        let node: &Node<K, V> = self.arena.node(target);

        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                // The successor has no left child, so this recursion bottoms
                // out in one of the splice arms below.
                let successor: NodeId = self.leftmost(right);
                let (key, value) = self.remove_node(successor);
                trace_log!(?target, ?successor, "promoted in-order successor");

                let node: &mut Node<K, V> = self.arena.node_mut(target);
                (
                    StdMem::replace(&mut node.key, key),
                    StdMem::replace(&mut node.value, value),
                )
            }
            (Some(child), None) | (None, Some(child)) => self.splice(target, Some(child)),
            (None, None) => self.splice(target, None),
        }
    }
}

impl<K: Ord, V> OrderedTree<K, V> {
    /// Handle of the node holding `key`.
    fn locate(&self, key: &K) -> Option<NodeId> {
        let mut current: Option<NodeId> = self.root;

        while let Some(id) = current {
            let node: &Node<K, V> = self.arena.node(id);
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
            trace_log!(from = ?id, to = ?current, "descend");
        }

        None
    }

    /// Insert `key` with `value`.
    ///
    /// Returns `Ok(None)` when a new entry was created. When `key` is already
    /// present the tree's [`DuplicatePolicy`] decides: `Overwrite` replaces the
    /// value and returns the old one, `Reject` leaves the tree alone.
    ///
    /// # Errors
    ///
    /// [`TreeError::DuplicateKey`] if the key exists and the policy is `Reject`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(len = self.len))
    )]
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, TreeError> {
        let Some(mut current) = self.root else {
            let id: NodeId = self.arena.alloc(Node::leaf(key, value, None));
            self.root = Some(id);
            self.len += 1;
            debug_log!(root = ?id, "insert into empty tree");
            return Ok(None);
        };

        loop {
            let node: &Node<K, V> = self.arena.node(current);
            let side: Side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return self.insert_existing(current, value),
            };

            match node.child(side) {
                Some(child) => current = child,
                None => {
                    let id: NodeId = self.arena.alloc(Node::leaf(key, value, Some(current)));
                    *self.arena.node_mut(current).child_mut(side) = Some(id);
                    self.len += 1;
                    debug_log!(node = ?id, parent = ?current, ?side, "insert");
                    return Ok(None);
                }
            }
        }
    }

    fn insert_existing(&mut self, id: NodeId, value: V) -> Result<Option<V>, TreeError> {
        match self.config.duplicates {
            DuplicatePolicy::Overwrite => {
                debug_log!(node = ?id, "overwrite existing value");
                let node: &mut Node<K, V> = self.arena.node_mut(id);
                Ok(Some(StdMem::replace(&mut node.value, value)))
            }
            DuplicatePolicy::Reject => {
                warn_log!(node = ?id, "duplicate key rejected");
                Err(TreeError::DuplicateKey)
            }
        }
    }

    /// Look up the value for `key`.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if the key is absent or the tree is empty.
    pub fn find(&self, key: &K) -> Result<&V, TreeError> {
        self.get(key).ok_or(TreeError::KeyNotFound)
    }

    /// Look up the value for `key`, `None` if absent.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.locate(key).map(|id| self.arena.node(id).value())
    }

    /// Mutable access to the value for `key`.
    ///
    /// Keys are never handed out mutably, so ordering cannot be broken here.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id: NodeId = self.locate(key)?;
        Some(&mut self.arena.node_mut(id).value)
    }

    /// True if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    /// Remove `key` and return its value.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if the key is absent or the tree is empty.
    pub fn remove(&mut self, key: &K) -> Result<V, TreeError> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Remove `key` and return the stored key and value.
    ///
    /// A node with two children takes over its in-order successor's entry;
    /// the successor's node is the one released.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if the key is absent or the tree is empty.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(len = self.len))
    )]
    pub fn remove_entry(&mut self, key: &K) -> Result<(K, V), TreeError> {
        let target: NodeId = self.locate(key).ok_or(TreeError::KeyNotFound)?;
        let entry: (K, V) = self.remove_node(target);
        self.len -= 1;
        Ok(entry)
    }
}

impl<K, V> Default for OrderedTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: StdFmt::Debug, V: StdFmt::Debug> StdFmt::Debug for OrderedTree<K, V> {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedTree<K, V> {
    /// Inserts every pair under the tree's policy; rejected duplicates are skipped.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            let _ = self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree: Self = Self::new();
        tree.extend(iter);
        tree
    }
}

// ============================================================================
//  Tests
// ============================================================================
