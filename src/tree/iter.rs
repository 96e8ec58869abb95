//! In-order iteration.
//!
//! Iterators step between neighbours with the parent back-references instead
//! of keeping a stack: the successor of a node is the leftmost node of its
//! right subtree, or else the first ancestor reached from a left child.

use std::iter::FusedIterator;

use crate::node::NodeId;

use super::OrderedTree;

impl<K, V> OrderedTree<K, V> {
    /// Next node in ascending key order.
    fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.arena.node(id).right {
            return Some(self.leftmost(right));
        }

        let mut child: NodeId = id;
        let mut parent: Option<NodeId> = self.arena.node(id).parent;
        while let Some(up) = parent {
            if self.arena.node(up).left == Some(child) {
                return Some(up);
            }
            child = up;
            parent = self.arena.node(up).parent;
        }
        None
    }

    /// Previous node in ascending key order.
    fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(left) = self.arena.node(id).left {
            return Some(self.rightmost(left));
        }

        let mut child: NodeId = id;
        let mut parent: Option<NodeId> = self.arena.node(id).parent;
        while let Some(up) = parent {
            if self.arena.node(up).right == Some(child) {
                return Some(up);
            }
            child = up;
            parent = self.arena.node(up).parent;
        }
        None
    }

    /// Entries in ascending key order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            tree: self,
            front: self.root.map(|root| self.leftmost(root)),
            back: self.root.map(|root| self.rightmost(root)),
            remaining: self.len,
        }
    }

    /// Keys in ascending order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Values in ascending key order.
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

/// Iterator over `(&K, &V)` in ascending key order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    tree: &'a OrderedTree<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    /// Entries between `front` and `back`, inclusive.
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id: NodeId = self.front?;
        self.remaining -= 1;
        self.front = self.tree.successor(id);

        let node = self.tree.arena.node(id);
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id: NodeId = self.back?;
        self.remaining -= 1;
        self.back = self.tree.predecessor(id);

        let node = self.tree.arena.node(id);
        Some((node.key(), node.value()))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a OrderedTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over keys in ascending order.
#[derive(Debug, Clone)]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Iterator over values in ascending key order.
#[derive(Debug, Clone)]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
