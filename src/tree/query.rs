//! Read-only structural queries: height, invariant checks, rank selection.
//!
//! Every query walks the tree with an explicit worklist so a degenerate
//! (list-shaped) tree cannot overflow the call stack.

use crate::error::TreeError;
use crate::node::{Node, NodeId};

use super::OrderedTree;

/// Height reported for an empty tree. A single leaf has height 0.
pub const EMPTY_HEIGHT: isize = -1;

impl<K, V> OrderedTree<K, V> {
    /// Number of edges on the longest root-to-leaf path.
    ///
    /// [`EMPTY_HEIGHT`] (`-1`) for an empty tree, `0` for a lone root. Missing
    /// children count as `-1`, so the result does not depend on which side of
    /// a node is empty.
    #[must_use]
    pub fn height(&self) -> isize {
        let mut height: isize = EMPTY_HEIGHT;
        let mut level: Vec<NodeId> = self.root.into_iter().collect();

        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&id| {
                    let node: &Node<K, V> = self.arena.node(id);
                    [node.left, node.right]
                })
                .flatten()
                .collect();
        }

        height
    }

    /// Check parent back-references and tree shape.
    ///
    /// True when the root has no parent, every child's parent is the node
    /// holding it, no node is reached twice, and the reachable node count
    /// matches both [`len`](Self::len) and the arena's live count.
    #[must_use]
    pub fn has_consistent_links(&self) -> bool {
        let Some(root) = self.root else {
            return self.len == 0 && self.arena.live_count() == 0;
        };

        if self.arena.get(root).is_none_or(|node| node.parent.is_some()) {
            return false;
        }

        let limit: usize = self.arena.live_count();
        let mut visited: usize = 0;
        let mut stack: Vec<NodeId> = vec![root];

        while let Some(id) = stack.pop() {
            visited += 1;
            if visited > limit {
                // More visits than nodes: some node has two owners or a cycle.
                return false;
            }

            let Some(node) = self.arena.get(id) else {
                return false;
            };

            for child in [node.left, node.right].into_iter().flatten() {
                match self.arena.get(child) {
                    Some(child_node) if child_node.parent == Some(id) => stack.push(child),
                    _ => return false,
                }
            }
        }

        visited == self.len && visited == limit
    }
}

impl<K: Ord, V> OrderedTree<K, V> {
    /// Check the ordering invariant at every node.
    ///
    /// Each node is compared against the tightest bounds inherited from its
    /// ancestors, so a left child must be smaller than its parent and also
    /// larger than every ancestor it sits to the right of. Nodes with one
    /// child only check the side that exists.
    ///
    /// Only the public API is used to build trees, so `false` indicates a bug
    /// in this crate rather than bad input.
    #[must_use]
    pub fn is_valid_ordering(&self) -> bool {
        let mut stack: Vec<(NodeId, Option<&K>, Option<&K>)> =
            self.root.map(|root| (root, None, None)).into_iter().collect();

        while let Some((id, lower, upper)) = stack.pop() {
            let node: &Node<K, V> = self.arena.node(id);

            if lower.is_some_and(|lower| node.key <= *lower)
                || upper.is_some_and(|upper| node.key >= *upper)
            {
                return false;
            }

            if let Some(left) = node.left {
                stack.push((left, lower, Some(&node.key)));
            }
            if let Some(right) = node.right {
                stack.push((right, Some(&node.key), upper));
            }
        }

        true
    }

    /// The key at position `k` (1-based) in descending order.
    ///
    /// Walks right subtree, node, left subtree, and stops as soon as the
    /// `k`-th node is reached. The pending path and the visit count are
    /// locals, so concurrent readers and repeated calls never interfere.
    ///
    /// # Errors
    ///
    /// [`TreeError::OutOfRange`] if `k` is zero or greater than [`len`](Self::len).
    pub fn kth_largest(&self, k: usize) -> Result<&K, TreeError> {
        let out_of_range = TreeError::OutOfRange { k, len: self.len };
        if k == 0 || k > self.len {
            return Err(out_of_range);
        }

        self.select_descending(k)
            .map(|id| self.arena.node(id).key())
            .ok_or(out_of_range)
    }

    /// Handle of the `k`-th node in reverse in-order, `None` past the end.
    fn select_descending(&self, k: usize) -> Option<NodeId> {
        let mut pending: Vec<NodeId> = Vec::new();
        let mut current: Option<NodeId> = self.root;
        let mut visited: usize = 0;

        loop {
            while let Some(id) = current {
                pending.push(id);
                current = self.arena.node(id).right;
            }

            let id: NodeId = pending.pop()?;
            visited += 1;
            if visited == k {
                return Some(id);
            }
            current = self.arena.node(id).left;
        }
    }
}

// ============================================================================
//  Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(keys: &[i32]) -> OrderedTree<i32, ()> {
        keys.iter().map(|&key| (key, ())).collect()
    }

    #[test]
    fn test_height_empty_and_single() {
        assert_eq!(tree_of(&[]).height(), EMPTY_HEIGHT);
        assert_eq!(tree_of(&[1]).height(), 0);
    }

    #[test]
    fn test_height_is_side_independent() {
        assert_eq!(tree_of(&[2, 1]).height(), 1);
        assert_eq!(tree_of(&[2, 3]).height(), 1);
        assert_eq!(tree_of(&[2, 1, 3]).height(), 1);
    }

    #[test]
    fn test_height_reference_sequence() {
        // Longest path: 3 -> 4 -> 6 -> 9 -> 7.
        assert_eq!(tree_of(&[3, 1, 4, 6, 9, 2, 5, 7]).height(), 4);
    }

    #[test]
    fn test_height_degenerate_chain() {
        let keys: Vec<i32> = (0..50).collect();
        assert_eq!(tree_of(&keys).height(), 49);
    }

    #[test]
    fn test_valid_ordering_after_inserts() {
        assert!(tree_of(&[]).is_valid_ordering());
        assert!(tree_of(&[5]).is_valid_ordering());
        assert!(tree_of(&[5, 3, 9, 6, 12, 1, 4]).is_valid_ordering());
    }

    #[test]
    fn test_invalid_ordering_local_violation() {
        let mut tree = tree_of(&[5, 3, 9]);
        let left = tree.arena.node(tree.root.unwrap()).left.unwrap();
        tree.arena.node_mut(left).key = 7;

        assert!(!tree.is_valid_ordering());
        // Same answer on a second call.
        assert!(!tree.is_valid_ordering());
    }

    #[test]
    fn test_invalid_ordering_ancestor_violation() {
        // 4 sits under 3's right side, which is inside 5's left subtree.
        let mut tree = tree_of(&[5, 3, 4]);
        let four = tree.locate(&4).unwrap();
        tree.arena.node_mut(four).key = 6;

        assert!(!tree.is_valid_ordering());
    }

    #[test]
    fn test_invalid_ordering_one_child_node() {
        let mut tree = tree_of(&[5, 8]);
        let eight = tree.locate(&8).unwrap();
        tree.arena.node_mut(eight).key = 2;

        assert!(!tree.is_valid_ordering());
    }

    #[test]
    fn test_consistent_links_detects_bad_parent() {
        let mut tree = tree_of(&[5, 3, 9]);
        assert!(tree.has_consistent_links());

        let three = tree.locate(&3).unwrap();
        let nine = tree.locate(&9).unwrap();
        tree.arena.node_mut(three).parent = Some(nine);

        assert!(!tree.has_consistent_links());
    }

    #[test]
    fn test_consistent_links_detects_shared_child() {
        let mut tree = tree_of(&[5, 3, 9]);
        let root = tree.root.unwrap();
        let three = tree.locate(&3).unwrap();
        let nine = tree.locate(&9).unwrap();

        // 3 reachable from both the root and 9.
        tree.arena.node_mut(nine).left = Some(three);
        assert!(!tree.has_consistent_links());

        tree.arena.node_mut(nine).left = None;
        tree.arena.node_mut(root).parent = Some(nine);
        assert!(!tree.has_consistent_links());
    }

    #[test]
    fn test_kth_largest_reference_sequence() {
        let tree = tree_of(&[3, 1, 4, 6, 9, 2, 5, 7]);

        let descending: Vec<i32> = (1..=8).map(|k| *tree.kth_largest(k).unwrap()).collect();
        assert_eq!(descending, vec![9, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_kth_largest_out_of_range() {
        let tree = tree_of(&[2, 1, 3]);

        assert_eq!(tree.kth_largest(0), Err(TreeError::OutOfRange { k: 0, len: 3 }));
        assert_eq!(tree.kth_largest(4), Err(TreeError::OutOfRange { k: 4, len: 3 }));
        assert_eq!(tree_of(&[]).kth_largest(1), Err(TreeError::OutOfRange { k: 1, len: 0 }));
    }

    #[test]
    fn test_kth_largest_is_repeatable() {
        let tree = tree_of(&[10, 5, 15, 3, 7]);

        let first = tree.kth_largest(2);
        let second = tree.kth_largest(2);
        assert_eq!(first, Ok(&10));
        assert_eq!(first, second);
    }

    #[test]
    fn test_select_descending_stops_at_target() {
        let tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);

        assert_eq!(tree.select_descending(1), tree.locate(&7));
        assert_eq!(tree.select_descending(4), tree.locate(&4));
        assert_eq!(tree.select_descending(7), tree.locate(&1));
        assert_eq!(tree.select_descending(8), None);
    }

    #[test]
    fn test_kth_largest_on_left_chain() {
        let keys: Vec<i32> = (0..50).rev().collect();
        let tree = tree_of(&keys);

        assert_eq!(tree.kth_largest(1), Ok(&49));
        assert_eq!(tree.kth_largest(50), Ok(&0));
    }

    /// Ascending chain of `n` keys, linked the way sorted inserts link them.
    fn sorted_chain(n: usize) -> OrderedTree<usize, ()> {
        let mut tree = OrderedTree::new();
        let mut tail: Option<NodeId> = None;

        for key in 0..n {
            let id = tree.arena.alloc(Node::leaf(key, (), tail));
            match tail {
                Some(parent) => tree.arena.node_mut(parent).right = Some(id),
                None => tree.root = Some(id),
            }
            tail = Some(id);
            tree.len += 1;
        }
        tree
    }

    #[test]
    fn test_queries_on_deep_chain() {
        const N: usize = 200_000;
        let tree = sorted_chain(N);
        assert!(tree.has_consistent_links());

        assert_eq!(tree.height(), 199_999);
        assert!(tree.is_valid_ordering());
        assert_eq!(tree.kth_largest(1), Ok(&(N - 1)));
        assert_eq!(tree.kth_largest(N / 2), Ok(&(N / 2)));
        assert_eq!(tree.kth_largest(N), Ok(&0));
    }
}
