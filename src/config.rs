//! Construction-time settings for [`OrderedTree`](crate::OrderedTree).

/// What `insert` does when the key is already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Replace the stored value and return the old one. Shape is untouched.
    #[default]
    Overwrite,

    /// Leave the tree unchanged and fail with
    /// [`TreeError::DuplicateKey`](crate::TreeError::DuplicateKey).
    Reject,
}

/// Settings for a new tree.
///
/// # Example
///
/// ```rust
/// use ordtree::{DuplicatePolicy, OrderedTree, TreeConfig};
///
/// let config = TreeConfig::new().duplicates(DuplicatePolicy::Reject).capacity(128);
/// let mut tree: OrderedTree<u32, &str> = OrderedTree::with_config(config);
///
/// tree.insert(1, "one").unwrap();
/// assert!(tree.insert(1, "uno").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Policy for equal keys on insert.
    pub duplicates: DuplicatePolicy,

    /// Number of nodes to reserve up front.
    pub capacity: usize,
}

impl TreeConfig {
    /// Default settings: overwrite duplicates, no pre-allocation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            duplicates: DuplicatePolicy::Overwrite,
            capacity: 0,
        }
    }

    /// Set the duplicate-key policy.
    #[must_use]
    pub const fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Reserve room for `capacity` nodes.
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
