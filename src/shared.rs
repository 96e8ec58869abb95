//! `SharedTree` - an [`OrderedTree`] behind a single reader/writer lock.
//!
//! The tree has no internal synchronization: any child or parent link read
//! during a traversal can be rewritten by a concurrent removal. `SharedTree`
//! serializes mutations behind one [`parking_lot::RwLock`] and lets read-only
//! queries share it.
//!
//! | Operation                                   | Lock  |
//! |---------------------------------------------|-------|
//! | `insert`, `remove`, `clear`, `write`        | write |
//! | `find`, `get`, `height`, `kth_largest`, ... | read  |
//!
//! Reads hand back owned clones so no lock guard escapes a call.

use std::fmt as StdFmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::tree::OrderedTree;

/// Cloneable, thread-safe handle to an [`OrderedTree`].
///
/// Clones share the same tree.
///
/// # Example
///
/// ```rust
/// use ordtree::SharedTree;
/// use std::thread;
///
/// let tree: SharedTree<u64, u64> = SharedTree::new();
///
/// let handles: Vec<_> = (0..4u64)
///     .map(|t| {
///         let tree = tree.clone();
///         thread::spawn(move || {
///             for i in 0..100 {
///                 tree.insert(t * 100 + i, i).unwrap();
///             }
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(tree.len(), 400);
/// assert!(tree.is_valid_ordering());
/// ```
pub struct SharedTree<K, V> {
    inner: Arc<RwLock<OrderedTree<K, V>>>,
}

impl<K, V> SharedTree<K, V> {
    /// Create an empty shared tree with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::from_tree(OrderedTree::new())
    }

    /// Create an empty shared tree with explicit settings.
    #[must_use]
    pub fn with_config(config: TreeConfig) -> Self {
        Self::from_tree(OrderedTree::with_config(config))
    }

    /// Wrap an existing tree.
    #[must_use]
    pub fn from_tree(tree: OrderedTree<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    /// Run `f` with shared access to the tree.
    pub fn read<R>(&self, f: impl FnOnce(&OrderedTree<K, V>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access to the tree.
    pub fn write<R>(&self, f: impl FnOnce(&mut OrderedTree<K, V>) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// True when the tree holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Height of the tree; see [`OrderedTree::height`].
    #[must_use]
    pub fn height(&self) -> isize {
        self.inner.read().height()
    }

    /// See [`OrderedTree::has_consistent_links`].
    #[must_use]
    pub fn has_consistent_links(&self) -> bool {
        self.inner.read().has_consistent_links()
    }
}

impl<K: Ord, V> SharedTree<K, V> {
    /// Insert under the write lock; see [`OrderedTree::insert`].
    ///
    /// # Errors
    ///
    /// [`TreeError::DuplicateKey`] if the key exists and duplicates are rejected.
    pub fn insert(&self, key: K, value: V) -> Result<Option<V>, TreeError> {
        self.inner.write().insert(key, value)
    }

    /// Remove under the write lock; see [`OrderedTree::remove`].
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if the key is absent.
    pub fn remove(&self, key: &K) -> Result<V, TreeError> {
        self.inner.write().remove(key)
    }

    /// True if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.read().contains_key(key)
    }

    /// See [`OrderedTree::is_valid_ordering`].
    #[must_use]
    pub fn is_valid_ordering(&self) -> bool {
        self.inner.read().is_valid_ordering()
    }
}

impl<K: Ord, V: Clone> SharedTree<K, V> {
    /// Clone of the value for `key`.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if the key is absent.
    pub fn find(&self, key: &K) -> Result<V, TreeError> {
        self.inner.read().find(key).cloned()
    }

    /// Clone of the value for `key`, `None` if absent.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.read().get(key).cloned()
    }
}

impl<K: Ord + Clone, V> SharedTree<K, V> {
    /// Clone of the `k`-th largest key; see [`OrderedTree::kth_largest`].
    ///
    /// # Errors
    ///
    /// [`TreeError::OutOfRange`] if `k` is zero or exceeds the entry count.
    pub fn kth_largest(&self, k: usize) -> Result<K, TreeError> {
        self.inner.read().kth_largest(k).cloned()
    }
}

impl<K, V> Clone for SharedTree<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> Default for SharedTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<OrderedTree<K, V>> for SharedTree<K, V> {
    fn from(tree: OrderedTree<K, V>) -> Self {
        Self::from_tree(tree)
    }
}

impl<K: StdFmt::Debug, V: StdFmt::Debug> StdFmt::Debug for SharedTree<K, V> {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        f.debug_struct("SharedTree")
            .field("tree", &*self.inner.read())
            .finish()
    }
}
