//! # `ordtree`
//!
//! An ordered key-value map backed by an unbalanced binary search tree.
//!
//! - Insert, find and remove by ordered descent.
//! - Removal splices nodes out and promotes the in-order successor when the
//!   removed node has two children.
//! - Structural queries: [`height`](OrderedTree::height),
//!   [`is_valid_ordering`](OrderedTree::is_valid_ordering),
//!   [`kth_largest`](OrderedTree::kth_largest).
//!
//! ## Status
//!
//! | Feature              | Status                                   |
//! |----------------------|------------------------------------------|
//! | Insert / find        | Works                                    |
//! | Remove               | Works (successor promotion, root splice) |
//! | Rebalancing          | Not provided; sorted input degenerates   |
//! | Concurrent access    | Via [`SharedTree`] (one `RwLock`)        |
//!
//! ## Design
//!
//! Nodes live in a slab and refer to each other by index handles. A node's
//! `left`/`right` handles are the only owning links; its `parent` handle is a
//! plain back-reference used for removal repair and in-order stepping.
//! Removing the root reassigns the tree's root slot.
//!
//! ```rust
//! use ordtree::{OrderedTree, TreeError};
//!
//! let mut tree = OrderedTree::new();
//! tree.insert("b", 2).unwrap();
//! tree.insert("a", 1).unwrap();
//!
//! assert_eq!(tree.find(&"a"), Ok(&1));
//! assert_eq!(tree.remove(&"b"), Ok(2));
//! assert_eq!(tree.find(&"b"), Err(TreeError::KeyNotFound));
//! ```
//!
//! ## Logging
//!
//! Enable the `tracing` feature to emit `tracing` events for inserts,
//! removals and splices.

#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod tracing_helpers;

mod arena;
mod node;

pub mod config;
pub mod error;
pub mod shared;
pub mod tree;

// Re-export main types for convenience
pub use config::{DuplicatePolicy, TreeConfig};
pub use error::TreeError;
pub use shared::SharedTree;
pub use tree::{EMPTY_HEIGHT, Iter, Keys, OrderedTree, Values};
