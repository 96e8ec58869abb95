//! Errors returned by tree operations.

use std::fmt as StdFmt;

/// Errors that can occur during tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The key is not in the tree, or the tree is empty.
    KeyNotFound,

    /// k-th selection asked for a rank outside `1..=len`.
    OutOfRange {
        /// Requested rank.
        k: usize,
        /// Number of keys in the tree at the time of the call.
        len: usize,
    },

    /// The key already exists and the tree rejects duplicates.
    DuplicateKey,
}

impl StdFmt::Display for TreeError {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        match self {
            Self::KeyNotFound => write!(f, "key not found"),

            Self::OutOfRange { k, len } => {
                write!(f, "rank {k} out of range for tree of {len} keys")
            }

            Self::DuplicateKey => write!(f, "key already present (duplicates rejected)"),
        }
    }
}

impl std::error::Error for TreeError {}
