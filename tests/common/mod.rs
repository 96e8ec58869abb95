//! Common test utilities with tracing setup.
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//!
//! #[test]
//! fn my_test() {
//!     common::init_tracing();
//!     // ... test code with tracing::info!, tracing::debug!, etc.
//! }
//! ```
//!
//! # Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Filter directives (default: `ordtree=debug,info`)
//! - `ORDTREE_LOG_DIR`: Log directory (default: `logs/`)
//! - `ORDTREE_LOG_CONSOLE`: Set to "0" to disable console output
//!
//! Logs are appended to `logs/ordtree.jsonl` as newline-delimited JSON.
//! Library events only appear with `--features tracing`.

#![allow(dead_code)]

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Once;

use ordtree::OrderedTree;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "ordtree=debug,info";

static INIT: Once = Once::new();

/// Install the console and NDJSON file subscribers once per test binary.
pub fn init_tracing() {
    INIT.call_once(setup_tracing);
}

/// Where test logs go, read from the environment.
struct LogTargets {
    dir: PathBuf,
    console: bool,
}

impl LogTargets {
    fn from_env() -> Self {
        Self {
            dir: env::var("ORDTREE_LOG_DIR").map_or_else(|_| PathBuf::from("logs"), PathBuf::from),
            console: !env::var("ORDTREE_LOG_CONSOLE").is_ok_and(|v| v == "0"),
        }
    }
}

fn make_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[expect(clippy::expect_used)]
fn setup_tracing() {
    let targets = LogTargets::from_env();

    std::fs::create_dir_all(&targets.dir).expect("Failed to create log directory");

    // Append mode: each test binary runs in its own process.
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(targets.dir.join("ordtree.jsonl"))
        .expect("Failed to open log file");

    let console_layer = targets.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_test_writer()
            .compact()
            .with_filter(make_filter())
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_thread_ids(true)
        .with_span_events(FmtSpan::CLOSE)
        .json()
        .with_filter(make_filter());

    let _ = Registry::default()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Build a tree from `keys`, storing `key * 10` as each value.
///
/// # Panics
/// Panics if `keys` repeats a key under a rejecting policy.
pub fn tree_from_keys(keys: &[i64]) -> OrderedTree<i64, i64> {
    let mut tree = OrderedTree::new();
    for &key in keys {
        tree.insert(key, key * 10).unwrap();
    }
    tree
}

/// Assert every structural invariant, with context on failure.
pub fn assert_invariants<K: Ord, V>(tree: &OrderedTree<K, V>, context: &str) {
    assert!(tree.is_valid_ordering(), "{context}: ordering invariant broken");
    assert!(tree.has_consistent_links(), "{context}: parent links broken");
}
