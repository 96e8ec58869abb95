//! Zero-cost tracing helpers.
//!
//! With the `tracing` feature these macros forward to the `tracing` crate.
//! Without it (the default) they expand to nothing.
//!
//! ```bash
//! # Run the tests with tree events on the console
//! RUST_LOG=ordtree=trace cargo test --features tracing
//! ```
//!
//! Public entry points also use
//! `#[cfg_attr(feature = "tracing", tracing::instrument(...))]` for spans.

#![allow(unused_macros, unused_imports)]

/// Trace-level logging (descent steps). No-op without `tracing`.
#[cfg(feature = "tracing")]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

/// Debug-level logging (structural changes). No-op without `tracing`.
#[cfg(feature = "tracing")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

/// Warn-level logging. No-op without `tracing`.
#[cfg(feature = "tracing")]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        tracing::warn!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn_log {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_log;
pub(crate) use trace_log;
pub(crate) use warn_log;
