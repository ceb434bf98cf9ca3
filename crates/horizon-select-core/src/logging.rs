//! Logging facilities for Horizon Select.
//!
//! This module provides:
//! - Target name constants for the `tracing` crate
//! - A performance span guard for timing operations
//! - Macros that log under a fixed target
//!
//! # Tracing Integration
//!
//! Horizon Select uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("horizon_select=debug"))
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=horizon_select::dispatch=trace`.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_select_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_select_core::signal";
    /// Widget crate target.
    pub const WIDGET: &str = "horizon_select";
    /// Input dispatcher target.
    pub const DISPATCH: &str = "horizon_select::dispatch";
    /// Open/highlight state machine target.
    pub const POPUP: &str = "horizon_select::popup";
    /// Selection controller target.
    pub const SELECTION: &str = "horizon_select::selection";
    /// Instance arena target.
    pub const ARENA: &str = "horizon_select::arena";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_select::config";
    /// Performance spans target.
    pub const PERF: &str = "horizon_select::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for tracking the duration of an operation.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_select::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// Thin wrappers around the `tracing` macros that default the target to the
/// widget crate. Callers must depend on `tracing`.
#[macro_export]
macro_rules! select_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "horizon_select", $($arg)*)
    };
}

#[macro_export]
macro_rules! select_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "horizon_select", $($arg)*)
    };
}

#[macro_export]
macro_rules! select_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "horizon_select", $($arg)*)
    };
}
