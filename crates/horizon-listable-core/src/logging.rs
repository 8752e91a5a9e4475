//! Logging facilities for Horizon Listable.
//!
//! Horizon Listable uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_listable::measure=trace")
//!         .init();
//!
//!     // Build lists...
//! }
//! ```
//!
//! Events are emitted under the targets in [`targets`], so a single
//! subsystem can be enabled without the rest.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Content and section builders.
    pub const BUILDER: &str = "horizon_listable::builder";
    /// Element measurement during the host layout pass.
    pub const MEASURE: &str = "horizon_listable::measure";
    /// Backing view creation and configuration.
    pub const DESCRIPTION: &str = "horizon_listable::description";
}

/// Span names used throughout Horizon Listable for tracing.
pub mod span_names {
    /// Measuring an element's content.
    pub const MEASURE: &str = "horizon_listable::measure";
    /// Configuring a backing view from properties.
    pub const CONFIGURE: &str = "horizon_listable::configure";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used around measurement and configuration so their duration shows up in
/// span-aware subscribers.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "horizon_listable::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_share_prefix() {
        for target in [targets::BUILDER, targets::MEASURE, targets::DESCRIPTION] {
            assert!(target.starts_with("horizon_listable::"));
        }
    }

    #[test]
    fn test_perf_span_without_subscriber() {
        let guard = PerfSpan::new(span_names::MEASURE);
        drop(guard);
    }
}
