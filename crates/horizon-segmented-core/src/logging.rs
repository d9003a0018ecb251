//! Logging facilities for Horizon Segmented.
//!
//! Horizon Segmented uses the `tracing` crate for instrumentation. To see
//! logs, install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_segmented=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_segmented_core::signal";
    /// Segmented control state machine target.
    pub const CONTROL: &str = "horizon_segmented::control";
    /// Segment layout target.
    pub const LAYOUT: &str = "horizon_segmented::layout";
    /// Performance spans target.
    pub const PERF: &str = "horizon_segmented::perf";
}

/// A guard that records a tracing span for a named operation.
///
/// The span stays entered until the guard is dropped.
///
/// # Example
///
/// ```
/// use horizon_segmented_core::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("relayout");
///     // ... timed work ...
/// }
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let _span = PerfSpan::new("test_operation");
            tracing::debug!(target: targets::LAYOUT, "inside span");
        });
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [
            targets::SIGNAL,
            targets::CONTROL,
            targets::LAYOUT,
            targets::PERF,
        ] {
            assert!(target.starts_with("horizon_segmented"));
        }
    }
}
