//! Observability for storefront pages.
//!
//! This crate provides:
//! - `init_logging` - `tracing` subscriber setup from `LoggingSettings`
//! - `request_span` - Span carrying request id, path and locale
//! - `PageMetrics` - Shell and section timings of one streamed page

mod logging;
mod metrics;
mod span;

pub use logging::*;
pub use metrics::*;
pub use span::*;

// Re-export for convenience
pub use storefront_core::{LogFormat, LoggingSettings, RequestId, TimingContext};
