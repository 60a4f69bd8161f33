//! Observability infrastructure for the Inkorner storefront.
//!
//! This crate provides:
//! - `RequestId` / `RequestContext` - typed request parameters with a
//!   unique identifier for correlation
//! - `StructuredLogger` - structured logging with request context
//! - `MetricsCollector` - per-request timing metrics with dependency
//!   breakdown

mod context;
mod logging;
mod metrics;

pub use context::*;
pub use logging::*;
pub use metrics::*;
