//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Gate and HTTP layers produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (gate decisions, request counts)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID flows through the trace span of every request
//! - Metric updates are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
