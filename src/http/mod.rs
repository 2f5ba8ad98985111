//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (request id, trace span, timeout)
//!     → static assets from the public dir (no gate)
//!     → gate (working hours)
//!     → page routes (/, /services, /contact) or 404
//!     → Send to client
//! ```

pub mod server;

pub use server::{HttpServer, REQUEST_ID_HEADER};
