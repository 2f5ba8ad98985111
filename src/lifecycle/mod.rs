//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → shutdown future resolves
//!     → server stops accepting → in-flight requests drain → exit
//! ```

pub mod signals;

pub use signals::wait_for_shutdown;
