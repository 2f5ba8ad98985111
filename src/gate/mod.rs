//! Working-hours admission gate.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → middleware.rs (read clock, ask the window)
//!     → window.rs (weekday + hour check)
//!     → admit: next handler runs
//!     → reject: fixed denial body, chain stops
//! ```
//!
//! # Design Decisions
//! - The gate is a pure function of the current wall-clock time
//! - The clock is injected so decisions can be pinned in tests
//! - Time zone is whatever the host resolves as local time

pub mod clock;
pub mod middleware;
pub mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use middleware::{working_hours_middleware, WorkingHoursGate, DENIAL_MESSAGE};
pub use window::AccessWindow;
