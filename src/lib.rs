//! Working-hours website library.
//!
//! Serves a small static site whose pages only answer Monday to Friday,
//! 09:00 to 17:00 local time, plus an in-process people store.

pub mod config;
pub mod gate;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod people;

pub use config::SiteConfig;
pub use gate::{AccessWindow, Clock, SystemClock, WorkingHoursGate};
pub use http::HttpServer;
