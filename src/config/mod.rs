//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → SiteConfig (validated, immutable)
//!     → handed to the server at startup
//! ```
//!
//! # Design Decisions
//! - Every field has a default; an absent file means the built-in working hours on port 3000
//! - Validation separates syntactic (serde) from semantic checks
//! - Config is read once; there is no reload

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    AccessWindowConfig, ListenerConfig, LogFormat, ObservabilityConfig, SiteConfig, SitePaths,
    TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
