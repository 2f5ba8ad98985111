//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use axum::http::StatusCode;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::gate::AccessWindow;

/// Root configuration for the site.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Where pages and static assets live.
    pub site: SitePaths,

    /// Admission window for page requests.
    pub access_window: AccessWindowConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Filesystem locations of the site content.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SitePaths {
    /// Static assets (CSS, images), served without the gate.
    pub public_dir: PathBuf,

    /// HTML pages served by the gated routes.
    pub views_dir: PathBuf,
}

impl Default for SitePaths {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            views_dir: PathBuf::from("views"),
        }
    }
}

/// Admission window configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AccessWindowConfig {
    /// Days on which the site is open.
    pub days: Vec<Weekday>,

    /// First admitted hour (inclusive).
    pub open_hour: u32,

    /// First rejected hour after opening (exclusive bound).
    pub close_hour: u32,

    /// Status code sent with the denial message. Rejected at parse time if not a valid status.
    #[serde(with = "status_code")]
    pub deny_status: StatusCode,
}

impl Default for AccessWindowConfig {
    fn default() -> Self {
        let window = AccessWindow::working_hours();
        Self {
            days: window.days().to_vec(),
            open_hour: window.open_hour(),
            close_hour: window.close_hour(),
            deny_status: StatusCode::OK,
        }
    }
}

impl AccessWindowConfig {
    pub fn to_window(&self) -> AccessWindow {
        AccessWindow::new(self.days.clone(), self.open_hour, self.close_hour)
    }
}

mod status_code {
    use axum::http::StatusCode;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(status.as_u16())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<StatusCode, D::Error> {
        let code = u16::deserialize(deserializer)?;
        StatusCode::from_u16(code)
            .map_err(|_| D::Error::custom(format!("{code} is not a valid HTTP status")))
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable or JSON log lines.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
