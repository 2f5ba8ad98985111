//! Configuration validation.
//!
//! Returns every problem found, not just the first.

use std::net::SocketAddr;

use crate::config::schema::SiteConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("access_window.days must name at least one day")]
    NoDays,

    #[error("access_window.open_hour ({open}) must be before close_hour ({close}), close_hour at most 24")]
    HourRange { open: u32, close: u32 },

    #[error("timeouts.request_secs must be greater than zero")]
    RequestTimeout,

    #[error("observability.metrics_address {0:?} is not a socket address")]
    MetricsAddress(String),
}

pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let window = &config.access_window;
    if window.days.is_empty() {
        errors.push(ValidationError::NoDays);
    }
    if window.open_hour >= window.close_hour || window.close_hour > 24 {
        errors.push(ValidationError::HourRange {
            open: window.open_hour,
            close: window.close_hour,
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
