//! Working-hours middleware.
//! Runs ahead of every page handler.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::gate::clock::Clock;
use crate::gate::window::AccessWindow;
use crate::observability::metrics;

/// Body written when a request arrives outside the window.
pub const DENIAL_MESSAGE: &str =
    "Sorry, the website is only available during working hours (Monday to Friday, 9AM to 5PM).";

/// State required by [`working_hours_middleware`].
#[derive(Clone)]
pub struct WorkingHoursGate {
    pub window: AccessWindow,
    pub clock: Arc<dyn Clock>,
    pub deny_status: StatusCode,
}

impl WorkingHoursGate {
    pub fn new(window: AccessWindow, clock: Arc<dyn Clock>) -> Self {
        Self {
            window,
            clock,
            deny_status: StatusCode::OK,
        }
    }

    pub fn with_deny_status(mut self, status: StatusCode) -> Self {
        self.deny_status = status;
        self
    }

    /// Whether the site is open right now.
    pub fn is_open(&self) -> bool {
        self.window.admits(self.clock.now())
    }
}

pub async fn working_hours_middleware(
    State(gate): State<WorkingHoursGate>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let now = gate.clock.now();

    if gate.window.admits(now) {
        metrics::record_gate_decision(true);
        return next.run(request).await;
    }

    tracing::debug!(
        path = %request.uri().path(),
        at = %now,
        "Request outside working hours"
    );
    metrics::record_gate_decision(false);
    (gate.deny_status, DENIAL_MESSAGE).into_response()
}
