//! Liveness and readiness probes.
//!
//! Readiness also asks the contact store for its size, so a phonebook whose
//! database has gone away stops receiving traffic while staying alive.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use tracing::warn;

use crate::inbound::http::state::HttpState;

/// Startup and shutdown flags shared with the probe handlers.
#[derive(Debug)]
pub struct HealthState {
    listening: AtomicBool,
    draining: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            listening: AtomicBool::new(false),
            draining: AtomicBool::new(false),
        }
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the listener is bound.
    pub fn mark_ready(&self) {
        self.listening.store(true, Ordering::Release);
    }

    /// Record that shutdown has begun; liveness fails from here on.
    pub fn begin_draining(&self) {
        self.draining.store(true, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.listening.load(Ordering::Acquire) && !self.is_draining()
    }

    pub fn is_draining(&self) -> bool {
        self.draining.load(Ordering::Acquire)
    }
}

fn probe_response(ok: bool) -> HttpResponse {
    let mut response = if ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness probe: 200 once listening and the contact store answers.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Listening and the contact store answers"),
        (status = 503, description = "Starting, draining, or contact store unavailable")
    )
)]
#[get("/health/ready")]
pub async fn ready(
    health: web::Data<HealthState>,
    http: web::Data<HttpState>,
) -> HttpResponse {
    if !health.is_ready() {
        return probe_response(false);
    }
    match http.directory.count().await {
        Ok(_) => probe_response(true),
        Err(error) => {
            warn!(code = ?error.code(), message = error.message(), "readiness: contact store check failed");
            probe_response(false)
        }
    }
}

/// Liveness probe: 200 until shutdown begins.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Serving"),
        (status = 503, description = "Shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(health: web::Data<HealthState>) -> HttpResponse {
    probe_response(!health.is_draining())
}
