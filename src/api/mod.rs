// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP API module for the health endpoints
//!
//! # Endpoints
//! - `GET /healthz` — liveness probe
//! - `GET /readiness` — readiness probe
//! - `GET /metrics` — Prometheus metrics
//!
//! Any other path falls through to axum's default 404.

pub mod handlers;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::checker::Checker;
use crate::error::{AppError, Result};
use crate::metrics::{MetricsRegistry, global};

/// Application state shared with endpoints
pub struct AppState {
    pub checker: Arc<dyn Checker>,
    pub metrics: MetricsRegistry,
}

impl AppState {
    pub fn new(checker: impl Checker, metrics: MetricsRegistry) -> Self {
        Self {
            checker: Arc::new(checker),
            metrics,
        }
    }
}

/// Creates the Axum router with the probe and metrics endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(handlers::liveness))
        .route("/readiness", get(handlers::readiness))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}

/// Creates the router against the globally installed metrics registry.
///
/// Fails if [`global::install`] has not been called.
pub fn health_router(checker: Arc<dyn Checker>) -> Result<Router> {
    let metrics = global::get().ok_or_else(|| {
        AppError::Metrics("global metrics registry is not installed".to_string())
    })?;
    Ok(create_router(Arc::new(AppState { checker, metrics })))
}
