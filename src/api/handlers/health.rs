// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::AppState;

pub const LIVE_BODY: &str = "LIVE";
pub const READY_BODY: &str = "READY";

/// GET /healthz
///
/// 200 `LIVE` when the checker reports live, otherwise 503 with the
/// checker's error message (empty if it gave none).
pub async fn liveness(State(state): State<Arc<AppState>>) -> Response {
    let result = state.checker.is_live();
    if result.live {
        return (StatusCode::OK, LIVE_BODY).into_response();
    }

    tracing::debug!("Liveness probe failed: {}", result.failure_message());
    probe_failure(result.failure_message())
}

/// GET /readiness
///
/// 200 `READY` when the checker reports ready, otherwise 503 with the
/// checker's error message (empty if it gave none).
pub async fn readiness(State(state): State<Arc<AppState>>) -> Response {
    let result = state.checker.is_ready();
    if result.ready {
        return (StatusCode::OK, READY_BODY).into_response();
    }

    tracing::debug!("Readiness probe failed: {}", result.failure_message());
    probe_failure(result.failure_message())
}

fn probe_failure(message: &str) -> Response {
    (StatusCode::SERVICE_UNAVAILABLE, message.to_string()).into_response()
}
