// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Health Endpoints
//!
//! Liveness, readiness and metrics HTTP endpoints for a service.
//!
//! The crate does not decide whether a service is healthy: it asks a
//! caller-supplied [`Checker`] on every probe request and serves the
//! metrics registry the caller populates.
//!
//! ## Main modules
//! - `api`: HTTP router and handlers
//! - `checker`: checker contract and ready-made checkers
//! - `config`: configuration management
//! - `error`: error types
//! - `metrics`: metrics registry and the process-wide slot
//! - `shutdown`: readiness drain on shutdown signal
//! - `prelude`: commonly used types and traits

mod api;
mod checker;
mod config;
mod error;
pub mod metrics;
pub mod prelude;
mod shutdown;

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error, result and probe failure types
pub use error::{AppError, ProbeError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router, health_router};

/// Checker contract and implementations
pub use checker::{Checker, FnChecker, LivenessResult, ProbeFlags, ReadinessResult};

/// Metrics registry
pub use metrics::MetricsRegistry;

/// Graceful shutdown helper
pub use shutdown::drain_on_signal;
