// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Liveness and readiness checker contract
//!
//! The HTTP layer never decides whether the service is healthy. It asks an
//! injected [`Checker`] once per request and renders the answer.

mod flags;
mod func;

pub use flags::ProbeFlags;
pub use func::FnChecker;

use crate::error::ProbeError;

/// Source of liveness and readiness answers.
///
/// Calls are synchronous and made once per probe request; implementations
/// that need to do I/O should answer from state refreshed elsewhere.
pub trait Checker: Send + Sync + 'static {
    fn is_live(&self) -> LivenessResult;
    fn is_ready(&self) -> ReadinessResult;
}

/// Outcome of a liveness probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivenessResult {
    pub live: bool,
    pub error: Option<ProbeError>,
}

impl LivenessResult {
    #[must_use]
    pub fn live() -> Self {
        Self {
            live: true,
            error: None,
        }
    }

    pub fn not_live(error: impl Into<ProbeError>) -> Self {
        Self {
            live: false,
            error: Some(error.into()),
        }
    }

    #[must_use]
    pub fn not_live_without_reason() -> Self {
        Self {
            live: false,
            error: None,
        }
    }

    /// Error message, or an empty string when none was attached
    pub fn failure_message(&self) -> &str {
        self.error.as_ref().map_or("", ProbeError::message)
    }
}

/// Outcome of a readiness probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessResult {
    pub ready: bool,
    pub error: Option<ProbeError>,
}

impl ReadinessResult {
    #[must_use]
    pub fn ready() -> Self {
        Self {
            ready: true,
            error: None,
        }
    }

    pub fn not_ready(error: impl Into<ProbeError>) -> Self {
        Self {
            ready: false,
            error: Some(error.into()),
        }
    }

    #[must_use]
    pub fn not_ready_without_reason() -> Self {
        Self {
            ready: false,
            error: None,
        }
    }

    /// Error message, or an empty string when none was attached
    pub fn failure_message(&self) -> &str {
        self.error.as_ref().map_or("", ProbeError::message)
    }
}
