// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for the health endpoints

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Metrics registry or encoding error
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl From<std::fmt::Error> for AppError {
    fn from(error: std::fmt::Error) -> Self {
        Self::Metrics(error.to_string())
    }
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;

/// Reason a liveness or readiness probe failed.
///
/// Displays as the bare message so it can be written straight into a
/// response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ProbeError(String);

impl ProbeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Captures the display text of any error as a probe failure
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        Self(error.to_string())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProbeError {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}

impl From<String> for ProbeError {
    fn from(message: String) -> Self {
        Self(message)
    }
}
