// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the health endpoints server
//!
//! Loads configuration from environment variables. `.env` is loaded by the
//! binary before tracing is set up, not here.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8080";
    pub const SHUTDOWN_GRACE_SECS: u64 = 5;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const METRICS_PREFIX: &str = "METRICS_PREFIX";
    pub const SHUTDOWN_GRACE_SECONDS: &str = "SHUTDOWN_GRACE_SECONDS";
}

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_addr: String,
    pub metrics_prefix: Option<String>,
    /// How long readiness reports 503 before the server stops on shutdown
    pub shutdown_grace_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
            metrics_prefix: None,
            shutdown_grace_secs: defaults::SHUTDOWN_GRACE_SECS,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Unparsable values are logged and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_addr =
            lookup(env_vars::SERVER_ADDR).unwrap_or_else(|| defaults::SERVER_ADDR.to_string());

        let metrics_prefix = lookup(env_vars::METRICS_PREFIX)
            .map(|prefix| prefix.trim().to_string())
            .filter(|prefix| !prefix.is_empty());

        let shutdown_grace_secs = match lookup(env_vars::SHUTDOWN_GRACE_SECONDS) {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|e| {
                tracing::warn!(
                    "Failed to parse {}='{}': {}. Using {}s.",
                    env_vars::SHUTDOWN_GRACE_SECONDS,
                    raw,
                    e,
                    defaults::SHUTDOWN_GRACE_SECS
                );
                defaults::SHUTDOWN_GRACE_SECS
            }),
            None => defaults::SHUTDOWN_GRACE_SECS,
        };

        Config {
            server_addr,
            metrics_prefix,
            shutdown_grace_secs,
        }
    }

    /// Parses and returns the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.server_addr.parse().map_err(AppError::from)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }

    /// Validates configuration
    pub fn validate(&self) -> Result<()> {
        if self.server_addr.trim().is_empty() {
            return Err(AppError::Config("Server address cannot be empty".to_string()));
        }

        if self.server_addr.parse::<SocketAddr>().is_err() {
            return Err(AppError::Config(format!(
                "Invalid server address '{}': expected 'ip:port'",
                self.server_addr
            )));
        }

        if let Some(prefix) = &self.metrics_prefix {
            let valid_chars = prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
            let starts_with_digit = prefix.starts_with(|c: char| c.is_ascii_digit());
            if !valid_chars || starts_with_digit {
                return Err(AppError::Config(format!(
                    "Invalid metrics prefix '{}': expected [A-Za-z_][A-Za-z0-9_]*",
                    prefix
                )));
            }
        }

        Ok(())
    }
}
