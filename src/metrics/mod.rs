// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics exporter for the `/metrics` endpoint
//!
//! Wraps a `prometheus_client` registry and the process-wide slot that holds it.

pub mod global;
mod labels;
mod registry;

#[cfg(test)]
mod tests;

/// Labels for build information
pub use labels::BuildInfoLabels;

/// Prometheus metrics registry
pub use registry::{MetricsRegistry, OPENMETRICS_CONTENT_TYPE};
