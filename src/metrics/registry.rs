// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry served by the `/metrics` endpoint

use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::{Metric, Registry};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::metrics::labels::BuildInfoLabels;

/// Content type of the OpenMetrics text exposition format
pub const OPENMETRICS_CONTENT_TYPE: &str = "application/openmetrics-text; version=1.0.0; charset=utf-8";

/// Cloneable handle to a shared `prometheus_client` registry.
///
/// The registry itself owns encoding; this type only guards access to it.
#[derive(Clone, Debug)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::from_registry(Registry::default())
    }

    /// Registry whose metric names are all prefixed with `prefix_`
    pub fn with_prefix(prefix: &str) -> Self {
        Self::from_registry(Registry::with_prefix(prefix))
    }

    pub fn from_registry(registry: Registry) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
        }
    }

    pub async fn register(&self, name: &str, help: &str, metric: impl Metric) {
        let mut registry = self.registry.lock().await;
        registry.register(name, help, metric);
        tracing::debug!("Registered metric {}", name);
    }

    /// Registers a `build_info` gauge labelled with `version`, set to 1
    pub async fn register_build_info(&self, version: &str) {
        let build_info = Family::<BuildInfoLabels, Gauge>::default();
        self.register("build_info", "Build information", build_info.clone())
            .await;
        build_info
            .get_or_create(&BuildInfoLabels {
                version: version.to_string(),
            })
            .set(1);
    }

    pub async fn encode_metrics(&self) -> Result<String> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry)?;
        Ok(buffer)
    }
}
