// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Process-wide metrics registry slot
//!
//! Nothing is installed implicitly. The host calls [`install`] once during
//! startup and may call [`uninstall`] on teardown; [`get`] returns `None`
//! outside that window.

use std::sync::{PoisonError, RwLock};

use crate::error::{AppError, Result};
use crate::metrics::MetricsRegistry;

static GLOBAL: RwLock<Option<MetricsRegistry>> = RwLock::new(None);

/// Installs the process-wide registry. Fails if one is already installed.
pub fn install(registry: MetricsRegistry) -> Result<()> {
    let mut slot = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    if slot.is_some() {
        return Err(AppError::Metrics(
            "global metrics registry already installed".to_string(),
        ));
    }
    *slot = Some(registry);
    tracing::debug!("Global metrics registry installed");
    Ok(())
}

pub fn get() -> Option<MetricsRegistry> {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Removes and returns the process-wide registry
pub fn uninstall() -> Option<MetricsRegistry> {
    let registry = GLOBAL
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
    if registry.is_some() {
        tracing::debug!("Global metrics registry uninstalled");
    }
    registry
}
