// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Shared live/ready flags that a service flips on its own lifecycle events

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use super::{Checker, LivenessResult, ReadinessResult};

/// Live/ready state shared between the service and the probe handlers.
///
/// Starts live and not ready. Clones share the same state.
#[derive(Debug, Clone)]
pub struct ProbeFlags {
    live: Arc<AtomicBool>,
    ready: Arc<AtomicBool>,
    liveness_reason: Arc<RwLock<Option<String>>>,
    readiness_reason: Arc<RwLock<Option<String>>>,
}

impl Default for ProbeFlags {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeFlags {
    #[must_use]
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
            ready: Arc::new(AtomicBool::new(false)),
            liveness_reason: Arc::new(RwLock::new(None)),
            readiness_reason: Arc::new(RwLock::new(None)),
        }
    }

    /// Sets liveness and clears any recorded reason
    pub fn set_live(&self, live: bool) {
        store_state(&self.live, &self.liveness_reason, live, None);
    }

    /// Sets readiness and clears any recorded reason
    pub fn set_ready(&self, ready: bool) {
        store_state(&self.ready, &self.readiness_reason, ready, None);
    }

    pub fn mark_dead(&self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::warn!("Marking service not live: {}", reason);
        store_state(&self.live, &self.liveness_reason, false, Some(reason));
    }

    pub fn mark_unready(&self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::info!("Marking service not ready: {}", reason);
        store_state(&self.ready, &self.readiness_reason, false, Some(reason));
    }
}

impl Checker for ProbeFlags {
    fn is_live(&self) -> LivenessResult {
        match load_state(&self.live, &self.liveness_reason) {
            (true, _) => LivenessResult::live(),
            (false, Some(reason)) => LivenessResult::not_live(reason),
            (false, None) => LivenessResult::not_live_without_reason(),
        }
    }

    fn is_ready(&self) -> ReadinessResult {
        match load_state(&self.ready, &self.readiness_reason) {
            (true, _) => ReadinessResult::ready(),
            (false, Some(reason)) => ReadinessResult::not_ready(reason),
            (false, None) => ReadinessResult::not_ready_without_reason(),
        }
    }
}

// Flag and reason change together under the reason lock, so a reader never
// sees one half of a transition. A poisoned lock only means a writer panicked
// mid-assignment of an Option; the stored value is still usable.
fn store_state(
    flag: &AtomicBool,
    slot: &RwLock<Option<String>>,
    value: bool,
    reason: Option<String>,
) {
    let mut guard = slot.write().unwrap_or_else(PoisonError::into_inner);
    *guard = reason;
    flag.store(value, Ordering::SeqCst);
}

fn load_state(flag: &AtomicBool, slot: &RwLock<Option<String>>) -> (bool, Option<String>) {
    let guard = slot.read().unwrap_or_else(PoisonError::into_inner);
    if flag.load(Ordering::SeqCst) {
        (true, None)
    } else {
        (false, guard.clone())
    }
}
