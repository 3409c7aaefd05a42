// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Checker built from plain status functions

use super::{Checker, LivenessResult, ReadinessResult};

pub const DEFAULT_LIVENESS_REASON: &str = "liveness check failed";
pub const DEFAULT_READINESS_REASON: &str = "readiness check failed";

type StatusFn = Box<dyn Fn() -> bool + Send + Sync>;

/// Adapts two `Fn() -> bool` status functions into a [`Checker`].
///
/// A `false` answer is reported with a fixed reason, see [`FnChecker::with_reasons`].
pub struct FnChecker {
    live_fn: StatusFn,
    ready_fn: StatusFn,
    liveness_reason: String,
    readiness_reason: String,
}

impl FnChecker {
    pub fn new<L, R>(live_fn: L, ready_fn: R) -> Self
    where
        L: Fn() -> bool + Send + Sync + 'static,
        R: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            live_fn: Box::new(live_fn),
            ready_fn: Box::new(ready_fn),
            liveness_reason: DEFAULT_LIVENESS_REASON.to_string(),
            readiness_reason: DEFAULT_READINESS_REASON.to_string(),
        }
    }

    #[must_use]
    pub fn with_reasons(
        mut self,
        liveness_reason: impl Into<String>,
        readiness_reason: impl Into<String>,
    ) -> Self {
        self.liveness_reason = liveness_reason.into();
        self.readiness_reason = readiness_reason.into();
        self
    }
}

impl Checker for FnChecker {
    fn is_live(&self) -> LivenessResult {
        if (self.live_fn)() {
            LivenessResult::live()
        } else {
            LivenessResult::not_live(self.liveness_reason.as_str())
        }
    }

    fn is_ready(&self) -> ReadinessResult {
        if (self.ready_fn)() {
            ReadinessResult::ready()
        } else {
            ReadinessResult::not_ready(self.readiness_reason.as_str())
        }
    }
}

impl std::fmt::Debug for FnChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnChecker")
            .field("liveness_reason", &self.liveness_reason)
            .field("readiness_reason", &self.readiness_reason)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_true_functions_pass() {
        let checker = FnChecker::new(|| true, || true);
        assert_eq!(checker.is_live(), LivenessResult::live());
        assert_eq!(checker.is_ready(), ReadinessResult::ready());
    }

    #[test]
    fn test_false_functions_use_default_reasons() {
        let checker = FnChecker::new(|| false, || false);
        assert_eq!(checker.is_live().failure_message(), DEFAULT_LIVENESS_REASON);
        assert_eq!(checker.is_ready().failure_message(), DEFAULT_READINESS_REASON);
    }

    #[test]
    fn test_custom_reasons() {
        let checker = FnChecker::new(|| false, || false).with_reasons("stuck", "no upstream");
        assert_eq!(checker.is_live().failure_message(), "stuck");
        assert_eq!(checker.is_ready().failure_message(), "no upstream");
    }

    #[test]
    fn test_functions_are_evaluated_per_call() {
        let ready = Arc::new(AtomicBool::new(false));
        let flag = ready.clone();
        let checker = FnChecker::new(|| true, move || flag.load(Ordering::SeqCst));

        assert!(!checker.is_ready().ready);
        ready.store(true, Ordering::SeqCst);
        assert!(checker.is_ready().ready);
    }
}
