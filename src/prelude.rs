// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use health_endpoints::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, ProbeError, Result};

// Router
pub use crate::api::{AppState, create_router, health_router};

// Checkers
pub use crate::checker::{Checker, FnChecker, LivenessResult, ProbeFlags, ReadinessResult};

// Metrics types
pub use crate::metrics::{BuildInfoLabels, MetricsRegistry};
