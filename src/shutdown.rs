// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Graceful drain on shutdown signal

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;

use crate::checker::ProbeFlags;

/// Waits for `signal`, reports not ready for `grace`, then notifies `shutdown_tx`.
///
/// If the signal cannot be listened for, nothing is sent: the server keeps
/// running as long as some other sender is alive.
pub async fn drain_on_signal<F>(
    signal: F,
    flags: ProbeFlags,
    grace: Duration,
    shutdown_tx: watch::Sender<bool>,
) where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            tracing::info!("Shutdown signal received, draining for {:?}", grace);
            flags.mark_unready("shutting down");
            tokio::time::sleep(grace).await;
            let _ = shutdown_tx.send(true);
        }
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
        }
    }
}
