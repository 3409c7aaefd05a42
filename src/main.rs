// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::sync::Arc;

use health_endpoints::metrics::global;
use health_endpoints::{
    Config, MetricsRegistry, ProbeFlags, Result, drain_on_signal, health_router,
};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Загружаем .env файл
    dotenvy::dotenv().ok();

    // Инициализация логирования
    setup_tracing();

    let config = Config::from_env();
    config.validate().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        e
    })?;
    let addr = config.socket_addr()?;

    // Реестр метрик устанавливается явно и снимается при завершении
    let metrics = match &config.metrics_prefix {
        Some(prefix) => MetricsRegistry::with_prefix(prefix),
        None => MetricsRegistry::new(),
    };
    metrics.register_build_info(env!("CARGO_PKG_VERSION")).await;
    global::install(metrics)?;

    let flags = ProbeFlags::new();
    let app = health_router(Arc::new(flags.clone()))?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Health endpoints starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /healthz   - Liveness probe");
    tracing::info!("  - GET /readiness - Readiness probe");
    tracing::info!("  - GET /metrics   - Prometheus metrics");

    flags.set_ready(true);

    // Канал завершения (graceful shutdown)
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    // Ожидание Ctrl+C: сначала снимаем готовность, затем ждём grace-период
    tokio::spawn(drain_on_signal(
        tokio::signal::ctrl_c(),
        flags.clone(),
        config.shutdown_grace(),
        shutdown_tx.clone(),
    ));

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    drop(shutdown_tx);
    global::uninstall();
    Ok(())
}

fn setup_tracing() {
    // Если RUST_LOG не установлена, используем "info" по умолчанию
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
