// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Unit tests for the metrics registry

#[cfg(test)]
mod test {
    use crate::metrics::MetricsRegistry;
    use prometheus_client::metrics::counter::Counter;

    #[tokio::test]
    async fn test_empty_registry_encodes_eof_marker() {
        let metrics = MetricsRegistry::new();
        let text = metrics.encode_metrics().await.unwrap();
        assert_eq!(text, "# EOF\n");
    }

    #[tokio::test]
    async fn test_build_info_is_exported() {
        let metrics = MetricsRegistry::new();
        metrics.register_build_info("1.2.3").await;

        let text = metrics.encode_metrics().await.unwrap();
        assert!(text.contains("# TYPE build_info gauge"));
        assert!(text.contains("build_info{version=\"1.2.3\"} 1"));
    }

    #[tokio::test]
    async fn test_prefix_is_applied() {
        let metrics = MetricsRegistry::with_prefix("myservice");
        metrics.register_build_info("1.0.0").await;

        let text = metrics.encode_metrics().await.unwrap();
        assert!(text.contains("myservice_build_info"));
    }

    #[tokio::test]
    async fn test_register_custom_counter() {
        let metrics = MetricsRegistry::new();
        let requests = Counter::<u64>::default();
        metrics
            .register("requests", "Handled requests", requests.clone())
            .await;
        requests.inc();
        requests.inc();

        let text = metrics.encode_metrics().await.unwrap();
        assert!(text.contains("requests_total 2"));
    }

    #[tokio::test]
    async fn test_clones_share_registry() {
        let metrics = MetricsRegistry::new();
        let clone = metrics.clone();
        clone.register_build_info("2.0.0").await;

        let text = metrics.encode_metrics().await.unwrap();
        assert!(text.contains("version=\"2.0.0\""));
    }
}
