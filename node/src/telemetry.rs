// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const CHECKPOINTS_SUBMITTED: &str = "anchor_checkpoints_submitted_total";
pub const CHECKPOINTS_REJECTED: &str = "anchor_checkpoints_rejected_total";
pub const ENCODE_FAILURES: &str = "anchor_encode_failures_total";
pub const BROADCAST_FAILURES: &str = "anchor_broadcast_failures_total";
pub const BROADCAST_DURATION: &str = "anchor_broadcast_duration_seconds";

static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize telemetry (logs + metrics). Called once by the binary.
pub fn init_telemetry() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "anchor_node=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            if PROM_HANDLE.set(handle).is_err() {
                tracing::warn!("Prometheus handle already set. Telemetry re-initialized?");
            }
        }
        Err(e) => tracing::error!("Failed to install Prometheus recorder: {}", e),
    }

    metrics::describe_counter!(CHECKPOINTS_SUBMITTED, "Checkpoint requests that reached broadcast");
    metrics::describe_counter!(CHECKPOINTS_REJECTED, "Checkpoint requests rejected before broadcast");
    metrics::describe_counter!(ENCODE_FAILURES, "Checkpoint transactions that failed to encode");
    metrics::describe_counter!(BROADCAST_FAILURES, "Broadcasts that failed in transport or timed out");
    metrics::describe_histogram!(BROADCAST_DURATION, "Time spent waiting on the consensus endpoint");

    metrics::gauge!("anchor_node_up", 1.0);
}

/// Render metrics in Prometheus text format.
pub fn get_metrics() -> String {
    if let Some(handle) = PROM_HANDLE.get() {
        handle.render()
    } else {
        "# metrics not initialized".to_string()
    }
}
