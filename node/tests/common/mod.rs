#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anchor_node::api::CheckpointRequest;
use anchor_node::config::NodeConfig;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

/// `tx` query values received by a stub endpoint, in arrival order.
pub type Seen = Arc<Mutex<Vec<String>>>;

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: &'static str,
    delay: Option<Duration>,
    seen: Seen,
}

async fn broadcast_tx_commit(
    State(stub): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, &'static str) {
    stub.seen
        .lock()
        .unwrap()
        .push(params.get("tx").cloned().unwrap_or_default());
    if let Some(delay) = stub.delay {
        tokio::time::sleep(delay).await;
    }
    (stub.status, stub.body)
}

async fn spawn(status: StatusCode, body: &'static str, delay: Option<Duration>) -> (String, Seen) {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route("/broadcast_tx_commit", get(broadcast_tx_commit))
        .with_state(StubState {
            status,
            body,
            delay,
            seen: seen.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), seen)
}

/// A consensus endpoint that answers every broadcast with `status` and `body`.
pub async fn spawn_consensus_stub(status: StatusCode, body: &'static str) -> (String, Seen) {
    spawn(status, body, None).await
}

/// A consensus endpoint that waits `delay` before answering.
pub async fn spawn_slow_consensus_stub(delay: Duration) -> (String, Seen) {
    spawn(StatusCode::OK, "late", Some(delay)).await
}

/// An address nothing listens on.
pub async fn unreachable_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn config_for(endpoint: &str) -> NodeConfig {
    NodeConfig {
        consensus_endpoint: endpoint.to_string(),
        broadcast_timeout: Duration::from_secs(5),
        ..Default::default()
    }
}

pub fn sample_request() -> CheckpointRequest {
    CheckpointRequest {
        root_hash: format!("0x{}", "ab".repeat(32)),
        start_block: 0,
        end_block: 255,
        proposer_address: format!("0x{}", "cd".repeat(20)),
    }
}
