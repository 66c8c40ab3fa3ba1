// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::sync::Arc;
use std::time::Instant;

use anchor_kernel::{CheckpointProposal, RlpEncoder, TransactionEncoder, TxBytes};
use axum::{
    body::Body,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::api::CheckpointRequest;
use crate::config::NodeConfig;
use crate::errors::SubmitError;
use crate::network::ConsensusClient;
use crate::telemetry;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<NodeConfig>,
    pub consensus: ConsensusClient,
    pub encoder: Arc<dyn TransactionEncoder>,
}

impl AppState {
    pub fn new(config: NodeConfig) -> Self {
        let consensus = ConsensusClient::new(config.consensus_endpoint.clone());
        Self {
            config: Arc::new(config),
            consensus,
            encoder: Arc::new(RlpEncoder),
        }
    }

    pub fn with_encoder(mut self, encoder: Arc<dyn TransactionEncoder>) -> Self {
        self.encoder = encoder;
        self
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/checkpoint/new", post(new_checkpoint))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Content type of a relayed consensus body. The body is passed through
/// unparsed, so it is labelled as text.
pub const RELAY_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

async fn new_checkpoint(
    State(state): State<AppState>,
    body: Body,
) -> Result<impl IntoResponse, SubmitError> {
    let bytes = axum::body::to_bytes(body, state.config.max_body_bytes)
        .await
        .map_err(|e| {
            tracing::error!("Error reading checkpoint request body: {}", e);
            SubmitError::BadInput(e.to_string())
        })?;

    let req: CheckpointRequest = serde_json::from_slice(&bytes).map_err(|e| {
        tracing::error!("Error unmarshalling checkpoint request: {}", e);
        SubmitError::BadInput(e.to_string())
    })?;

    let relayed = submit_checkpoint(&state, req).await?;
    Ok(([(header::CONTENT_TYPE, RELAY_CONTENT_TYPE)], relayed))
}

/// Validate, encode, broadcast, relay. Single pass, no retries.
///
/// Returns the body to hand back to the submitter. Transport failures and
/// non-success responses both come back as an empty body.
#[tracing::instrument(skip_all, fields(start = req.start_block, end = req.end_block))]
pub async fn submit_checkpoint(
    state: &AppState,
    req: CheckpointRequest,
) -> Result<Vec<u8>, SubmitError> {
    let proposal = CheckpointProposal::from_raw(
        &req.root_hash,
        req.start_block,
        req.end_block,
        &req.proposer_address,
    )
    .map_err(|e| {
        tracing::warn!(field = e.field(), "Rejected checkpoint: {}", e);
        metrics::increment_counter!(telemetry::CHECKPOINTS_REJECTED);
        e
    })?;

    let tx = match state.encoder.encode(&proposal) {
        Ok(tx) => tx,
        Err(e) => {
            tracing::error!("Error generating tx bytes: {}", e);
            metrics::increment_counter!(telemetry::ENCODE_FAILURES);
            if state.config.strict_encoding {
                metrics::increment_counter!(telemetry::CHECKPOINTS_REJECTED);
                return Err(e.into());
            }
            // KNOWN DEFECT, kept for compatibility: a failed encode still
            // broadcasts, with empty tx bytes. Set strict_encoding to abort.
            TxBytes::default()
        }
    };

    tracing::debug!(tx = %tx, "Encoded checkpoint transaction");
    tracing::info!(
        tx_id = %tx.tx_id(),
        url = %state.consensus.broadcast_url(),
        "Broadcasting checkpoint"
    );
    metrics::increment_counter!(telemetry::CHECKPOINTS_SUBMITTED);

    let started = Instant::now();
    let outcome = state
        .consensus
        .broadcast(&tx, state.config.broadcast_timeout)
        .await;
    metrics::histogram!(telemetry::BROADCAST_DURATION, started.elapsed().as_secs_f64());

    match outcome {
        Ok(result) => {
            if result.is_success() {
                tracing::info!(status = %result.status, bytes = result.payload.len(), "Transaction sent");
            } else {
                tracing::warn!(status = %result.status, "Consensus endpoint returned non-success; relaying empty body");
            }
            Ok(result.into_relay_body())
        }
        Err(e) => {
            tracing::error!("Error while sending request to consensus endpoint: {}", e);
            metrics::increment_counter!(telemetry::BROADCAST_FAILURES);
            Ok(Vec::new())
        }
    }
}

async fn metrics_handler() -> String {
    telemetry::get_metrics()
}
