use std::time::Duration;

use anchor_kernel::TxBytes;
use reqwest::{Client, StatusCode};

use crate::errors::BroadcastError;

/// Response of the consensus endpoint, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastResult {
    pub status: StatusCode,
    pub payload: Vec<u8>,
}

impl BroadcastResult {
    /// Only a plain 200 counts. Other 2xx codes relay nothing.
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// What the submitter gets back: the whole body on success, nothing
    /// otherwise. Consensus error text is never relayed.
    pub fn into_relay_body(self) -> Vec<u8> {
        if self.is_success() {
            self.payload
        } else {
            Vec::new()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConsensusClient {
    base_url: String,
    client: Client,
}

impl ConsensusClient {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            base_url: url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn broadcast_url(&self) -> String {
        format!("{}/broadcast_tx_commit", self.base_url)
    }

    /// `GET /broadcast_tx_commit?tx=0x<hex>`, waiting for the commit result.
    ///
    /// No retries. The whole exchange, body included, must finish within
    /// `deadline`. Dropping the returned future aborts the request.
    pub async fn broadcast(
        &self,
        tx: &TxBytes,
        deadline: Duration,
    ) -> Result<BroadcastResult, BroadcastError> {
        let url = self.broadcast_url();
        let exchange = async {
            let resp = self
                .client
                .get(&url)
                .query(&[("tx", tx.to_hex())])
                .send()
                .await
                .map_err(|e| BroadcastError::Transport(e.to_string()))?;

            let status = resp.status();
            let payload = resp
                .bytes()
                .await
                .map_err(|e| BroadcastError::Transport(e.to_string()))?;

            Ok(BroadcastResult {
                status,
                payload: payload.to_vec(),
            })
        };

        tokio::time::timeout(deadline, exchange)
            .await
            .map_err(|_| BroadcastError::DeadlineElapsed(deadline))?
    }
}
