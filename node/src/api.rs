// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

/// Body of `POST /checkpoint/new`.
///
/// Block numbers are signed on the wire; negatives are rejected during
/// validation so the error can name the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointRequest {
    pub root_hash: String,
    pub start_block: i64,
    pub end_block: i64,
    pub proposer_address: String,
}
