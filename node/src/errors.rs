// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::time::Duration;

use anchor_kernel::{CodecError, ValidationError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that end a checkpoint submission before broadcast.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Unreadable or unparseable request body.
    #[error("{0}")]
    BadInput(String),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    /// Only surfaced when strict encoding is enabled.
    #[error("{0}")]
    Encoding(#[from] CodecError),
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        // Callers get the raw error text, not a JSON envelope.
        let status = match self {
            SubmitError::BadInput(_) | SubmitError::Validation(_) => StatusCode::BAD_REQUEST,
            SubmitError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

#[derive(Error, Debug)]
pub enum BroadcastError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("consensus endpoint did not respond within {0:?}")]
    DeadlineElapsed(Duration),
}
