// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

use crate::store::keys::StoreNamespace;

/// Failure to parse a fixed-width hex value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("expected {expected} hex digits, found {found}")]
    Length { expected: usize, found: usize },
    #[error("{0}")]
    Invalid(String),
}

/// A checkpoint field that failed validation. Always names the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: block number must be non-negative, got {value}")]
    NegativeBlock { field: &'static str, value: i64 },

    #[error("{field}: invalid hash: {reason}")]
    Hash { field: &'static str, reason: HexError },

    #[error("{field}: invalid address: {reason}")]
    Address { field: &'static str, reason: HexError },

    #[error("start_block {start} is greater than end_block {end}")]
    BlockRange { start: u64, end: u64 },
}

impl ValidationError {
    /// The request field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NegativeBlock { field, .. }
            | ValidationError::Hash { field, .. }
            | ValidationError::Address { field, .. } => field,
            ValidationError::BlockRange { .. } => "start_block",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("encoding failed: {0}")]
    Encode(String),

    #[error("empty transaction")]
    Empty,

    #[error("rlp: {0}")]
    Rlp(#[from] rlp::DecoderError),

    #[error("{0} trailing bytes after transaction")]
    TrailingBytes(usize),

    #[error("{what}: expected {expected} items, found {found}")]
    Arity {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("unsupported transaction version {0}")]
    UnsupportedVersion(u64),

    #[error("unknown message type {0}")]
    UnknownMessage(u64),

    #[error("{field}: expected {expected} bytes, found {found}")]
    FieldWidth {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("decoded checkpoint is invalid: {0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("invalid store key prefix {}", display_prefix(.0))]
    UnknownNamespace(Option<u8>),

    #[error("cannot decode {namespace:?} value: {reason}")]
    Value {
        namespace: StoreNamespace,
        reason: String,
    },

    #[error("cannot encode store value: {0}")]
    Encode(String),
}

fn display_prefix(prefix: &Option<u8>) -> String {
    match prefix {
        Some(b) => format!("0x{b:02x}"),
        None => "<empty key>".to_string(),
    }
}
