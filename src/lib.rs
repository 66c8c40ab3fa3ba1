// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! anchor-kernel: checkpoint proposals, canonical transaction encoding and
//! store mutation decoding. No I/O happens in this crate.

pub mod checkpoint;
pub mod error;
pub mod store;
pub mod tx;
pub mod types;

pub use checkpoint::CheckpointProposal;
pub use error::{CodecError, StoreError, ValidationError};
pub use tx::{RlpEncoder, TransactionEncoder, TxBytes};

#[cfg(test)]
pub mod tests;
