// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Checkpoint transactions.
//!
//! Wire layout (RLP):
//! ```text
//! tx  = [ version, msg_type, msg ]
//! msg = [ proposer (20 bytes), start_block, end_block, root_hash (32 bytes) ]
//! ```
//! RLP admits exactly one encoding per value, so byte identity is
//! proposal identity. Field order is consensus relevant.

pub mod decode;
pub mod encode;

use core::fmt;

use crate::checkpoint::CheckpointProposal;
use crate::error::CodecError;
use crate::types::Hash32;

pub use decode::decode_checkpoint_tx;
pub use encode::encode_checkpoint_tx;

pub const TX_VERSION: u64 = 1;
pub const MSG_CHECKPOINT: u64 = 1;

/// Canonically encoded transaction bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TxBytes(Vec<u8>);

impl TxBytes {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `0x`-prefixed lowercase hex, the form carried in the broadcast query.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }

    /// blake3 of the encoded bytes.
    pub fn tx_id(&self) -> Hash32 {
        Hash32::digest(&self.0)
    }
}

impl From<Vec<u8>> for TxBytes {
    fn from(bytes: Vec<u8>) -> Self {
        TxBytes(bytes)
    }
}

impl AsRef<[u8]> for TxBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for TxBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Turns a proposal into transaction bytes.
pub trait TransactionEncoder: Send + Sync {
    fn encode(&self, proposal: &CheckpointProposal) -> Result<TxBytes, CodecError>;
}

/// The canonical RLP encoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct RlpEncoder;

impl TransactionEncoder for RlpEncoder {
    fn encode(&self, proposal: &CheckpointProposal) -> Result<TxBytes, CodecError> {
        encode_checkpoint_tx(proposal)
    }
}
