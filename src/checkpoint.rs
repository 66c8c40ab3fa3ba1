// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Checkpoint proposals.
//!
//! A proposal covers the inclusive block range `start_block..=end_block` and
//! commits to it with a state root. Fields are private so every value in
//! circulation has passed validation.

use crate::error::ValidationError;
use crate::types::{Address, Hash32};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CheckpointProposal {
    root_hash: Hash32,
    start_block: u64,
    end_block: u64,
    proposer: Address,
}

impl CheckpointProposal {
    pub fn new(
        root_hash: Hash32,
        start_block: u64,
        end_block: u64,
        proposer: Address,
    ) -> Result<Self, ValidationError> {
        if start_block > end_block {
            return Err(ValidationError::BlockRange {
                start: start_block,
                end: end_block,
            });
        }

        Ok(Self {
            root_hash,
            start_block,
            end_block,
            proposer,
        })
    }

    /// Builds a proposal from untrusted request fields.
    ///
    /// Block bounds arrive signed so that a negative number is reported
    /// against its field instead of failing somewhere inside JSON parsing.
    pub fn from_raw(
        root_hash: &str,
        start_block: i64,
        end_block: i64,
        proposer: &str,
    ) -> Result<Self, ValidationError> {
        let start = non_negative("start_block", start_block)?;
        let end = non_negative("end_block", end_block)?;

        let root_hash: Hash32 = root_hash.parse().map_err(|reason| ValidationError::Hash {
            field: "root_hash",
            reason,
        })?;
        let proposer: Address = proposer.parse().map_err(|reason| ValidationError::Address {
            field: "proposer_address",
            reason,
        })?;

        Self::new(root_hash, start, end, proposer)
    }

    pub fn root_hash(&self) -> &Hash32 {
        &self.root_hash
    }

    pub fn start_block(&self) -> u64 {
        self.start_block
    }

    pub fn end_block(&self) -> u64 {
        self.end_block
    }

    pub fn proposer(&self) -> &Address {
        &self.proposer
    }

    /// Number of blocks covered, both ends inclusive.
    pub fn block_count(&self) -> u64 {
        // start <= end, so this only saturates for the full u64 range
        (self.end_block - self.start_block).saturating_add(1)
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<u64, ValidationError> {
    u64::try_from(value).map_err(|_| ValidationError::NegativeBlock { field, value })
}
