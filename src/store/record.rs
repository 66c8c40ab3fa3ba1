// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Record definitions and value codecs.

use core::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::store::keys::StoreNamespace;
use crate::types::{Address, PubKey};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorSigningInfo {
    pub address: Address,
    pub start_height: u64,
    pub index_offset: u64,
    /// Unix seconds.
    pub jailed_until: u64,
    pub tombstoned: bool,
    pub missed_blocks_counter: u64,
}

impl ValidatorSigningInfo {
    pub fn new(
        address: Address,
        start_height: u64,
        index_offset: u64,
        jailed_until: u64,
        tombstoned: bool,
        missed_blocks_counter: u64,
    ) -> Self {
        Self {
            address,
            start_height,
            index_offset,
            jailed_until,
            tombstoned,
            missed_blocks_counter,
        }
    }
}

impl fmt::Display for ValidatorSigningInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ValidatorSigningInfo{{address: {}, start_height: {}, index_offset: {}, jailed_until: {}, tombstoned: {}, missed_blocks_counter: {}}}",
            self.address,
            self.start_height,
            self.index_offset,
            self.jailed_until,
            self.tombstoned,
            self.missed_blocks_counter
        )
    }
}

/// A single missed-block bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolValue {
    pub value: bool,
}

fn encode_value<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    bincode::serde::encode_to_vec(value, bincode::config::standard())
        .map_err(|e| StoreError::Encode(e.to_string()))
}

fn decode_value<T: DeserializeOwned>(
    namespace: StoreNamespace,
    bytes: &[u8],
) -> Result<T, StoreError> {
    let (value, read) = bincode::serde::decode_from_slice::<T, _>(bytes, bincode::config::standard())
        .map_err(|e| StoreError::Value {
            namespace,
            reason: e.to_string(),
        })?;

    if read != bytes.len() {
        return Err(StoreError::Value {
            namespace,
            reason: format!("{} trailing bytes", bytes.len() - read),
        });
    }
    Ok(value)
}

pub fn encode_signing_info(info: &ValidatorSigningInfo) -> Result<Vec<u8>, StoreError> {
    encode_value(info)
}

pub fn decode_signing_info(bytes: &[u8]) -> Result<ValidatorSigningInfo, StoreError> {
    decode_value(StoreNamespace::ValidatorSigningInfo, bytes)
}

pub fn encode_bool_value(value: &BoolValue) -> Result<Vec<u8>, StoreError> {
    encode_value(value)
}

pub fn decode_bool_value(bytes: &[u8]) -> Result<BoolValue, StoreError> {
    decode_value(StoreNamespace::ValidatorMissedBlockBitArray, bytes)
}

/// Public keys are stored as raw SEC1 bytes, compressed.
pub fn encode_pubkey(key: &PubKey) -> Vec<u8> {
    key.to_compressed_bytes()
}

pub fn decode_pubkey(bytes: &[u8]) -> Result<PubKey, StoreError> {
    PubKey::from_sec1_bytes(bytes).map_err(|e| StoreError::Value {
        namespace: StoreNamespace::AddrPubkeyRelation,
        reason: e.to_string(),
    })
}
