//! Store key layout.
//!
//! The first byte of every key selects its namespace. The rest is
//! namespace specific and is not needed for value decoding.

use crate::types::Address;

pub const SIGNING_INFO_PREFIX: u8 = 0x01;
pub const MISSED_BLOCK_BIT_ARRAY_PREFIX: u8 = 0x02;
pub const ADDR_PUBKEY_RELATION_PREFIX: u8 = 0x03;

/// The closed set of namespaces the decoder understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoreNamespace {
    ValidatorSigningInfo,
    ValidatorMissedBlockBitArray,
    AddrPubkeyRelation,
    /// Any other leading byte, or `None` for an empty key.
    Unrecognized(Option<u8>),
}

impl StoreNamespace {
    pub fn from_key(key: &[u8]) -> Self {
        match key.first().copied() {
            Some(SIGNING_INFO_PREFIX) => StoreNamespace::ValidatorSigningInfo,
            Some(MISSED_BLOCK_BIT_ARRAY_PREFIX) => StoreNamespace::ValidatorMissedBlockBitArray,
            Some(ADDR_PUBKEY_RELATION_PREFIX) => StoreNamespace::AddrPubkeyRelation,
            other => StoreNamespace::Unrecognized(other),
        }
    }

    pub fn prefix(&self) -> Option<u8> {
        match self {
            StoreNamespace::ValidatorSigningInfo => Some(SIGNING_INFO_PREFIX),
            StoreNamespace::ValidatorMissedBlockBitArray => Some(MISSED_BLOCK_BIT_ARRAY_PREFIX),
            StoreNamespace::AddrPubkeyRelation => Some(ADDR_PUBKEY_RELATION_PREFIX),
            StoreNamespace::Unrecognized(b) => *b,
        }
    }
}

fn prefixed(prefix: u8, rest: &[u8]) -> Vec<u8> {
    let mut key = Vec::with_capacity(1 + rest.len());
    key.push(prefix);
    key.extend_from_slice(rest);
    key
}

pub fn signing_info_key(addr: &Address) -> Vec<u8> {
    prefixed(SIGNING_INFO_PREFIX, addr.as_bytes())
}

/// Index is big-endian so keys for one validator sort by index.
pub fn missed_block_bit_array_key(addr: &Address, index: u64) -> Vec<u8> {
    let mut key = prefixed(MISSED_BLOCK_BIT_ARRAY_PREFIX, addr.as_bytes());
    key.extend_from_slice(&index.to_be_bytes());
    key
}

pub fn addr_pubkey_relation_key(addr: &Address) -> Vec<u8> {
    prefixed(ADDR_PUBKEY_RELATION_PREFIX, addr.as_bytes())
}
