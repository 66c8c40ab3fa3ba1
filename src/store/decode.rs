// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Store mutation decoding.

use crate::error::StoreError;
use crate::store::keys::StoreNamespace;
use crate::store::record::{decode_bool_value, decode_pubkey, decode_signing_info};
use crate::store::KvPair;

/// Renders a before/after pair of values stored under one key.
///
/// Dispatch uses the key of `before`. Both pairs are expected to carry the
/// same key.
pub fn try_decode_store(before: &KvPair, after: &KvPair) -> Result<String, StoreError> {
    match StoreNamespace::from_key(&before.key) {
        StoreNamespace::ValidatorSigningInfo => {
            let a = decode_signing_info(&before.value)?;
            let b = decode_signing_info(&after.value)?;
            Ok(format!("{a}\n{b}"))
        }
        StoreNamespace::ValidatorMissedBlockBitArray => {
            let a = decode_bool_value(&before.value)?;
            let b = decode_bool_value(&after.value)?;
            Ok(format!("missedA: {}\nmissedB: {}", a.value, b.value))
        }
        StoreNamespace::AddrPubkeyRelation => {
            let a = decode_pubkey(&before.value)?;
            let b = decode_pubkey(&after.value)?;
            Ok(format!("PubKeyA: {a}\nPubKeyB: {b}"))
        }
        StoreNamespace::Unrecognized(prefix) => Err(StoreError::UnknownNamespace(prefix)),
    }
}

/// Like [`try_decode_store`], but panics on any error.
///
/// An unknown prefix means the dispatch table no longer matches the store's
/// key space, and an undecodable value means the store is corrupt. Either
/// way there is no diff worth printing.
pub fn decode_store(before: &KvPair, after: &KvPair) -> String {
    match try_decode_store(before, after) {
        Ok(diff) => diff,
        Err(e) => panic!("{e}"),
    }
}
