// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod decode;
pub mod keys;
pub mod record;

pub use decode::{decode_store, try_decode_store};
pub use keys::StoreNamespace;

/// A raw key/value pair read from the application store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct KvPair {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl KvPair {
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
