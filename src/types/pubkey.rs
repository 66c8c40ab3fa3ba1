// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! secp256k1 public keys as they appear in the store.

use core::fmt;

use k256::elliptic_curve::sec1::ToEncodedPoint;

/// Length of the compressed SEC1 form, which is also the canonical display form.
pub const COMPRESSED_PUBKEY_LEN: usize = 33;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PubKey(k256::PublicKey);

impl PubKey {
    /// Accepts compressed or uncompressed SEC1 bytes. Points not on the curve are rejected.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, k256::elliptic_curve::Error> {
        k256::PublicKey::from_sec1_bytes(bytes).map(PubKey)
    }

    pub fn to_compressed_bytes(&self) -> Vec<u8> {
        self.0.to_encoded_point(true).as_bytes().to_vec()
    }
}

impl From<k256::PublicKey> for PubKey {
    fn from(key: k256::PublicKey) -> Self {
        PubKey(key)
    }
}

impl fmt::Display for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_compressed_bytes()))
    }
}
