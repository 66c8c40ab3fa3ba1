//! Fixed-width hash and address types.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HexError;

pub const HASH_LEN: usize = 32;
pub const ADDRESS_LEN: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Hash32(pub [u8; HASH_LEN]);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Address(pub [u8; ADDRESS_LEN]);

/// Drops one leading `0x` or `0X`, if present.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Parses exactly `N` bytes of hex, with an optional `0x`/`0X` prefix.
/// Shorter or longer input is rejected rather than padded.
pub fn parse_fixed_hex<const N: usize>(s: &str) -> Result<[u8; N], HexError> {
    let digits = strip_hex_prefix(s);

    if digits.len() != N * 2 {
        return Err(HexError::Length {
            expected: N * 2,
            found: digits.len(),
        });
    }

    let mut out = [0u8; N];
    hex::decode_to_slice(digits, &mut out).map_err(|e| HexError::Invalid(e.to_string()))?;
    Ok(out)
}

impl Hash32 {
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// blake3 digest of `data`.
    pub fn digest(data: &[u8]) -> Self {
        Hash32(*blake3::hash(data).as_bytes())
    }
}

impl Address {
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl FromStr for Hash32 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fixed_hex::<HASH_LEN>(s).map(Hash32)
    }
}

impl FromStr for Address {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fixed_hex::<ADDRESS_LEN>(s).map(Address)
    }
}

impl fmt::Display for Hash32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl From<[u8; HASH_LEN]> for Hash32 {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Hash32(bytes)
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }
}
