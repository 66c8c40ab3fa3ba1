// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod primitives;
pub mod pubkey;

pub use primitives::{strip_hex_prefix, Address, Hash32, ADDRESS_LEN, HASH_LEN};
pub use pubkey::PubKey;
