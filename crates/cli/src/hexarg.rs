use anchor_kernel::types::strip_hex_prefix;

/// Decodes a hex argument, with or without a `0x` prefix.
pub fn parse(what: &str, raw: &str) -> anyhow::Result<Vec<u8>> {
    hex::decode(strip_hex_prefix(raw)).map_err(|e| anyhow::anyhow!("{what}: invalid hex: {e}"))
}
