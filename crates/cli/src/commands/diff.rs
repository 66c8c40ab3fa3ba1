use anchor_kernel::store::{try_decode_store, KvPair, StoreNamespace};

use crate::hexarg;

/// A decoded store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreDiff {
    pub namespace: StoreNamespace,
    pub text: String,
}

/// Decodes a before/after pair of raw store values under `key`.
///
/// Unknown namespaces and undecodable values are errors; no partial diff is
/// ever printed.
pub fn render(key: &str, before: &str, after: &str) -> anyhow::Result<StoreDiff> {
    let key = hexarg::parse("key", key)?;
    let namespace = StoreNamespace::from_key(&key);
    let a = KvPair::new(key.clone(), hexarg::parse("before", before)?);
    let b = KvPair::new(key, hexarg::parse("after", after)?);

    let text = try_decode_store(&a, &b)?;
    Ok(StoreDiff { namespace, text })
}

pub fn run(key: &str, before: &str, after: &str) -> anyhow::Result<()> {
    let diff = render(key, before, after)?;
    let prefix = diff
        .namespace
        .prefix()
        .map(|b| format!("0x{b:02x}"))
        .unwrap_or_default();

    println!("\nStore Mutation ({:?}, prefix {prefix})", diff.namespace);
    println!("--------------");
    println!("{}\n", diff.text);

    Ok(())
}
