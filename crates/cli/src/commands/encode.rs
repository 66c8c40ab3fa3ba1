use anchor_kernel::tx::encode_checkpoint_tx;
use anchor_kernel::CheckpointProposal;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedCheckpoint {
    pub tx: String,
    pub tx_id: String,
    pub len: usize,
}

/// Builds and encodes a checkpoint exactly as the node would, without broadcasting.
pub fn encode(root_hash: &str, start: i64, end: i64, proposer: &str) -> anyhow::Result<EncodedCheckpoint> {
    let proposal = CheckpointProposal::from_raw(root_hash, start, end, proposer)?;
    let tx = encode_checkpoint_tx(&proposal)?;

    Ok(EncodedCheckpoint {
        tx: tx.to_hex(),
        tx_id: tx.tx_id().to_string(),
        len: tx.len(),
    })
}

pub fn run(root_hash: &str, start: i64, end: i64, proposer: &str, json: bool) -> anyhow::Result<()> {
    let encoded = encode(root_hash, start, end, proposer)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&encoded)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Property", "Value"]);

    table.add_row(vec!["Tx ID", &encoded.tx_id]);
    table.add_row(vec!["Length", &format!("{} bytes", encoded.len)]);
    table.add_row(vec!["Tx", &encoded.tx]);

    println!("\nCheckpoint Transaction");
    println!("----------------------");
    println!("{table}\n");

    Ok(())
}
