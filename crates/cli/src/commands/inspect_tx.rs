use anchor_kernel::tx::decode_checkpoint_tx;
use anchor_kernel::CheckpointProposal;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::hexarg;

pub fn decode(raw: &str) -> anyhow::Result<CheckpointProposal> {
    let bytes = hexarg::parse("tx", raw)?;
    Ok(decode_checkpoint_tx(&bytes)?)
}

pub fn run(raw: &str) -> anyhow::Result<()> {
    let proposal = decode(raw)?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Field", "Value"]);

    table.add_row(vec!["Proposer", &proposal.proposer().to_string()]);
    table.add_row(vec!["Start Block", &proposal.start_block().to_string()]);
    table.add_row(vec!["End Block", &proposal.end_block().to_string()]);
    table.add_row(vec!["Blocks", &proposal.block_count().to_string()]);
    table.add_row(vec!["Root Hash", &proposal.root_hash().to_string()]);

    println!("\nDecoded Checkpoint");
    println!("------------------");
    println!("{table}\n");

    Ok(())
}
