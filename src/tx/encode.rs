//! Checkpoint transaction encoding.

use rlp::RlpStream;

use crate::checkpoint::CheckpointProposal;
use crate::error::CodecError;
use crate::tx::{TxBytes, MSG_CHECKPOINT, TX_VERSION};

pub const TX_ITEMS: usize = 3;
pub const MSG_ITEMS: usize = 4;

/// Upper bound on an encoded checkpoint transaction. The layout is fixed
/// width apart from integer compaction, so anything larger is a bug.
pub const MAX_TX_LEN: usize = 128;

pub fn encode_checkpoint_tx(proposal: &CheckpointProposal) -> Result<TxBytes, CodecError> {
    let mut stream = RlpStream::new_list(TX_ITEMS);
    stream.append(&TX_VERSION);
    stream.append(&MSG_CHECKPOINT);

    stream.begin_list(MSG_ITEMS);
    stream.append(&proposal.proposer().as_bytes().to_vec());
    stream.append(&proposal.start_block());
    stream.append(&proposal.end_block());
    stream.append(&proposal.root_hash().as_bytes().to_vec());

    let out = stream.out().to_vec();
    if out.len() > MAX_TX_LEN {
        return Err(CodecError::Encode(format!(
            "encoded length {} exceeds {}",
            out.len(),
            MAX_TX_LEN
        )));
    }

    Ok(TxBytes::from(out))
}
