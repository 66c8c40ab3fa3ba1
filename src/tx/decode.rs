//! Checkpoint transaction decoding.

use rlp::{DecoderError, Rlp};

use crate::checkpoint::CheckpointProposal;
use crate::error::CodecError;
use crate::tx::encode::{MSG_ITEMS, TX_ITEMS};
use crate::tx::{MSG_CHECKPOINT, TX_VERSION};
use crate::types::{Address, Hash32, ADDRESS_LEN, HASH_LEN};

/// Strict inverse of [`encode_checkpoint_tx`](crate::tx::encode_checkpoint_tx).
///
/// Rejects trailing bytes, wrong arity, unknown version or message type,
/// wrong field widths and non-canonical integers.
pub fn decode_checkpoint_tx(bytes: &[u8]) -> Result<CheckpointProposal, CodecError> {
    if bytes.is_empty() {
        return Err(CodecError::Empty);
    }

    let rlp = Rlp::new(bytes);
    let total = rlp.payload_info()?.total();
    if total > bytes.len() {
        return Err(DecoderError::RlpIsTooShort.into());
    }
    if total < bytes.len() {
        return Err(CodecError::TrailingBytes(bytes.len() - total));
    }

    expect_list(&rlp, "transaction", TX_ITEMS)?;

    let version: u64 = rlp.val_at(0)?;
    if version != TX_VERSION {
        return Err(CodecError::UnsupportedVersion(version));
    }
    let msg_type: u64 = rlp.val_at(1)?;
    if msg_type != MSG_CHECKPOINT {
        return Err(CodecError::UnknownMessage(msg_type));
    }

    let msg = rlp.at(2)?;
    expect_list(&msg, "checkpoint message", MSG_ITEMS)?;

    let proposer = Address(read_fixed::<ADDRESS_LEN>(&msg, 0, "proposer")?);
    let start_block: u64 = msg.val_at(1)?;
    let end_block: u64 = msg.val_at(2)?;
    let root_hash = Hash32(read_fixed::<HASH_LEN>(&msg, 3, "root_hash")?);

    Ok(CheckpointProposal::new(root_hash, start_block, end_block, proposer)?)
}

fn expect_list(rlp: &Rlp<'_>, what: &'static str, expected: usize) -> Result<(), CodecError> {
    if !rlp.is_list() {
        return Err(DecoderError::RlpExpectedToBeList.into());
    }
    let found = rlp.item_count()?;
    if found != expected {
        return Err(CodecError::Arity {
            what,
            expected,
            found,
        });
    }
    Ok(())
}

fn read_fixed<const N: usize>(
    rlp: &Rlp<'_>,
    index: usize,
    field: &'static str,
) -> Result<[u8; N], CodecError> {
    let raw: Vec<u8> = rlp.val_at(index)?;
    raw.as_slice().try_into().map_err(|_| CodecError::FieldWidth {
        field,
        expected: N,
        found: raw.len(),
    })
}
