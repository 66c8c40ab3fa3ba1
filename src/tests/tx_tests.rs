use rlp::RlpStream;

use crate::checkpoint::CheckpointProposal;
use crate::error::{CodecError, ValidationError};
use crate::tx::{decode_checkpoint_tx, encode_checkpoint_tx, RlpEncoder, TransactionEncoder};
use crate::types::{Address, Hash32};

fn sample() -> CheckpointProposal {
    CheckpointProposal::new(Hash32([0x22; 32]), 0, 1, Address([0x11; 20])).unwrap()
}

/// Builds a transaction by hand so malformed variants can be produced.
fn raw_tx(version: u64, msg_type: u64, fields: &[Vec<u8>]) -> Vec<u8> {
    let mut s = RlpStream::new_list(3);
    s.append(&version);
    s.append(&msg_type);
    s.begin_list(fields.len());
    for f in fields {
        s.append(f);
    }
    s.out().to_vec()
}

#[test]
fn test_encoding_is_deterministic() {
    let p = sample();
    let a = encode_checkpoint_tx(&p).unwrap();
    let b = encode_checkpoint_tx(&p).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.tx_id(), b.tx_id());

    let via_trait = RlpEncoder.encode(&p).unwrap();
    assert_eq!(a, via_trait);
}

#[test]
fn test_golden_layout() {
    let bytes = encode_checkpoint_tx(&sample()).unwrap();

    let mut expected = vec![0xf8, 0x3c, 0x01, 0x01, 0xf8, 0x38, 0x94];
    expected.extend_from_slice(&[0x11; 20]);
    expected.extend_from_slice(&[0x80, 0x01, 0xa0]);
    expected.extend_from_slice(&[0x22; 32]);

    assert_eq!(bytes.as_bytes(), expected.as_slice(), "encoding drift");
    assert_eq!(bytes.len(), 62);
    assert!(bytes.to_hex().starts_with("0xf83c0101f83894"));
}

#[test]
fn test_distinct_proposals_distinct_bytes() {
    let a = encode_checkpoint_tx(&sample()).unwrap();
    let other = CheckpointProposal::new(Hash32([0x22; 32]), 0, 2, Address([0x11; 20])).unwrap();
    let b = encode_checkpoint_tx(&other).unwrap();
    assert_ne!(a, b);
    assert_ne!(a.tx_id(), b.tx_id());
}

#[test]
fn test_roundtrip_recovers_fields() {
    let p = CheckpointProposal::new(
        Hash32([0xab; 32]),
        1_000_000,
        1_000_255,
        Address([0xcd; 20]),
    )
    .unwrap();

    let bytes = encode_checkpoint_tx(&p).unwrap();
    let decoded = decode_checkpoint_tx(bytes.as_bytes()).unwrap();

    assert_eq!(decoded.start_block(), 1_000_000);
    assert_eq!(decoded.end_block(), 1_000_255);
    assert_eq!(decoded.root_hash(), &Hash32([0xab; 32]));
    assert_eq!(decoded.proposer(), &Address([0xcd; 20]));
    assert_eq!(decoded, p);
}

#[test]
fn test_empty_input_rejected() {
    assert_eq!(decode_checkpoint_tx(&[]), Err(CodecError::Empty));
}

#[test]
fn test_trailing_bytes_rejected() {
    let mut bytes = encode_checkpoint_tx(&sample()).unwrap().as_bytes().to_vec();
    bytes.push(0x00);
    assert_eq!(decode_checkpoint_tx(&bytes), Err(CodecError::TrailingBytes(1)));
}

#[test]
fn test_truncated_input_rejected() {
    let bytes = encode_checkpoint_tx(&sample()).unwrap().as_bytes().to_vec();
    let res = decode_checkpoint_tx(&bytes[..bytes.len() - 1]);
    assert!(matches!(res, Err(CodecError::Rlp(_))), "got {res:?}");
}

#[test]
fn test_unknown_version_and_message_rejected() {
    let fields = vec![vec![0x11; 20], vec![], vec![0x01], vec![0x22; 32]];

    let res = decode_checkpoint_tx(&raw_tx(2, 1, &fields));
    assert_eq!(res, Err(CodecError::UnsupportedVersion(2)));

    let res = decode_checkpoint_tx(&raw_tx(1, 9, &fields));
    assert_eq!(res, Err(CodecError::UnknownMessage(9)));
}

#[test]
fn test_non_canonical_integer_rejected() {
    // start_block = 5 written with a leading zero byte
    let fields = vec![vec![0x11; 20], vec![0x00, 0x05], vec![0x09], vec![0x22; 32]];
    let res = decode_checkpoint_tx(&raw_tx(1, 1, &fields));
    assert!(matches!(res, Err(CodecError::Rlp(_))), "got {res:?}");
}

#[test]
fn test_wrong_field_width_rejected() {
    let fields = vec![vec![0x11; 19], vec![], vec![0x01], vec![0x22; 32]];
    let res = decode_checkpoint_tx(&raw_tx(1, 1, &fields));
    assert_eq!(
        res,
        Err(CodecError::FieldWidth { field: "proposer", expected: 20, found: 19 })
    );

    let fields = vec![vec![0x11; 20], vec![], vec![0x01], vec![0x22; 31]];
    let res = decode_checkpoint_tx(&raw_tx(1, 1, &fields));
    assert!(matches!(res, Err(CodecError::FieldWidth { field: "root_hash", .. })));
}

#[test]
fn test_wrong_arity_rejected() {
    let fields = vec![vec![0x11; 20], vec![], vec![0x01]];
    let res = decode_checkpoint_tx(&raw_tx(1, 1, &fields));
    assert_eq!(
        res,
        Err(CodecError::Arity { what: "checkpoint message", expected: 4, found: 3 })
    );
}

#[test]
fn test_decoded_range_is_validated() {
    let fields = vec![vec![0x11; 20], vec![0x09], vec![0x05], vec![0x22; 32]];
    let res = decode_checkpoint_tx(&raw_tx(1, 1, &fields));
    assert_eq!(
        res,
        Err(CodecError::Invalid(ValidationError::BlockRange { start: 9, end: 5 }))
    );
}
