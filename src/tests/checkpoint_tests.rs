use crate::checkpoint::CheckpointProposal;
use crate::error::ValidationError;
use crate::types::{Address, Hash32};

fn root() -> String {
    format!("0x{}", "bb".repeat(32))
}

fn proposer() -> String {
    format!("0x{}", "dd".repeat(20))
}

#[test]
fn test_from_raw_valid() {
    let p = CheckpointProposal::from_raw(&root(), 100, 255, &proposer()).unwrap();
    assert_eq!(p.start_block(), 100);
    assert_eq!(p.end_block(), 255);
    assert_eq!(p.root_hash(), &Hash32([0xbb; 32]));
    assert_eq!(p.proposer(), &Address([0xdd; 20]));
    assert_eq!(p.block_count(), 156);
}

#[test]
fn test_single_block_checkpoint_is_valid() {
    let p = CheckpointProposal::from_raw(&root(), 7, 7, &proposer()).unwrap();
    assert_eq!(p.block_count(), 1);
}

#[test]
fn test_inverted_range_rejected() {
    let err = CheckpointProposal::from_raw(&root(), 8, 7, &proposer()).unwrap_err();
    assert_eq!(err, ValidationError::BlockRange { start: 8, end: 7 });

    let err = CheckpointProposal::new(Hash32::default(), 1, 0, Address::default()).unwrap_err();
    assert!(matches!(err, ValidationError::BlockRange { .. }));
}

#[test]
fn test_negative_bounds_name_their_field() {
    let err = CheckpointProposal::from_raw(&root(), -1, 10, &proposer()).unwrap_err();
    assert_eq!(err.field(), "start_block");
    assert_eq!(
        err,
        ValidationError::NegativeBlock { field: "start_block", value: -1 }
    );

    let err = CheckpointProposal::from_raw(&root(), 0, -5, &proposer()).unwrap_err();
    assert_eq!(err.field(), "end_block");
}

#[test]
fn test_bad_hash_and_address_name_their_field() {
    let err = CheckpointProposal::from_raw("0x1234", 0, 1, &proposer()).unwrap_err();
    assert_eq!(err.field(), "root_hash");
    assert!(err.to_string().starts_with("root_hash: invalid hash"));

    let err = CheckpointProposal::from_raw(&root(), 0, 1, "not-an-address").unwrap_err();
    assert_eq!(err.field(), "proposer_address");
    assert!(matches!(err, ValidationError::Address { .. }));
}

#[test]
fn test_hash_checked_before_address() {
    // both fields invalid: the hash is reported first
    let err = CheckpointProposal::from_raw("", 0, 1, "").unwrap_err();
    assert_eq!(err.field(), "root_hash");
}

#[test]
fn test_full_u64_range_block_count_saturates() {
    let p = CheckpointProposal::new(Hash32::default(), 0, u64::MAX, Address::default()).unwrap();
    assert_eq!(p.block_count(), u64::MAX);
}
