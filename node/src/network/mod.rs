pub mod client;

pub use client::{BroadcastResult, ConsensusClient};
