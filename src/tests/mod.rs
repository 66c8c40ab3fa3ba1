#[cfg(test)]
// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod checkpoint_tests;
pub mod tx_tests;
