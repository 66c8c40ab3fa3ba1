// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod api;
pub mod config;
pub mod errors;
pub mod network;
pub mod server;
pub mod telemetry;
