//! Shared infrastructure.

pub mod blockchain_client;
pub mod build_info;
pub mod tracing;

pub use blockchain_client::BlockchainClient;
