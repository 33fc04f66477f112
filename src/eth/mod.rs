//! Ethereum layers.

pub mod primitives;
pub mod probe;
