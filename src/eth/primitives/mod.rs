//! Ethereum primitives used by the probe.

mod address;
mod block_number;
mod chain_id;
mod hash;
mod now;
mod slot_index;
mod slot_sample;
mod slot_value;

pub use address::Address;
pub use block_number::BlockNumber;
pub use chain_id::ChainId;
pub use hash::Hash;
pub use now::DATE_TIME_FORMAT;
pub use now::DateTimeNow;
pub use slot_index::SlotIndex;
pub use slot_sample::SlotSample;
pub use slot_value::SlotValue;
