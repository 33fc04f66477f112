//! Fixed layout binary encoding of slot samples.
//!
//! A sample is encoded into exactly [`LEAF_PREIMAGE_LEN`] bytes:
//!
//! | offset | len | field        | encoding                       |
//! |-------:|----:|--------------|--------------------------------|
//! | 0      | 8   | chain id     | u64 big-endian                 |
//! | 8      | 20  | address      | raw bytes                      |
//! | 28     | 32  | slot         | u256 big-endian                |
//! | 60     | 8   | block number | u64 big-endian                 |
//! | 68     | 32  | value        | left-padded with zero bytes    |
//!
//! There are no prefixes or separators. Any change here changes every leaf.

use crate::eth::primitives::Address;
use crate::eth::primitives::SlotSample;
use crate::eth::probe::EncodingError;

pub const CHAIN_ID_LEN: usize = 8;
pub const BLOCK_NUMBER_LEN: usize = 8;
pub const WORD_LEN: usize = 32;

/// Total length of an encoded sample.
pub const LEAF_PREIMAGE_LEN: usize = CHAIN_ID_LEN + Address::LEN + WORD_LEN + BLOCK_NUMBER_LEN + WORD_LEN;

const ADDRESS_OFFSET: usize = CHAIN_ID_LEN;
const SLOT_OFFSET: usize = ADDRESS_OFFSET + Address::LEN;
const BLOCK_NUMBER_OFFSET: usize = SLOT_OFFSET + WORD_LEN;
const VALUE_OFFSET: usize = BLOCK_NUMBER_OFFSET + BLOCK_NUMBER_LEN;

/// Right-justifies a raw storage value into a 32-byte word.
pub fn pad_value(raw: &[u8]) -> Result<[u8; WORD_LEN], EncodingError> {
    if raw.len() > WORD_LEN {
        return Err(EncodingError::ValueTooLong { len: raw.len() });
    }

    let mut word = [0u8; WORD_LEN];
    word[WORD_LEN - raw.len()..].copy_from_slice(raw);
    Ok(word)
}

/// Encodes a sample into its leaf preimage.
pub fn encode_sample(sample: &SlotSample) -> [u8; LEAF_PREIMAGE_LEN] {
    let chain_id: [u8; CHAIN_ID_LEN] = sample.chain_id.into();
    let slot: [u8; WORD_LEN] = sample.index.into();
    let block_number: [u8; BLOCK_NUMBER_LEN] = sample.block_number.into();

    let mut buf = [0u8; LEAF_PREIMAGE_LEN];
    buf[..ADDRESS_OFFSET].copy_from_slice(&chain_id);
    buf[ADDRESS_OFFSET..SLOT_OFFSET].copy_from_slice(sample.address.as_bytes());
    buf[SLOT_OFFSET..BLOCK_NUMBER_OFFSET].copy_from_slice(&slot);
    buf[BLOCK_NUMBER_OFFSET..VALUE_OFFSET].copy_from_slice(&block_number);
    buf[VALUE_OFFSET..].copy_from_slice(&sample.value);
    buf
}
