use crate::eth::primitives::Address;
use crate::eth::primitives::BlockNumber;
use crate::eth::primitives::ChainId;
use crate::eth::primitives::SlotIndex;
use crate::eth::primitives::SlotValue;
use crate::eth::probe::EncodingError;
use crate::eth::probe::encoder;

/// A storage slot value observed at a specific block, ready to be hashed into a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSample {
    pub chain_id: ChainId,
    pub address: Address,
    pub index: SlotIndex,
    pub block_number: BlockNumber,

    /// Value left-padded to a full storage word.
    pub value: [u8; 32],
}

impl SlotSample {
    /// Creates a sample from the raw value returned by the node.
    ///
    /// Fails when the raw value is longer than a storage word.
    pub fn new(chain_id: ChainId, address: Address, index: SlotIndex, block_number: BlockNumber, value: &SlotValue) -> Result<Self, EncodingError> {
        Ok(Self {
            chain_id,
            address,
            index,
            block_number,
            value: encoder::pad_value(value.as_bytes())?,
        })
    }
}
