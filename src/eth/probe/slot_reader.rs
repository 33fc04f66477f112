use async_trait::async_trait;

use crate::eth::primitives::Address;
use crate::eth::primitives::BlockNumber;
use crate::eth::primitives::ChainId;
use crate::eth::primitives::SlotIndex;
use crate::eth::primitives::SlotValue;

/// Chain reads the probe depends on.
///
/// Implementations log their own failures; the probe maps them into [`ProbeError::Retrieval`](crate::eth::probe::ProbeError::Retrieval).
#[async_trait]
pub trait SlotReader: Send + Sync {
    /// Identifier of the chain the reader is connected to.
    async fn read_chain_id(&self) -> anyhow::Result<ChainId>;

    /// Latest block number known by the node.
    async fn read_block_number(&self) -> anyhow::Result<BlockNumber>;

    /// Raw storage value at `address` and `index` as of `block_number`.
    async fn read_slot(&self, address: &Address, index: &SlotIndex, block_number: BlockNumber) -> anyhow::Result<SlotValue>;
}
