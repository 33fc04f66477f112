use crate::eth::primitives::Address;
use crate::eth::primitives::BlockNumber;
use crate::eth::primitives::DateTimeNow;
use crate::eth::primitives::SlotIndex;
use crate::eth::primitives::SlotSample;
use crate::eth::probe::ProbeConfig;
use crate::eth::probe::ProbeError;
use crate::eth::probe::ProbeResult;
use crate::eth::probe::SlotReader;
use crate::eth::probe::digest::leaf_hash;
use crate::eth::probe::digest::pair_root;
use crate::infra::BlockchainClient;

/// Minimum chain height required to sample two blocks.
pub const MIN_TIP: u64 = 3;

/// Distance between the two sampled blocks: `tip - SAMPLE_OFFSET` and `tip`.
pub const SAMPLE_OFFSET: u64 = 2;

/// Samples a storage slot at two recent blocks and computes their leaves and pair root.
pub struct SlotProbe<R> {
    reader: R,
    config: ProbeConfig,
}

impl SlotProbe<BlockchainClient> {
    /// Connects to the configured JSON-RPC endpoint and checks it is responsive.
    pub async fn connect(config: ProbeConfig) -> Result<Self, ProbeError> {
        match BlockchainClient::new_http(&config.rpc_url, config.timeout).await {
            Ok(client) => Ok(Self::new(client, config)),
            Err(reason) => Err(ProbeError::Connection {
                url: config.rpc_url,
                reason,
            }),
        }
    }
}

impl<R> SlotProbe<R>
where
    R: SlotReader,
{
    pub fn new(reader: R, config: ProbeConfig) -> Self {
        Self { reader, config }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Samples `index` of `address` at `tip - 2` and `tip`.
    ///
    /// Stops at the first failure and never returns a partial result.
    #[tracing::instrument(name = "probe::run", skip_all, fields(%address, %index))]
    pub async fn run(&self, address: Address, index: SlotIndex) -> Result<ProbeResult, ProbeError> {
        // chain state
        let chain_id = match self.reader.read_chain_id().await {
            Ok(chain_id) => chain_id,
            Err(e) => return Err(ProbeError::retrieval("fetch chain id", e)),
        };
        let tip = match self.reader.read_block_number().await {
            Ok(tip) => tip,
            Err(e) => return Err(ProbeError::retrieval("fetch block number", e)),
        };
        tracing::debug!(%chain_id, %tip, "fetched chain state");

        // sampled blocks
        let (block_a, block_b) = sampled_blocks(tip)?;

        // storage reads
        let read_a = async {
            self.reader
                .read_slot(&address, &index, block_a)
                .await
                .map_err(|e| ProbeError::retrieval("read storage at block A", e))
        };
        let read_b = async {
            self.reader
                .read_slot(&address, &index, block_b)
                .await
                .map_err(|e| ProbeError::retrieval("read storage at block B", e))
        };
        let (value_a, value_b) = futures::try_join!(read_a, read_b)?;

        // digests
        let sample_a = SlotSample::new(chain_id, address, index, block_a, &value_a)?;
        let sample_b = SlotSample::new(chain_id, address, index, block_b, &value_b)?;
        let leaf_a = leaf_hash(&sample_a);
        let leaf_b = leaf_hash(&sample_b);
        let root = pair_root(leaf_a, leaf_b);

        let changed = sample_a.value != sample_b.value;
        tracing::info!(%block_a, %block_b, %changed, pair_root = %root, "probed slot");

        Ok(ProbeResult {
            address,
            slot: index,
            block_a,
            block_b,
            value_a,
            value_b,
            leaf_a,
            leaf_b,
            pair_root: root,
            changed,
            timestamp: DateTimeNow::default(),
            rpc: self.config.rpc_url.clone(),
            chain_id,
        })
    }
}

/// Returns the two blocks to sample, or fails if the chain is too short.
fn sampled_blocks(tip: BlockNumber) -> Result<(BlockNumber, BlockNumber), ProbeError> {
    if tip.as_u64() < MIN_TIP {
        tracing::warn!(%tip, min = MIN_TIP, "chain height too low");
        return Err(ProbeError::Precondition { tip: tip.as_u64() });
    }
    match tip.checked_sub(SAMPLE_OFFSET) {
        Some(block_a) => Ok((block_a, tip)),
        None => Err(ProbeError::Precondition { tip: tip.as_u64() }),
    }
}
