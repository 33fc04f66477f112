use std::time::Duration;

use async_trait::async_trait;
use jsonrpsee::core::client::ClientT;
use jsonrpsee::http_client::HttpClient;
use jsonrpsee::http_client::HttpClientBuilder;

use crate::alias::JsonValue;
use crate::eth::primitives::Address;
use crate::eth::primitives::BlockNumber;
use crate::eth::primitives::ChainId;
use crate::eth::primitives::SlotIndex;
use crate::eth::primitives::SlotValue;
use crate::eth::probe::SlotReader;
use crate::ext::DisplayExt;
use crate::ext::to_json_value;
use crate::log_and_err;

/// JSON-RPC client for an Ethereum-compatible node.
#[derive(Debug)]
pub struct BlockchainClient {
    http: HttpClient,
    pub http_url: String,
}

impl BlockchainClient {
    /// Creates a new RPC client connected to HTTP and checks the node answers.
    pub async fn new_http(http_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        tracing::info!(%http_url, timeout = %timeout.to_string_ext(), "creating blockchain client");

        let http = match HttpClientBuilder::default().request_timeout(timeout).build(http_url) {
            Ok(http) => http,
            Err(e) => return log_and_err!(reason = e, "failed to create blockchain http client"),
        };
        let client = Self {
            http,
            http_url: http_url.to_owned(),
        };

        // a node that does not answer is a connection failure, not a retrieval failure
        let version = client.fetch_client_version().await?;
        tracing::info!(%http_url, %version, "connected to blockchain node");

        Ok(client)
    }

    // -------------------------------------------------------------------------
    // RPC queries
    // -------------------------------------------------------------------------

    /// Fetches the node client version. Used as health check.
    pub async fn fetch_client_version(&self) -> anyhow::Result<String> {
        tracing::debug!("fetching client version");

        let result = self.http.request::<String, Vec<()>>("web3_clientVersion", vec![]).await;
        match result {
            Ok(version) => Ok(version),
            Err(e) => log_and_err!(reason = e, "failed to fetch client version"),
        }
    }

    /// Fetches the chain id.
    pub async fn fetch_chain_id(&self) -> anyhow::Result<ChainId> {
        tracing::debug!("fetching chain id");

        let result = self.http.request::<ChainId, Vec<()>>("eth_chainId", vec![]).await;
        match result {
            Ok(chain_id) => Ok(chain_id),
            Err(e) => log_and_err!(reason = e, "failed to fetch chain id"),
        }
    }

    /// Fetches the current block number.
    pub async fn fetch_block_number(&self) -> anyhow::Result<BlockNumber> {
        tracing::debug!("fetching block number");

        let result = self.http.request::<BlockNumber, Vec<()>>("eth_blockNumber", vec![]).await;
        match result {
            Ok(number) => Ok(number),
            Err(e) => log_and_err!(reason = e, "failed to fetch current block number"),
        }
    }

    /// Fetches a storage slot value at a specific block.
    pub async fn fetch_storage_at(&self, address: &Address, index: &SlotIndex, block_number: BlockNumber) -> anyhow::Result<SlotValue> {
        tracing::debug!(%address, %index, %block_number, "fetching storage slot");

        let params = vec![to_json_value(address), to_json_value(index), to_json_value(block_number)];
        let result = self.http.request::<SlotValue, Vec<JsonValue>>("eth_getStorageAt", params.clone()).await;

        match result {
            Ok(value) => Ok(value),
            Err(e) => log_and_err!(reason = e, payload = params, "failed to fetch storage slot"),
        }
    }
}

#[async_trait]
impl SlotReader for BlockchainClient {
    async fn read_chain_id(&self) -> anyhow::Result<ChainId> {
        self.fetch_chain_id().await
    }

    async fn read_block_number(&self) -> anyhow::Result<BlockNumber> {
        self.fetch_block_number().await
    }

    async fn read_slot(&self, address: &Address, index: &SlotIndex, block_number: BlockNumber) -> anyhow::Result<SlotValue> {
        self.fetch_storage_at(address, index, block_number).await
    }
}
