#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use jsonrpsee::server::RpcModule;
use jsonrpsee::server::Server;
use jsonrpsee::server::ServerHandle;
use jsonrpsee::types::ErrorObjectOwned;
use serde_json::Value as JsonValue;

pub const CLIENT_VERSION: &str = "mock-node/v1.0.0";

/// In-process JSON-RPC node that answers the calls used by the probe.
#[derive(Default)]
pub struct MockNode {
    pub chain_id: u64,
    pub tip: u64,
    pub values: HashMap<u64, String>,
    pub fail_storage: bool,
    pub storage_requests: Mutex<Vec<Vec<JsonValue>>>,
}

impl MockNode {
    pub fn new(chain_id: u64, tip: u64) -> Self {
        Self {
            chain_id,
            tip,
            ..Default::default()
        }
    }

    /// Storage value returned for `block`. Blocks without value return a zeroed word.
    pub fn with_value(mut self, block: u64, value: &str) -> Self {
        self.values.insert(block, value.to_owned());
        self
    }

    pub fn with_failing_storage(mut self) -> Self {
        self.fail_storage = true;
        self
    }

    fn storage_at(&self, params: Vec<JsonValue>) -> Result<String, ErrorObjectOwned> {
        let block = params.get(2).and_then(JsonValue::as_str).and_then(|block| u64::from_str_radix(block.trim_start_matches("0x"), 16).ok());
        self.storage_requests.lock().unwrap().push(params);

        if self.fail_storage {
            return Err(ErrorObjectOwned::owned(-32000, "missing trie node", None::<()>));
        }
        let Some(block) = block else {
            return Err(ErrorObjectOwned::owned(-32602, "invalid block parameter", None::<()>));
        };
        Ok(self.values.get(&block).cloned().unwrap_or_else(|| format!("0x{}", "0".repeat(64))))
    }
}

pub struct MockNodeServer {
    pub url: String,
    pub node: Arc<MockNode>,
    handle: ServerHandle,
}

impl Drop for MockNodeServer {
    fn drop(&mut self) {
        let _ = self.handle.stop();
    }
}

/// Starts a mock node listening on a random local port.
pub async fn start_mock_node(node: MockNode) -> MockNodeServer {
    let node = Arc::new(node);

    let mut module = RpcModule::new(Arc::clone(&node));
    module
        .register_method("web3_clientVersion", |_, _, _| CLIENT_VERSION.to_owned())
        .unwrap();
    module
        .register_method("eth_chainId", |_, node, _| format!("{:#x}", node.chain_id))
        .unwrap();
    module
        .register_method("eth_blockNumber", |_, node, _| format!("{:#x}", node.tip))
        .unwrap();
    module
        .register_method("eth_getStorageAt", |params, node, _| {
            let params: Vec<JsonValue> = params.parse()?;
            node.storage_at(params)
        })
        .unwrap();

    let server = Server::builder().build("127.0.0.1:0").await.unwrap();
    let address = server.local_addr().unwrap();
    let handle = server.start(module);

    MockNodeServer {
        url: format!("http://{address}"),
        node,
        handle,
    }
}
