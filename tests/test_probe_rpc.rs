mod common;

use std::time::Duration;

use common::MockNode;
use common::start_mock_node;
use hex_literal::hex;
use serde_json::json;
use slot_probe::eth::primitives::Address;
use slot_probe::eth::primitives::BlockNumber;
use slot_probe::eth::primitives::ChainId;
use slot_probe::eth::primitives::SlotIndex;
use slot_probe::eth::probe::ExitStatus;
use slot_probe::eth::probe::ProbeConfig;
use slot_probe::eth::probe::ProbeError;
use slot_probe::eth::probe::SlotProbe;
use slot_probe::eth::probe::digest::pair_root;
use slot_probe::infra::BlockchainClient;

const ADDRESS: [u8; 20] = hex!("0000000000000000000000000000000000000001");

fn config(url: &str) -> ProbeConfig {
    ProbeConfig {
        rpc_url: url.to_owned(),
        timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn test_probe_against_rpc_node() {
    let server = start_mock_node(
        MockNode::new(1, 102)
            .with_value(100, "0x0000000000000000000000000000000000000000000000000000000000000000")
            .with_value(102, "0x0000000000000000000000000000000000000000000000000000000000000001"),
    )
    .await;

    let probe = SlotProbe::connect(config(&server.url)).await.unwrap();
    let result = probe.run(Address::new(ADDRESS), SlotIndex::ZERO).await.unwrap();

    assert_eq!(result.chain_id, ChainId::from(1));
    assert_eq!(result.block_a, BlockNumber::from(100u64));
    assert_eq!(result.block_b, BlockNumber::from(102u64));
    assert_eq!(result.value_b.as_bytes()[31], 1);
    assert_eq!(result.pair_root, pair_root(result.leaf_b, result.leaf_a));
    assert!(result.changed);
    assert_eq!(result.rpc, server.url);

    // wire format of storage reads
    let mut requests = server.node.storage_requests.lock().unwrap().clone();
    requests.sort_by_key(|params| params[2].as_str().map(str::to_owned));
    assert_eq!(
        requests,
        vec![
            vec![json!("0x0000000000000000000000000000000000000001"), json!("0x0"), json!("0x64")],
            vec![json!("0x0000000000000000000000000000000000000001"), json!("0x0"), json!("0x66")],
        ]
    );
}

#[tokio::test]
async fn test_probe_low_tip() {
    let server = start_mock_node(MockNode::new(1, 2)).await;

    let probe = SlotProbe::connect(config(&server.url)).await.unwrap();
    let e = probe.run(Address::new(ADDRESS), SlotIndex::ZERO).await.unwrap_err();

    assert!(matches!(e, ProbeError::Precondition { tip: 2 }));
    assert_eq!(e.exit_code(), 3);
    assert!(server.node.storage_requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_probe_storage_failure() {
    let server = start_mock_node(MockNode::new(1, 10).with_failing_storage()).await;

    let probe = SlotProbe::connect(config(&server.url)).await.unwrap();
    let e = probe.run(Address::new(ADDRESS), SlotIndex::from(5u64)).await.unwrap_err();

    assert!(matches!(e, ProbeError::Retrieval { .. }));
    assert_eq!(e.exit_code(), 4);
    assert!(e.to_string().contains("failed to fetch storage slot"));
}

#[tokio::test]
async fn test_probe_unreachable_endpoint() {
    let Err(e) = SlotProbe::connect(config("http://127.0.0.1:1")).await else {
        panic!("connection should fail");
    };

    assert!(matches!(e, ProbeError::Connection { .. }));
    assert_eq!(e.exit_code(), 1);
}

#[tokio::test]
async fn test_blockchain_client_queries() {
    let server = start_mock_node(MockNode::new(2009, 42).with_value(42, "0xdeadbeef")).await;

    let client = BlockchainClient::new_http(&server.url, Duration::from_secs(5)).await.unwrap();

    assert_eq!(client.fetch_client_version().await.unwrap(), common::CLIENT_VERSION);
    assert_eq!(client.fetch_chain_id().await.unwrap(), ChainId::from(2009));
    assert_eq!(client.fetch_block_number().await.unwrap(), BlockNumber::from(42u64));

    let value = client
        .fetch_storage_at(&Address::new(ADDRESS), &SlotIndex::ZERO, BlockNumber::from(42u64))
        .await
        .unwrap();
    assert_eq!(value.as_bytes(), hex!("deadbeef"));
}
