use std::fmt::Write;

use serde_with::DisplayFromStr;
use serde_with::FromInto;
use serde_with::serde_as;

use crate::eth::primitives::Address;
use crate::eth::primitives::BlockNumber;
use crate::eth::primitives::ChainId;
use crate::eth::primitives::DateTimeNow;
use crate::eth::primitives::Hash;
use crate::eth::primitives::SlotIndex;
use crate::eth::primitives::SlotValue;
use crate::ext::InfallibleExt;

/// Outcome of one probe invocation.
///
/// Serializes with stable camelCase field names and order, hashes and values as `0x` hex, and block numbers and chain
/// id as plain integers.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResult {
    #[serde_as(as = "DisplayFromStr")]
    pub address: Address,

    #[serde(rename = "slotHex")]
    #[serde_as(as = "DisplayFromStr")]
    pub slot: SlotIndex,

    #[serde_as(as = "FromInto<u64>")]
    pub block_a: BlockNumber,

    #[serde_as(as = "FromInto<u64>")]
    pub block_b: BlockNumber,

    #[serde_as(as = "DisplayFromStr")]
    pub value_a: SlotValue,

    #[serde_as(as = "DisplayFromStr")]
    pub value_b: SlotValue,

    #[serde_as(as = "DisplayFromStr")]
    pub leaf_a: Hash,

    #[serde_as(as = "DisplayFromStr")]
    pub leaf_b: Hash,

    #[serde_as(as = "DisplayFromStr")]
    pub pair_root: Hash,

    /// Whether the padded values differ between both blocks.
    pub changed: bool,

    #[serde_as(as = "DisplayFromStr")]
    pub timestamp: DateTimeNow,

    pub rpc: String,

    #[serde_as(as = "FromInto<u64>")]
    pub chain_id: ChainId,
}

impl ProbeResult {
    /// Human readable report.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out).expect_infallible();
        out
    }

    fn write_text(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "📦 Slot Soundness Probe")?;
        writeln!(out, "Address: {}", self.address)?;
        writeln!(out, "Slot:    {}", self.slot)?;
        writeln!(out)?;
        writeln!(out, "BlockA={}  ValueA={}", self.block_a, self.value_a)?;
        writeln!(out, "BlockB={}  ValueB={}", self.block_b, self.value_b)?;
        writeln!(out)?;
        writeln!(out, "LeafA: {}", self.leaf_a)?;
        writeln!(out, "LeafB: {}", self.leaf_b)?;
        writeln!(out, "Pair Root: {}", self.pair_root)?;
        writeln!(out, "Changed: {}", if self.changed { "YES" } else { "NO" })?;
        writeln!(out, "Timestamp: {}", self.timestamp)?;
        writeln!(out, "RPC: {}", self.rpc)?;
        writeln!(out, "ChainId: {}", self.chain_id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;
    use hex_literal::hex;

    use super::*;
    use crate::ext::to_json_string_pretty;
    use crate::ext::to_json_value;

    fn result() -> ProbeResult {
        let Some(timestamp) = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).single() else {
            panic!("invalid date");
        };
        ProbeResult {
            address: Address::new(hex!("0000000000000000000000000000000000000001")),
            slot: SlotIndex::from(10u64),
            block_a: BlockNumber::from(100u64),
            block_b: BlockNumber::from(102u64),
            value_a: SlotValue::from(hex!("00").as_slice()),
            value_b: SlotValue::from(hex!("01").as_slice()),
            leaf_a: Hash::new([0xaa; 32]),
            leaf_b: Hash::new([0xbb; 32]),
            pair_root: Hash::new([0xcc; 32]),
            changed: true,
            timestamp: timestamp.into(),
            rpc: "http://localhost:8545".into(),
            chain_id: ChainId::from(1),
        }
    }

    #[test]
    fn test_json_fields() {
        let json = to_json_value(result());

        assert_eq!(json["address"], "0x0000000000000000000000000000000000000001");
        assert_eq!(json["slotHex"], "0xa");
        assert_eq!(json["blockA"], 100);
        assert_eq!(json["blockB"], 102);
        assert_eq!(json["valueA"], "0x00");
        assert_eq!(json["valueB"], "0x01");
        assert_eq!(json["leafA"], format!("0x{}", "aa".repeat(32)));
        assert_eq!(json["pairRoot"], format!("0x{}", "cc".repeat(32)));
        assert_eq!(json["changed"], true);
        assert_eq!(json["timestamp"], "2024-05-01 12:30:00");
        assert_eq!(json["rpc"], "http://localhost:8545");
        assert_eq!(json["chainId"], 1);
    }

    #[test]
    fn test_json_field_order() {
        let json = to_json_string_pretty(&result());

        let keys: Vec<&str> = json
            .lines()
            .filter_map(|line| line.trim().strip_prefix('"'))
            .filter_map(|line| line.split('"').next())
            .collect();
        assert_eq!(
            keys,
            vec![
                "address", "slotHex", "blockA", "blockB", "valueA", "valueB", "leafA", "leafB", "pairRoot", "changed", "timestamp", "rpc", "chainId"
            ]
        );
        assert!(json.starts_with("{\n  \"address\""));
    }

    #[test]
    fn test_text_report() {
        let text = result().to_text();
        let expected = format!(
            "📦 Slot Soundness Probe\n\
             Address: 0x0000000000000000000000000000000000000001\n\
             Slot:    0xa\n\
             \n\
             BlockA=100  ValueA=0x00\n\
             BlockB=102  ValueB=0x01\n\
             \n\
             LeafA: 0x{}\n\
             LeafB: 0x{}\n\
             Pair Root: 0x{}\n\
             Changed: YES\n\
             Timestamp: 2024-05-01 12:30:00\n\
             RPC: http://localhost:8545\n\
             ChainId: 1\n",
            "aa".repeat(32),
            "bb".repeat(32),
            "cc".repeat(32)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_text_report_unchanged() {
        let mut result = result();
        result.changed = false;
        assert!(result.to_text().contains("Changed: NO\n"));
    }
}
