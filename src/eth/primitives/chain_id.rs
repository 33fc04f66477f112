use alloy_primitives::U64;
use display_json::DebugAsJson;
use fake::Dummy;
use fake::Faker;

/// Identifier of the network the probed contract lives in.
#[derive(DebugAsJson, derive_more::Display, Clone, Copy, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub U64);

impl ChainId {
    pub fn as_u64(&self) -> u64 {
        self.0.to::<u64>()
    }
}

impl Dummy<Faker> for ChainId {
    fn dummy_with_rng<R: rand::Rng + ?Sized>(_: &Faker, rng: &mut R) -> Self {
        rng.next_u64().into()
    }
}

// -----------------------------------------------------------------------------
// Conversions: Other -> Self
// -----------------------------------------------------------------------------

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        Self(U64::from(value))
    }
}

// -----------------------------------------------------------------------------
// Conversions: Self -> Other
// -----------------------------------------------------------------------------

impl From<ChainId> for u64 {
    fn from(value: ChainId) -> Self {
        value.as_u64()
    }
}

impl From<ChainId> for [u8; 8] {
    fn from(value: ChainId) -> Self {
        value.as_u64().to_be_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_rpc_quantity() {
        let chain_id: ChainId = serde_json::from_str("\"0x7d9\"").unwrap();
        assert_eq!(u64::from(chain_id), 2009);
        assert_eq!(chain_id.to_string(), "2009");
    }

    #[test]
    fn test_big_endian_bytes() {
        let bytes: [u8; 8] = ChainId::from(1u64).into();
        assert_eq!(bytes, [0, 0, 0, 0, 0, 0, 0, 1]);
    }
}
