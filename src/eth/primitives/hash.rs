use std::fmt::Display;

use alloy_primitives::B256;
use display_json::DebugAsJson;
use fake::Dummy;
use fake::Faker;

use crate::gen_newtype_from;

/// A 32-byte Keccak-256 digest.
///
/// Ordering compares the raw bytes as an unsigned big-endian number.
#[derive(DebugAsJson, Clone, Copy, Default, Eq, PartialEq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Hash(pub B256);

impl Hash {
    pub const ZERO: Hash = Hash(B256::ZERO);

    /// Creates a hash from the given bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(B256::new(bytes))
    }

    pub fn as_fixed_bytes(&self) -> &[u8; 32] {
        &self.0.0
    }
}

impl Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", const_hex::encode_prefixed(self.0))
    }
}

impl Dummy<Faker> for Hash {
    fn dummy_with_rng<R: rand::Rng + ?Sized>(_: &Faker, rng: &mut R) -> Self {
        Self(B256::random_with(rng))
    }
}

// -----------------------------------------------------------------------------
// Conversions: Other -> Self
// -----------------------------------------------------------------------------
gen_newtype_from!(self = Hash, other = B256, [u8; 32]);

// -----------------------------------------------------------------------------
// Conversions: Self -> Other
// -----------------------------------------------------------------------------

impl From<Hash> for B256 {
    fn from(value: Hash) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_display() {
        let hash = Hash::new([0xffu8; 32]);
        assert_eq!(hash.to_string(), "0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");
        assert_eq!(Hash::ZERO.to_string(), format!("0x{}", "0".repeat(64)));
    }

    #[test]
    fn test_hash_serializes_as_prefixed_hex() {
        let json = serde_json::to_string(&Hash::new([1u8; 32])).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "01".repeat(32)));
    }

    #[test]
    fn test_hash_ordering_is_big_endian() {
        let mut low = [0u8; 32];
        low[31] = 0xff;
        let mut high = [0u8; 32];
        high[0] = 0x01;
        assert!(Hash::new(low) < Hash::new(high));
    }
}
