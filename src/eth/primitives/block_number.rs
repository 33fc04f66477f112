use alloy_primitives::U64;
use display_json::DebugAsJson;
use fake::Dummy;
use fake::Faker;

#[derive(DebugAsJson, derive_more::Display, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct BlockNumber(pub U64);

impl BlockNumber {
    pub const ZERO: BlockNumber = BlockNumber(U64::ZERO);
    pub const ONE: BlockNumber = BlockNumber(U64::ONE);

    /// Returns the block number `count` blocks before this one, or `None` if it would be before genesis.
    pub fn checked_sub(&self, count: u64) -> Option<Self> {
        self.0.checked_sub(U64::from(count)).map(Self)
    }

    pub fn as_u64(&self) -> u64 {
        self.0.to::<u64>()
    }
}

impl Dummy<Faker> for BlockNumber {
    fn dummy_with_rng<R: rand::Rng + ?Sized>(_: &Faker, rng: &mut R) -> Self {
        rng.next_u64().into()
    }
}

// -----------------------------------------------------------------------------
// Conversions: Other -> Self
// -----------------------------------------------------------------------------

impl From<u64> for BlockNumber {
    fn from(value: u64) -> Self {
        Self(U64::from(value))
    }
}

impl From<U64> for BlockNumber {
    fn from(value: U64) -> Self {
        Self(value)
    }
}

// -----------------------------------------------------------------------------
// Conversions: Self -> Other
// -----------------------------------------------------------------------------

impl From<BlockNumber> for U64 {
    fn from(block_number: BlockNumber) -> Self {
        block_number.0
    }
}

impl From<BlockNumber> for u64 {
    fn from(block_number: BlockNumber) -> Self {
        block_number.as_u64()
    }
}

impl From<BlockNumber> for [u8; 8] {
    fn from(block_number: BlockNumber) -> Self {
        block_number.as_u64().to_be_bytes()
    }
}
