use std::fmt::Display;

use display_json::DebugAsJson;
use fake::Dummy;
use fake::Faker;

use crate::alias::AlloyBytes;
use crate::gen_newtype_from;

/// Raw value of a storage slot exactly as returned by the node.
///
/// Nodes usually return 32 bytes, but shorter values are valid and are left-padded with zeros when encoded.
#[derive(DebugAsJson, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SlotValue(pub AlloyBytes);

impl SlotValue {
    /// Number of bytes of a storage word.
    pub const WORD_LEN: usize = 32;

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for SlotValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", const_hex::encode_prefixed(self.as_bytes()))
    }
}

impl Dummy<Faker> for SlotValue {
    fn dummy_with_rng<R: rand::Rng + ?Sized>(_: &Faker, rng: &mut R) -> Self {
        let len = rng.random_range(0..=Self::WORD_LEN);
        let mut bytes = vec![0u8; len];
        rng.fill_bytes(&mut bytes);
        Self(bytes.into())
    }
}

// -----------------------------------------------------------------------------
// Conversions: Other -> Self
// -----------------------------------------------------------------------------
gen_newtype_from!(self = SlotValue, other = AlloyBytes, Vec<u8>, [u8; 32]);

impl From<&[u8]> for SlotValue {
    fn from(value: &[u8]) -> Self {
        Self(AlloyBytes::copy_from_slice(value))
    }
}
