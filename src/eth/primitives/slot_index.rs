use std::fmt::Debug;
use std::fmt::Display;
use std::str::FromStr;

use alloy_primitives::U256;
use fake::Dummy;
use fake::Faker;

use crate::eth::probe::ValidationError;
use crate::ext::not;
use crate::gen_newtype_from;

/// Position of a storage cell inside a contract storage.
#[derive(Clone, Copy, Default, Hash, Eq, PartialEq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SlotIndex(pub U256);

impl SlotIndex {
    pub const ZERO: SlotIndex = SlotIndex(U256::ZERO);

    /// Returns the index as 32 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes::<32>()
    }
}

impl Dummy<Faker> for SlotIndex {
    fn dummy_with_rng<R: rand::Rng + ?Sized>(_: &Faker, rng: &mut R) -> Self {
        Self(U256::random_with(rng))
    }
}

impl Display for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl Debug for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SlotIndex({:#x})", self.0)
    }
}

// -----------------------------------------------------------------------------
// Conversions: Other -> Self
// -----------------------------------------------------------------------------

gen_newtype_from!(self = SlotIndex, other = U256);

impl From<u64> for SlotIndex {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

/// Parses a slot written as a decimal, `0x` hexadecimal, `0o` octal or `0b` binary integer.
///
/// Values that do not fit in 256 bits are rejected instead of truncated.
impl FromStr for SlotIndex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let lowercase = input.to_ascii_lowercase();
        let (digits, radix) = if let Some(digits) = lowercase.strip_prefix("0x") {
            (digits, 16)
        } else if let Some(digits) = lowercase.strip_prefix("0o") {
            (digits, 8)
        } else if let Some(digits) = lowercase.strip_prefix("0b") {
            (digits, 2)
        } else {
            (lowercase.as_str(), 10)
        };

        if digits.is_empty() || not(digits.chars().all(|c| c.is_digit(radix))) {
            return Err(ValidationError::SlotInvalid { input: s.to_owned() });
        }

        // leading zeros make a decimal ambiguous with octal, unless the number is zero
        if radix == 10 && digits.starts_with('0') && digits.chars().any(|c| c != '0') {
            return Err(ValidationError::SlotInvalid { input: s.to_owned() });
        }

        match U256::from_str_radix(digits, radix as u64) {
            Ok(value) => Ok(Self(value)),
            // digits were validated above, so the only remaining failure is overflow
            Err(e) => {
                tracing::warn!(reason = ?e, value = %s, "slot does not fit in 256 bits");
                Err(ValidationError::SlotOverflow { input: s.to_owned() })
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions: Self -> Other
// -----------------------------------------------------------------------------
impl From<SlotIndex> for [u8; 32] {
    fn from(value: SlotIndex) -> [u8; 32] {
        value.to_be_bytes()
    }
}

impl From<SlotIndex> for U256 {
    fn from(value: SlotIndex) -> U256 {
        value.0
    }
}
