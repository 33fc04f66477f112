use std::fmt::Display;
use std::str::FromStr;

use alloy_primitives::FixedBytes;
use display_json::DebugAsJson;
use fake::Dummy;
use fake::Faker;

use crate::alias::AlloyAddress;
use crate::eth::probe::ValidationError;

/// Address of an Ethereum account (wallet or contract).
///
/// Displayed in its EIP-55 checksummed form.
#[derive(DebugAsJson, Clone, Copy, Default, Eq, PartialEq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct Address(pub FixedBytes<20>);

impl Address {
    /// Number of bytes of an address.
    pub const LEN: usize = 20;

    pub const ZERO: Address = Address(FixedBytes::ZERO);

    /// Creates a new address from the given bytes.
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(FixedBytes(bytes))
    }

    /// Returns the EIP-55 checksummed representation of the address.
    pub fn to_checksum(&self) -> String {
        AlloyAddress::from(self.0).to_checksum(None)
    }

    /// Returns the raw address bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0.0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_checksum())
    }
}

impl Dummy<Faker> for Address {
    fn dummy_with_rng<R: rand::Rng + ?Sized>(_: &Faker, rng: &mut R) -> Self {
        Address(FixedBytes::random_with(rng))
    }
}

// -----------------------------------------------------------------------------
// Conversions: Other -> Self
// -----------------------------------------------------------------------------

impl From<FixedBytes<20>> for Address {
    fn from(value: FixedBytes<20>) -> Self {
        Self(value)
    }
}

impl From<[u8; 20]> for Address {
    fn from(value: [u8; 20]) -> Self {
        Self(FixedBytes::from(value))
    }
}

impl From<AlloyAddress> for Address {
    fn from(value: AlloyAddress) -> Self {
        Self(value.0)
    }
}

/// Parses a hexadecimal address.
///
/// The `0x` prefix is optional. Addresses written in a single case are accepted as they are, but an address that mixes
/// upper and lower case letters is treated as EIP-55 checksummed and must match its checksum.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use slot_probe::eth::primitives::Address;
///
/// let lower = Address::from_str("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266").unwrap();
/// let checksummed = Address::from_str("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap();
///
/// assert_eq!(lower, checksummed);
/// assert!(Address::from_str("0xf39fd6e51aad88F6F4ce6aB8827279cffFb92266").is_err());
/// ```
impl FromStr for Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let digits = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")).unwrap_or(input);

        if digits.len() != Self::LEN * 2 {
            return Err(ValidationError::AddressInvalid { input: s.to_owned() });
        }

        let mut bytes = [0u8; 20];
        if const_hex::decode_to_slice(digits, &mut bytes).is_err() {
            return Err(ValidationError::AddressInvalid { input: s.to_owned() });
        }
        let address = Self::new(bytes);

        // mixed case means the caller provided a checksum
        let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
        if has_upper && has_lower {
            let checksum = address.to_checksum();
            if checksum[2..] != *digits {
                return Err(ValidationError::AddressChecksum { input: s.to_owned() });
            }
        }

        Ok(address)
    }
}

// -----------------------------------------------------------------------------
// Conversions: Self -> Other
// -----------------------------------------------------------------------------

impl From<Address> for FixedBytes<20> {
    fn from(value: Address) -> Self {
        value.0
    }
}

impl From<Address> for AlloyAddress {
    fn from(value: Address) -> Self {
        AlloyAddress::from(value.0)
    }
}
