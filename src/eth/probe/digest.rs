//! Leaf and pair root digests.

use alloy_primitives::keccak256;

use crate::eth::primitives::Hash;
use crate::eth::primitives::SlotSample;
use crate::eth::probe::encoder::encode_sample;

/// Legacy Keccak-256 (not SHA3-256).
pub fn keccak(bytes: &[u8]) -> Hash {
    keccak256(bytes).into()
}

/// Hashes the 100-byte encoding of a sample.
pub fn leaf_hash(sample: &SlotSample) -> Hash {
    keccak(&encode_sample(sample))
}

/// Combines two leaves into a root that does not depend on argument order.
///
/// Leaves are sorted ascending as unsigned big-endian numbers and the 64-byte concatenation `lo || hi` is hashed.
pub fn pair_root(a: Hash, b: Hash) -> Hash {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(lo.as_fixed_bytes());
    buf[32..].copy_from_slice(hi.as_fixed_bytes());
    keccak(&buf)
}
