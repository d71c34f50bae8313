//! Deterministic 32-bit mixing primitives.
//!
//! These hashes feed random object colors and material fingerprints. They
//! are stable across runs and platforms, but are not bit-compatible with
//! any other application's hash functions.

use xxhash_rust::xxh32::xxh32;

/// Hashes a string (object or library name).
#[inline]
#[must_use]
pub fn str_hash(s: &str) -> u32 {
    xxh32(s.as_bytes(), 0)
}

/// Avalanche finalizer for a single integer.
#[inline]
#[must_use]
pub fn uint_hash(mut key: u32) -> u32 {
    key ^= key >> 16;
    key = key.wrapping_mul(0x85eb_ca6b);
    key ^= key >> 13;
    key = key.wrapping_mul(0xc2b2_ae35);
    key ^= key >> 16;
    key
}

/// Hashes four integers as one little-endian block.
#[must_use]
pub fn uint_hash_v4(words: [u32; 4]) -> u32 {
    let mut bytes = [0u8; 16];
    for (chunk, word) in bytes.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    xxh32(&bytes, 0)
}

/// Hashes an opaque handle (pointer-sized identity).
#[inline]
#[must_use]
pub fn ptr_hash(handle: u64) -> u32 {
    xxh32(&handle.to_le_bytes(), 0)
}

/// Maps an integer to a uniformly distributed float in `[0, 1)`.
#[inline]
#[must_use]
pub fn hash_int_01(key: u32) -> f32 {
    // 24 bits keep the division exact in f32 and strictly below 1.0.
    (uint_hash(key) >> 8) as f32 / (1u32 << 24) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_hash_is_deterministic() {
        assert_eq!(str_hash("OBCube"), str_hash("OBCube"));
        assert_ne!(str_hash("OBCube"), str_hash("OBCube.001"));
    }

    #[test]
    fn test_uint_hash_v4_order_sensitive() {
        assert_ne!(uint_hash_v4([1, 2, 3, 4]), uint_hash_v4([4, 3, 2, 1]));
    }

    #[test]
    fn test_hash_int_01_range() {
        for key in [0, 1, 2, 0xdead_beef, u32::MAX, u32::MAX - 1] {
            let v = hash_int_01(key);
            assert!((0.0..1.0).contains(&v), "{key} -> {v}");
        }
    }
}
