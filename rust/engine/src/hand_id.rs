//! Numeric hand numbers for the header line.
//!
//! The source identifiers are alphanumeric; the target header expects digits.
//! FNV-1a 64-bit keeps the mapping stable across runs and platforms. It is not
//! collision-free.

use std::hash::Hasher;

struct FnvHasher(u64);

impl FnvHasher {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    fn new() -> Self {
        Self(Self::OFFSET_BASIS)
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 ^= u64::from(byte);
            self.0 = self.0.wrapping_mul(Self::PRIME);
        }
    }
}

/// Map an arbitrary hand identifier to a decimal hand number.
///
/// ```rust
/// use nowstars_engine::hand_id::hand_number;
///
/// assert_eq!(hand_number("abc"), hand_number("abc"));
/// assert!(hand_number("abc").chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn hand_number(id: &str) -> String {
    let mut hasher = FnvHasher::new();
    hasher.write(id.as_bytes());
    hasher.finish().to_string()
}
