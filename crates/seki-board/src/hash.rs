//! Content hashing for change detection.

use std::fmt;

/// A 64-bit content hash of a board position.
///
/// Two boards of the same size with the same stones hash equal; any
/// stone added, removed, or recolored changes the hash with overwhelming
/// probability. The solver compares hashes to decide whether its cached
/// decomposition is still current, so the only requirement is stability
/// within a process — this is a change-detection token, not a
/// cryptographic digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PositionHash(pub u64);

impl fmt::Display for PositionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over a byte stream.
///
/// The stream is the board size followed by one byte per point in board
/// order (0 empty, 1 black, 2 white).
pub(crate) fn fnv1a(bytes: impl Iterator<Item = u8>) -> u64 {
    let mut h = FNV_OFFSET;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_streams_hash_distinct() {
        let a = fnv1a([1u8, 0, 0].into_iter());
        let b = fnv1a([0u8, 1, 0].into_iter());
        let c = fnv1a([0u8, 0, 1].into_iter());
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_is_deterministic() {
        let stream = || [9u8, 0, 1, 2, 1, 0].into_iter();
        assert_eq!(fnv1a(stream()), fnv1a(stream()));
    }

    #[test]
    fn display_is_fixed_width_hex() {
        assert_eq!(PositionHash(0xabc).to_string(), "0000000000000abc");
    }
}
