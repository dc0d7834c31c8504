//! Hashing capabilities for k-mer sketches.
#![deny(missing_docs)]

pub mod prefix;

use std::hash::Hash;

use hashbrown::HashSet;
use murmurhash3::{murmurhash3_x64_128, murmurhash3_x86_32};

pub use prefix::{num_prefixes, prefix_index};

/// Maps a k-mer to an integer hash value.
///
/// Implementations must be deterministic for the lifetime of the process,
/// since sketches built with the same hasher are compared value by value.
pub trait KmerHasher {
    /// Hashes a k-mer.
    fn hash(&self, kmer: &[u8]) -> u64;
}

/// 32-bit MurmurHash3 (x86 variant).
///
/// With the default seed of 0 it yields the same bits as the classic `mmh3.hash`,
/// read as an unsigned integer. Values with the top bit set therefore differ from
/// the signed `mmh3.hash` output, and sketches built with this hasher do not match
/// sketches built from signed hash values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Murmur3Hasher {
    seed: u32,
}

impl Murmur3Hasher {
    /// Creates a hasher with the given seed.
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl KmerHasher for Murmur3Hasher {
    #[inline(always)]
    fn hash(&self, kmer: &[u8]) -> u64 {
        u64::from(murmurhash3_x86_32(kmer, self.seed))
    }
}

/// 128-bit MurmurHash3 (x64 variant) truncated to its first 64 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Murmur3x64Hasher {
    seed: u64,
}

impl Murmur3x64Hasher {
    /// Creates a hasher with the given seed.
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl KmerHasher for Murmur3x64Hasher {
    #[inline(always)]
    fn hash(&self, kmer: &[u8]) -> u64 {
        murmurhash3_x64_128(kmer, self.seed).0
    }
}

impl<H> KmerHasher for &H
where
    H: KmerHasher + ?Sized,
{
    fn hash(&self, kmer: &[u8]) -> u64 {
        (**self).hash(kmer)
    }
}

/// Computes the exact Jaccard distance.
///
/// # Examples
///
/// ```
/// use kmer_hash::jaccard_distance;
///
/// let x = vec![1, 2, 4];
/// let y = vec![1, 2, 5, 7];
/// assert_eq!(jaccard_distance(x, y), 0.6);
/// ```
pub fn jaccard_distance<I, T>(lhs: I, rhs: I) -> f64
where
    I: IntoIterator<Item = T>,
    T: Hash + Eq,
{
    let a = HashSet::<T>::from_iter(lhs);
    let b = HashSet::<T>::from_iter(rhs);
    1. - (a.intersection(&b).count() as f64) / (a.union(&b).count() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_murmur3_32() {
        let hasher = Murmur3Hasher::default();
        assert_eq!(hasher.hash(b""), 0);
        assert_eq!(hasher.hash(b"hello"), 613153351);
        assert_eq!(Murmur3Hasher::new(1).hash(b""), 0x514e28b7);
    }

    #[test]
    fn test_murmur3_32_unsigned() {
        let hasher = Murmur3Hasher::default();
        // -1779806677 as a signed 32-bit value.
        assert_eq!(hasher.hash(b"GATTACA"), 2515160619);
        assert!(hasher.hash(b"GATTACA") > u64::from(i32::MAX as u32));
    }

    #[test]
    fn test_deterministic() {
        let hasher = Murmur3x64Hasher::new(42);
        assert_eq!(hasher.hash(b"ACGTACGT"), hasher.hash(b"ACGTACGT"));
        assert_ne!(hasher.hash(b"ACGTACGT"), hasher.hash(b"ACGTACGA"));
        assert_ne!(
            hasher.hash(b"ACGTACGT"),
            Murmur3x64Hasher::new(43).hash(b"ACGTACGT")
        );
    }

    #[test]
    fn test_by_ref() {
        let hasher = Murmur3Hasher::default();
        assert_eq!((&hasher).hash(b"GATTACA"), hasher.hash(b"GATTACA"));
    }

    #[test]
    fn test_jaccard_distance() {
        assert_eq!(jaccard_distance([1, 2, 3], [1, 2, 3]), 0.);
        assert_eq!(jaccard_distance([1, 2], [3, 4]), 1.);
        assert_eq!(jaccard_distance([1, 1, 2], [2, 2, 3]), 1. - 1. / 3.);
    }
}
