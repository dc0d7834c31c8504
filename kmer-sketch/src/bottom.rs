//! Bottom-k MinHash sketch.
use std::cmp::Ordering;

use kmer_hash::{KmerHasher, Murmur3Hasher};
use log::debug;

use crate::config::SketchConfig;
use crate::errors::{Result, SketchError};
use crate::kmer::{normalize, Alphabet};
use crate::prime::largest_prime_at_most;

/// Sketch retaining the `capacity` smallest distinct hash values of the k-mers added to it.
///
/// Hash values are reduced modulo a prime `modulus`, and the modulus itself marks an
/// unfilled slot. The slots are always sorted in ascending order, so unfilled slots trail.
///
/// # Examples
///
/// ```
/// use kmer_sketch::{BottomSketch, SketchConfig};
///
/// let config = SketchConfig::new().capacity(10).ksize(5);
/// let mut a = BottomSketch::new(&config).unwrap();
/// let mut b = BottomSketch::new(&config).unwrap();
///
/// a.add_sequence(b"ATGGCAGTGACGATGCCAG");
/// b.add_sequence(b"atggcagtgacgatgccag");
/// assert_eq!(a.jaccard(&b).unwrap(), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BottomSketch<H = Murmur3Hasher> {
    ksize: usize,
    modulus: u64,
    alphabet: Alphabet,
    mins: Vec<u64>,
    hasher: H,
}

impl BottomSketch {
    /// Creates an empty sketch hashing k-mers with 32-bit MurmurHash3.
    ///
    /// # Errors
    ///
    /// An error is returned if the capacity or the k-mer size is unset or zero,
    /// or if no prime exists below the configured bound.
    pub fn new(config: &SketchConfig) -> Result<Self> {
        Self::with_hasher(config, Murmur3Hasher::default())
    }
}

impl<H> BottomSketch<H>
where
    H: KmerHasher,
{
    /// Creates an empty sketch hashing k-mers with `hasher`.
    ///
    /// # Errors
    ///
    /// See [`BottomSketch::new`].
    pub fn with_hasher(config: &SketchConfig, hasher: H) -> Result<Self> {
        let capacity = config.require_capacity()?;
        let ksize = config.require_ksize()?;
        let modulus = largest_prime_at_most(config.get_max_prime())?;
        debug!(
            "[BottomSketch::with_hasher] capacity={capacity}, ksize={ksize}, modulus={modulus}, alphabet={:?}",
            config.get_alphabet()
        );
        Ok(Self::from_parts(
            capacity,
            ksize,
            modulus,
            config.get_alphabet(),
            hasher,
        ))
    }

    pub(crate) fn from_parts(
        capacity: usize,
        ksize: usize,
        modulus: u64,
        alphabet: Alphabet,
        hasher: H,
    ) -> Self {
        Self {
            ksize,
            modulus,
            alphabet,
            mins: vec![modulus; capacity],
            hasher,
        }
    }

    /// Adds a k-mer as it is, without normalization or translation.
    #[inline(always)]
    pub fn add(&mut self, kmer: &[u8]) {
        let h = self.hasher.hash(kmer);
        self.add_hash(h);
    }

    /// Adds a precomputed hash value, reduced modulo [`Self::modulus`].
    ///
    /// The value is dropped if it is not smaller than the current maximum or is already present.
    pub fn add_hash(&mut self, hash: u64) {
        let h = hash % self.modulus;
        match self.mins.last() {
            Some(&max) if h < max => {}
            _ => return,
        }
        // Some slot is larger than h, so the search always succeeds.
        if let Some(i) = self.mins.iter().position(|&v| h <= v) {
            if self.mins[i] != h {
                self.mins.insert(i, h);
                self.mins.pop();
            }
        }
    }

    /// Adds every k-mer of a sequence.
    ///
    /// The sequence is upper-cased and `N` is replaced by `G` before k-mers are extracted
    /// according to [`Self::alphabet`].
    pub fn add_sequence(&mut self, seq: &[u8]) {
        let seq = normalize(seq);
        for kmer in self.alphabet.kmers(&seq, self.ksize) {
            self.add(&kmer);
        }
    }

    /// Counts the hash values shared with another sketch.
    ///
    /// All `capacity` slots take part in the merge, unfilled ones included,
    /// so two sketches that are both under-filled also match on their trailing sentinels.
    ///
    /// # Errors
    ///
    /// An error is returned if the sketches differ in k-mer size or modulus.
    pub fn common(&self, other: &Self) -> Result<usize> {
        if self.ksize != other.ksize {
            return Err(SketchError::incompatible(
                "different k-mer sizes - cannot compare.",
            ));
        }
        if self.modulus != other.modulus {
            return Err(SketchError::incompatible(
                "different moduli - cannot compare.",
            ));
        }
        Ok(count_overlaps(&self.mins, &other.mins))
    }

    /// Estimates the Jaccard similarity as the number of common hash values
    /// divided by the number of filled slots of `self`.
    ///
    /// The estimate is not symmetric when the two sketches hold different numbers of values.
    ///
    /// # Errors
    ///
    /// An error is returned if the sketches are incompatible or `self` is empty.
    pub fn jaccard(&self, other: &Self) -> Result<f64> {
        let true_len = self.true_len();
        if true_len == 0 {
            return Err(SketchError::empty());
        }
        let common = self.common(other)?;
        Ok(common as f64 / true_len as f64)
    }

    /// Alias of [`Self::jaccard`].
    pub fn similarity(&self, other: &Self) -> Result<f64> {
        self.jaccard(other)
    }
}

impl<H> BottomSketch<H> {
    /// Gets the slots in ascending order, unfilled slots holding [`Self::modulus`].
    pub fn mins(&self) -> &[u64] {
        &self.mins
    }

    /// Gets the number of filled slots.
    pub fn true_len(&self) -> usize {
        let unfilled = self
            .mins
            .iter()
            .rev()
            .take_while(|&&v| v == self.modulus)
            .count();
        self.mins.len() - unfilled
    }

    /// Checks if no hash value has been retained.
    pub fn is_empty(&self) -> bool {
        self.true_len() == 0
    }

    /// Gets the number of slots.
    pub fn capacity(&self) -> usize {
        self.mins.len()
    }

    /// Gets the k-mer size.
    pub const fn ksize(&self) -> usize {
        self.ksize
    }

    /// Gets the prime modulus, which is also the value of unfilled slots.
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Gets the alphabet.
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Keeps only the `n` smallest slots.
    ///
    /// # Errors
    ///
    /// An error is returned if `n` is 0.
    pub fn truncate(&mut self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(SketchError::config("capacity must not be 0."));
        }
        self.mins.truncate(n);
        Ok(())
    }
}

/// Counts the values common to two ascending sequences.
///
/// The merge stops as soon as either sequence is exhausted.
///
/// # Examples
///
/// ```
/// use kmer_sketch::bottom::count_overlaps;
///
/// assert_eq!(count_overlaps(&[1, 3, 5], &[2, 4, 6]), 0);
/// assert_eq!(count_overlaps(&[1, 3, 6], &[1, 2, 6]), 2);
/// ```
pub fn count_overlaps<T>(xs: &[T], ys: &[T]) -> usize
where
    T: Ord,
{
    let (mut i, mut j) = (0, 0);
    let mut common = 0;
    while i < xs.len() && j < ys.len() {
        match xs[i].cmp(&ys[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                common += 1;
                i += 1;
                j += 1;
            }
        }
    }
    common
}
