//! Composition sketch, a bottom-k sketch per nucleotide prefix.
use kmer_hash::{num_prefixes, prefix_index, KmerHasher, Murmur3Hasher};
use log::debug;

use crate::bottom::BottomSketch;
use crate::config::SketchConfig;
use crate::errors::{Result, SketchError};
use crate::kmer::{normalize, Alphabet};
use crate::prime::largest_prime_at_most;

/// Default cutoff above which a bucket counts as matched in [`CompositionSketch::similarity`].
pub const DEFAULT_THRESHOLD: f64 = 0.01;

/// Sketch partitioning k-mers by their first `prefix_length` bases into `4^prefix_length`
/// independent [`BottomSketch`]es.
///
/// # Examples
///
/// ```
/// use kmer_sketch::{CompositionSketch, SketchConfig};
///
/// let config = SketchConfig::new().capacity(2).ksize(8).prefix_length(1);
/// let mut a = CompositionSketch::new(&config).unwrap();
/// a.add_sequence(b"AACCGGTTAACCGGTTACGTACGTTGCA").unwrap();
/// assert_eq!(a.num_buckets(), 4);
/// assert_eq!(a.jaccard(&a).unwrap(), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct CompositionSketch<H = Murmur3Hasher> {
    ksize: usize,
    prefix_length: usize,
    modulus: u64,
    threshold: f64,
    buckets: Vec<BottomSketch<H>>,
    hasher: H,
}

impl CompositionSketch {
    /// Creates an empty sketch hashing k-mers with 32-bit MurmurHash3.
    ///
    /// # Errors
    ///
    /// An error is returned if the capacity, the k-mer size or the prefix length is unset or zero,
    /// if the prefix is longer than the k-mers, or if no prime exists below the configured bound.
    pub fn new(config: &SketchConfig) -> Result<Self> {
        Self::with_hasher(config, Murmur3Hasher::default())
    }
}

impl<H> CompositionSketch<H>
where
    H: KmerHasher + Clone,
{
    /// Creates an empty sketch hashing k-mers with `hasher`.
    ///
    /// # Errors
    ///
    /// See [`CompositionSketch::new`].
    pub fn with_hasher(config: &SketchConfig, hasher: H) -> Result<Self> {
        let capacity = config.require_capacity()?;
        let ksize = config.require_ksize()?;
        let prefix_length = config.require_prefix_length()?;
        if prefix_length > ksize {
            return Err(SketchError::config(
                "prefix_length must not exceed ksize.",
            ));
        }
        let num_buckets = num_prefixes(prefix_length)
            .ok_or_else(|| SketchError::config("prefix_length is too large."))?;
        let modulus = largest_prime_at_most(config.get_max_prime())?;
        debug!(
            "[CompositionSketch::with_hasher] #buckets={num_buckets}, capacity={capacity}, ksize={ksize}, modulus={modulus}"
        );
        let buckets = (0..num_buckets)
            .map(|_| {
                BottomSketch::from_parts(
                    capacity,
                    ksize,
                    modulus,
                    Alphabet::Nucleotide,
                    hasher.clone(),
                )
            })
            .collect();
        Ok(Self {
            ksize,
            prefix_length,
            modulus,
            threshold: DEFAULT_THRESHOLD,
            buckets,
            hasher,
        })
    }
}

impl<H> CompositionSketch<H>
where
    H: KmerHasher,
{
    /// Sets the cutoff used by [`Self::similarity`].
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Adds a k-mer to the bucket selected by its prefix.
    ///
    /// The whole k-mer, prefix included, is hashed.
    ///
    /// # Errors
    ///
    /// An error is returned if the k-mer is shorter than the prefix or its prefix
    /// contains anything but `A`, `C`, `G` and `T`. The sketch is left unchanged then.
    pub fn add(&mut self, kmer: &[u8]) -> Result<()> {
        let idx = prefix_index(kmer, self.prefix_length)
            .ok_or_else(|| SketchError::invalid_kmer(kmer))?;
        let h = self.hasher.hash(kmer);
        self.buckets[idx].add_hash(h);
        Ok(())
    }

    /// Adds every nucleotide k-mer of a sequence, after the same normalization as
    /// [`BottomSketch::add_sequence`].
    ///
    /// # Errors
    ///
    /// See [`Self::add`]. K-mers preceding the failing one stay in the sketch.
    pub fn add_sequence(&mut self, seq: &[u8]) -> Result<()> {
        let seq = normalize(seq);
        for kmer in Alphabet::Nucleotide.kmers(&seq, self.ksize) {
            self.add(&kmer)?;
        }
        Ok(())
    }

    /// Averages the per-bucket Jaccard estimates over the buckets filled on both sides.
    ///
    /// # Errors
    ///
    /// An error is returned if the sketches differ in k-mer size, prefix length or modulus,
    /// or if no bucket is filled on both sides.
    pub fn jaccard(&self, other: &Self) -> Result<f64> {
        let scores = self.bucket_scores(other)?;
        Ok(scores.iter().sum::<f64>() / scores.len() as f64)
    }

    /// Computes the fraction of buckets, among those filled on both sides,
    /// whose Jaccard estimate exceeds [`Self::threshold`].
    ///
    /// # Errors
    ///
    /// See [`Self::jaccard`].
    pub fn similarity(&self, other: &Self) -> Result<f64> {
        let scores = self.bucket_scores(other)?;
        let matches = scores.iter().filter(|&&s| s > self.threshold).count();
        Ok(matches as f64 / scores.len() as f64)
    }

    /// Computes the Jaccard estimates of the bucket pairs where neither side is empty.
    /// The returned list is never empty.
    fn bucket_scores(&self, other: &Self) -> Result<Vec<f64>> {
        if self.ksize != other.ksize {
            return Err(SketchError::incompatible(
                "different k-mer sizes - cannot compare.",
            ));
        }
        if self.prefix_length != other.prefix_length {
            return Err(SketchError::incompatible(
                "different prefix lengths - cannot compare.",
            ));
        }
        if self.modulus != other.modulus {
            return Err(SketchError::incompatible(
                "different moduli - cannot compare.",
            ));
        }

        let mut scores = Vec::with_capacity(self.buckets.len());
        for (x, y) in self.buckets.iter().zip(other.buckets.iter()) {
            if y.is_empty() {
                continue;
            }
            match x.jaccard(y) {
                Ok(s) => scores.push(s),
                Err(e) if e.is_empty_sketch() => continue,
                Err(e) => return Err(e),
            }
        }
        if scores.is_empty() {
            return Err(SketchError::no_comparable_buckets(self.buckets.len()));
        }
        Ok(scores)
    }
}

impl<H> CompositionSketch<H> {
    /// Gets the bucket sketches, indexed by the 2-bit encoding of their prefix.
    pub fn buckets(&self) -> &[BottomSketch<H>] {
        &self.buckets
    }

    /// Gets the number of buckets, `4^prefix_length`.
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Gets the k-mer size.
    pub const fn ksize(&self) -> usize {
        self.ksize
    }

    /// Gets the prefix length.
    pub const fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    /// Gets the prime modulus shared by all buckets.
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Gets the cutoff used by [`Self::similarity`].
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }
}
