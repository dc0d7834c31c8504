//! Configuration shared by bottom and composition sketches.
use crate::errors::{Result, SketchError};
use crate::kmer::Alphabet;

/// Default upper bound for the prime modulus.
pub const DEFAULT_MAX_PRIME: u64 = 10_000_000_000;

/// Parameters of a sketch.
///
/// The capacity and the k-mer size have no defaults and must be set before
/// a sketch is constructed.
///
/// # Examples
///
/// ```
/// use kmer_sketch::{Alphabet, SketchConfig};
///
/// let config = SketchConfig::new()
///     .capacity(500)
///     .ksize(21)
///     .alphabet(Alphabet::Protein);
/// assert_eq!(config.get_capacity(), Some(500));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SketchConfig {
    capacity: Option<usize>,
    ksize: Option<usize>,
    max_prime: u64,
    alphabet: Alphabet,
    prefix_length: Option<usize>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchConfig {
    /// Creates a configuration with no capacity, no k-mer size and no prefix length.
    pub const fn new() -> Self {
        Self {
            capacity: None,
            ksize: None,
            max_prime: DEFAULT_MAX_PRIME,
            alphabet: Alphabet::Nucleotide,
            prefix_length: None,
        }
    }

    /// Sets the number of minimum hash values retained.
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Sets the k-mer size.
    pub const fn ksize(mut self, ksize: usize) -> Self {
        self.ksize = Some(ksize);
        self
    }

    /// Sets the upper bound of the prime modulus.
    pub const fn max_prime(mut self, max_prime: u64) -> Self {
        self.max_prime = max_prime;
        self
    }

    /// Sets the alphabet.
    pub const fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Sets the prefix length used by composition sketches.
    pub const fn prefix_length(mut self, prefix_length: usize) -> Self {
        self.prefix_length = Some(prefix_length);
        self
    }

    /// Gets the capacity, if set.
    pub const fn get_capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Gets the k-mer size, if set.
    pub const fn get_ksize(&self) -> Option<usize> {
        self.ksize
    }

    /// Gets the upper bound of the prime modulus.
    pub const fn get_max_prime(&self) -> u64 {
        self.max_prime
    }

    /// Gets the alphabet.
    pub const fn get_alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Gets the prefix length, if set.
    pub const fn get_prefix_length(&self) -> Option<usize> {
        self.prefix_length
    }

    pub(crate) fn require_capacity(&self) -> Result<usize> {
        match self.capacity {
            None => Err(SketchError::config("capacity must be set.")),
            Some(0) => Err(SketchError::config("capacity must not be 0.")),
            Some(n) => Ok(n),
        }
    }

    pub(crate) fn require_ksize(&self) -> Result<usize> {
        match self.ksize {
            None => Err(SketchError::config("ksize must be set.")),
            Some(0) => Err(SketchError::config("ksize must not be 0.")),
            Some(k) => Ok(k),
        }
    }

    pub(crate) fn require_prefix_length(&self) -> Result<usize> {
        match self.prefix_length {
            None => Err(SketchError::config("prefix_length must be set.")),
            Some(0) => Err(SketchError::config("prefix_length must not be 0.")),
            Some(p) => Ok(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SketchConfig::default();
        assert_eq!(config.get_capacity(), None);
        assert_eq!(config.get_ksize(), None);
        assert_eq!(config.get_prefix_length(), None);
        assert_eq!(config.get_max_prime(), DEFAULT_MAX_PRIME);
        assert_eq!(config.get_alphabet(), Alphabet::Nucleotide);
    }

    #[test]
    fn test_require() {
        let config = SketchConfig::new();
        assert!(config.require_capacity().is_err());
        assert!(config.require_ksize().is_err());
        assert!(config.require_prefix_length().is_err());

        let config = config.capacity(0).ksize(0).prefix_length(0);
        assert!(config.require_capacity().is_err());
        assert!(config.require_ksize().is_err());
        assert!(config.require_prefix_length().is_err());

        let config = config.capacity(10).ksize(21).prefix_length(2);
        assert_eq!(config.require_capacity(), Ok(10));
        assert_eq!(config.require_ksize(), Ok(21));
        assert_eq!(config.require_prefix_length(), Ok(2));
    }
}
