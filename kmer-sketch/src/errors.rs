//! Error definitions.
use std::error::Error;
use std::{fmt, result};

/// A specialized Result type for this library.
pub type Result<T, E = SketchError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SketchError {
    /// Contains [`ConfigError`].
    Config(ConfigError),

    /// Contains [`IncompatibleError`].
    Incompatible(IncompatibleError),

    /// Contains [`EmptySketchError`].
    Empty(EmptySketchError),

    /// Contains [`NoComparableBucketsError`].
    NoComparableBuckets(NoComparableBucketsError),

    /// Contains [`PrimeNotFoundError`].
    PrimeNotFound(PrimeNotFoundError),

    /// Contains [`InvalidKmerError`].
    InvalidKmer(InvalidKmerError),
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Config(e) => e.fmt(f),
            Self::Incompatible(e) => e.fmt(f),
            Self::Empty(e) => e.fmt(f),
            Self::NoComparableBuckets(e) => e.fmt(f),
            Self::PrimeNotFound(e) => e.fmt(f),
            Self::InvalidKmer(e) => e.fmt(f),
        }
    }
}

impl Error for SketchError {}

impl SketchError {
    pub(crate) const fn config(msg: &'static str) -> Self {
        Self::Config(ConfigError { msg })
    }

    pub(crate) const fn incompatible(msg: &'static str) -> Self {
        Self::Incompatible(IncompatibleError { msg })
    }

    pub(crate) const fn empty() -> Self {
        Self::Empty(EmptySketchError)
    }

    pub(crate) const fn no_comparable_buckets(num_buckets: usize) -> Self {
        Self::NoComparableBuckets(NoComparableBucketsError { num_buckets })
    }

    pub(crate) const fn prime_not_found(target: u64) -> Self {
        Self::PrimeNotFound(PrimeNotFoundError { target })
    }

    pub(crate) fn invalid_kmer(kmer: &[u8]) -> Self {
        Self::InvalidKmer(InvalidKmerError {
            kmer: String::from_utf8_lossy(kmer).into_owned(),
        })
    }

    /// Checks if the error is raised by an empty sketch.
    pub const fn is_empty_sketch(&self) -> bool {
        matches!(self, Self::Empty(_))
    }
}

/// Error used when a construction parameter is missing or invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    msg: &'static str,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ConfigError: {}", self.msg)
    }
}

/// Error used when two sketches built with different parameters are compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompatibleError {
    msg: &'static str,
}

impl fmt::Display for IncompatibleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IncompatibleError: {}", self.msg)
    }
}

/// Error used when a similarity is requested from a sketch holding no hash values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptySketchError;

impl fmt::Display for EmptySketchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EmptySketchError: the sketch holds no hash values")
    }
}

/// Error used when no bucket pair of two composition sketches can be compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoComparableBucketsError {
    num_buckets: usize,
}

impl fmt::Display for NoComparableBucketsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "NoComparableBucketsError: all {} bucket pairs have an empty side",
            self.num_buckets
        )
    }
}

/// Error used when the prime search runs out of candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeNotFoundError {
    target: u64,
}

impl fmt::Display for PrimeNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "PrimeNotFoundError: unable to find a prime number <= {}",
            self.target
        )
    }
}

/// Error used when a k-mer cannot be routed to a composition bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidKmerError {
    kmer: String,
}

impl fmt::Display for InvalidKmerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "InvalidKmerError: prefix of {} is not over A,C,G,T",
            self.kmer
        )
    }
}
