//! Bottom-k MinHash sketches for estimating the Jaccard similarity of DNA and protein k-mer sets.
#![deny(missing_docs)]

pub mod bottom;
pub mod composition;
pub mod config;
pub mod errors;
pub mod kmer;
pub mod prime;

pub use bottom::BottomSketch;
pub use composition::CompositionSketch;
pub use config::SketchConfig;
pub use kmer::Alphabet;
pub use kmer_hash::{KmerHasher, Murmur3Hasher, Murmur3x64Hasher};
