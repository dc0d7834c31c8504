use anyhow::{bail, Result};
use clap::Parser;
use kmer_sketch::kmer::KmerIter;
use kmer_sketch::{BottomSketch, SketchConfig};
use log::info;
use rand::{Rng, SeedableRng};

const BASES: &[u8; 4] = b"ACGT";
const MUTATION_RATES: [f64; 8] = [0.0, 0.001, 0.005, 0.01, 0.02, 0.05, 0.1, 0.2];

#[derive(Parser, Debug)]
#[clap(
    name = "kmer-sketch-sketch_acc",
    about = "A program to test accuracy of bottom-k MinHash estimates on mutated random sequences."
)]
struct Args {
    /// Length of the random sequence.
    #[clap(short = 'l', long, default_value = "100000")]
    length: usize,

    /// K-mer size (must be more than 0).
    #[clap(short = 'k', long, default_value = "21")]
    ksize: usize,

    /// Number of minimum hash values kept per sketch (must be more than 0).
    #[clap(short = 'n', long, default_value = "1000")]
    num_hashes: usize,

    /// Seed value for random values.
    #[clap(short = 's', long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.length < args.ksize {
        bail!("length must not be less than ksize.");
    }

    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    info!("seed={seed}");
    let mut rng = rand_xoshiro::SplitMix64::seed_from_u64(seed);

    let config = SketchConfig::new()
        .capacity(args.num_hashes)
        .ksize(args.ksize);

    let original: Vec<u8> = (0..args.length)
        .map(|_| BASES[rng.gen_range(0..BASES.len())])
        .collect();
    let mut reference = BottomSketch::new(&config)?;
    reference.add_sequence(&original);

    println!("mutation_rate,exact,estimate,absolute_error");
    for rate in MUTATION_RATES {
        let mutated = mutate(&original, rate, &mut rng);
        let exact = 1.
            - kmer_hash::jaccard_distance(
                KmerIter::new(&original, args.ksize),
                KmerIter::new(&mutated, args.ksize),
            );

        let mut sketch = BottomSketch::new(&config)?;
        sketch.add_sequence(&mutated);
        let estimate = reference.jaccard(&sketch)?;

        let error = (exact - estimate).abs();
        println!("{rate},{exact},{estimate},{error}");
    }

    Ok(())
}

/// Substitutes each base with a different one with probability `rate`.
fn mutate<R>(seq: &[u8], rate: f64, rng: &mut R) -> Vec<u8>
where
    R: Rng,
{
    seq.iter()
        .map(|&b| {
            if rng.gen_bool(rate) {
                let mut c = b;
                while c == b {
                    c = BASES[rng.gen_range(0..BASES.len())];
                }
                c
            } else {
                b
            }
        })
        .collect()
}
