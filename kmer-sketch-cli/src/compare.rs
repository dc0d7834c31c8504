use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use kmer_sketch::{Alphabet, BottomSketch, SketchConfig};
use log::info;
use needletail::parse_fastx_file;
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[clap(
    name = "kmer-sketch-compare",
    about = "A program to compare every pair of sequence records from two files with bottom-k MinHash sketches."
)]
struct Args {
    /// FASTA/FASTQ file of the left-side records.
    #[clap(short = 'a', long)]
    left_path: PathBuf,

    /// FASTA/FASTQ file of the right-side records.
    #[clap(short = 'b', long)]
    right_path: PathBuf,

    /// K-mer size in nucleotides (must be more than 0).
    #[clap(short = 'k', long, default_value = "31")]
    ksize: usize,

    /// Number of minimum hash values kept per record (must be more than 0).
    /// The larger this value, the more accurate the estimate.
    #[clap(short = 'n', long, default_value = "1000")]
    num_hashes: usize,

    /// Upper bound of the prime modulus hash values are reduced with.
    #[clap(short = 'm', long, default_value = "10000000000")]
    max_prime: u64,

    /// Translates k-mers into amino acids before hashing.
    #[clap(short = 'P', long)]
    protein: bool,

    /// Disables parallel comparison.
    #[clap(short = 'p', long)]
    disable_parallel: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let alphabet = if args.protein {
        Alphabet::Protein
    } else {
        Alphabet::Nucleotide
    };
    let config = SketchConfig::new()
        .capacity(args.num_hashes)
        .ksize(args.ksize)
        .max_prime(args.max_prime)
        .alphabet(alphabet);

    let (left, right) = {
        info!("Converting records into sketches...");
        let start = Instant::now();
        let left = load_sketches(&args.left_path, &config)?;
        let right = load_sketches(&args.right_path, &config)?;
        info!(
            "Produced {} sketches in {} sec",
            left.len() + right.len(),
            start.elapsed().as_secs_f64()
        );
        (left, right)
    };

    info!("Comparing {} pairs of sketches...", left.len() * right.len());
    let start = Instant::now();
    let pairs: Vec<(usize, usize)> = (0..left.len())
        .flat_map(|i| (0..right.len()).map(move |j| (i, j)))
        .collect();
    let compare = |&(i, j): &(usize, usize)| -> Result<(usize, usize, String, String)> {
        let (x, y) = (&left[i].1, &right[j].1);
        Ok((i, j, estimate(x, y)?, estimate(y, x)?))
    };
    let results: Vec<_> = if args.disable_parallel {
        pairs.iter().map(compare).collect::<Result<_>>()?
    } else {
        pairs.par_iter().map(compare).collect::<Result<_>>()?
    };
    info!("Done in {} sec", start.elapsed().as_secs_f64());

    println!("a,b,jaccard_ab,jaccard_ba");
    for (i, j, ab, ba) in results {
        println!("{},{},{ab},{ba}", left[i].0, right[j].0);
    }

    Ok(())
}

/// Formats the estimate, or `NA` if `x` holds no k-mer.
fn estimate(x: &BottomSketch, y: &BottomSketch) -> Result<String> {
    match x.jaccard(y) {
        Ok(j) => Ok(j.to_string()),
        Err(e) if e.is_empty_sketch() => Ok("NA".to_string()),
        Err(e) => Err(e.into()),
    }
}

fn load_sketches(path: &Path, config: &SketchConfig) -> Result<Vec<(String, BottomSketch)>> {
    let mut reader = parse_fastx_file(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let mut sketches = vec![];
    while let Some(record) = reader.next() {
        let record =
            record.with_context(|| format!("Failed to parse a record in {}", path.display()))?;
        let name = String::from_utf8_lossy(record.id()).into_owned();
        let mut sketch = BottomSketch::new(config)?;
        sketch.add_sequence(&record.seq());
        sketches.push((name, sketch));
        if sketches.len() % 1000 == 0 {
            info!("Processed {} records in {}...", sketches.len(), path.display());
        }
    }
    Ok(sketches)
}
