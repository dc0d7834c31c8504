use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use kmer_sketch::{CompositionSketch, SketchConfig};
use log::info;
use needletail::parse_fastx_file;

#[derive(Parser, Debug)]
#[clap(
    name = "kmer-sketch-composition",
    about = "A program to compare the k-mer composition of two sequence files."
)]
struct Args {
    /// FASTA/FASTQ file of the left-side sequences.
    #[clap(short = 'a', long)]
    left_path: PathBuf,

    /// FASTA/FASTQ file of the right-side sequences.
    #[clap(short = 'b', long)]
    right_path: PathBuf,

    /// K-mer size (must be more than 0).
    #[clap(short = 'k', long, default_value = "21")]
    ksize: usize,

    /// Number of minimum hash values kept per prefix bucket (must be more than 0).
    #[clap(short = 'n', long, default_value = "100")]
    num_hashes: usize,

    /// Prefix length partitioning the k-mers into 4^prefix_length buckets
    /// (must be more than 0 and at most the k-mer size).
    #[clap(short = 'p', long, default_value = "3")]
    prefix_length: usize,

    /// Per-bucket Jaccard estimate above which a bucket counts as matched.
    #[clap(short = 't', long, default_value = "0.01")]
    threshold: f64,

    /// Upper bound of the prime modulus hash values are reduced with.
    #[clap(short = 'm', long, default_value = "10000000000")]
    max_prime: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = SketchConfig::new()
        .capacity(args.num_hashes)
        .ksize(args.ksize)
        .prefix_length(args.prefix_length)
        .max_prime(args.max_prime);

    info!("Converting sequences into composition sketches...");
    let start = Instant::now();
    let left = load_sketch(&args.left_path, &config, args.threshold)?;
    let right = load_sketch(&args.right_path, &config, args.threshold)?;
    info!("Done in {} sec", start.elapsed().as_secs_f64());

    let jaccard = left.jaccard(&right)?;
    let similarity = left.similarity(&right)?;

    println!("jaccard,similarity");
    println!("{jaccard},{similarity}");

    Ok(())
}

fn load_sketch(path: &Path, config: &SketchConfig, threshold: f64) -> Result<CompositionSketch> {
    let mut reader = parse_fastx_file(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let mut sketch = CompositionSketch::new(config)?.with_threshold(threshold);
    let mut num_records = 0;
    while let Some(record) = reader.next() {
        let record =
            record.with_context(|| format!("Failed to parse a record in {}", path.display()))?;
        sketch.add_sequence(&record.seq()).with_context(|| {
            format!(
                "Failed to add {} of {}",
                String::from_utf8_lossy(record.id()),
                path.display()
            )
        })?;
        num_records += 1;
        if num_records % 1000 == 0 {
            info!("Processed {num_records} records in {}...", path.display());
        }
    }
    info!(
        "Loaded {num_records} records from {} into {} buckets",
        path.display(),
        sketch.num_buckets()
    );
    Ok(sketch)
}
