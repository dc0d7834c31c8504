use std::time::Duration;

use rand::{thread_rng, Rng};

use criterion::{
    criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion, SamplingMode,
};

use kmer_sketch::{Alphabet, BottomSketch, CompositionSketch, SketchConfig};

const SAMPLE_SIZE: usize = 10;
const WARM_UP_TIME: Duration = Duration::from_secs(5);
const MEASURE_TIME: Duration = Duration::from_secs(10);

const SEQ_LEN: usize = 100_000;
const KSIZE: usize = 21;
const CAPACITIES: [usize; 3] = [100, 1000, 10000];
const PREFIX_LENGTHS: [usize; 3] = [1, 2, 3];

fn random_dna(len: usize) -> Vec<u8> {
    let mut rng = thread_rng();
    (0..len).map(|_| b"ACGT"[rng.gen_range(0..4usize)]).collect()
}

fn criterion_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);

    let seqs = [random_dna(SEQ_LEN), random_dna(SEQ_LEN)];

    add_bottom_benches(&mut group, &seqs);
    add_composition_benches(&mut group, &seqs);
}

fn add_bottom_benches(group: &mut BenchmarkGroup<WallTime>, seqs: &[Vec<u8>; 2]) {
    for alphabet in [Alphabet::Nucleotide, Alphabet::Protein] {
        for capacity in CAPACITIES {
            let config = SketchConfig::new()
                .capacity(capacity)
                .ksize(KSIZE)
                .alphabet(alphabet);

            let bench_name = format!("bottom/add_sequence/{alphabet:?}/{capacity}");
            group.bench_function(bench_name, |b| {
                b.iter(|| {
                    let mut sketch = BottomSketch::new(&config).unwrap();
                    sketch.add_sequence(&seqs[0]);
                    if sketch.is_empty() {
                        panic!();
                    }
                });
            });

            let mut x = BottomSketch::new(&config).unwrap();
            let mut y = BottomSketch::new(&config).unwrap();
            x.add_sequence(&seqs[0]);
            y.add_sequence(&seqs[1]);
            let bench_name = format!("bottom/jaccard/{alphabet:?}/{capacity}");
            group.bench_function(bench_name, |b| {
                b.iter(|| {
                    if x.jaccard(&y).unwrap() > 1. {
                        panic!();
                    }
                });
            });
        }
    }
}

fn add_composition_benches(group: &mut BenchmarkGroup<WallTime>, seqs: &[Vec<u8>; 2]) {
    for prefix_length in PREFIX_LENGTHS {
        let config = SketchConfig::new()
            .capacity(100)
            .ksize(KSIZE)
            .prefix_length(prefix_length);

        let bench_name = format!("composition/add_sequence/{prefix_length}");
        group.bench_function(bench_name, |b| {
            b.iter(|| {
                let mut sketch = CompositionSketch::new(&config).unwrap();
                sketch.add_sequence(&seqs[0]).unwrap();
            });
        });

        let mut x = CompositionSketch::new(&config).unwrap();
        let mut y = CompositionSketch::new(&config).unwrap();
        x.add_sequence(&seqs[0]).unwrap();
        y.add_sequence(&seqs[1]).unwrap();
        let bench_name = format!("composition/jaccard/{prefix_length}");
        group.bench_function(bench_name, |b| {
            b.iter(|| x.jaccard(&y).unwrap());
        });
    }
}

criterion_group!(benches, criterion_random);
criterion_main!(benches);
