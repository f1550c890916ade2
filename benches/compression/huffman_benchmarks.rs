use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huffcode::huffman::{
    build_tree, count_frequencies, count_frequencies_parallel, encode, generate_codes,
    HuffmanConfig, HuffmanEncoder, TieBreak,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_input(size: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size)
        .map(|_| {
            // skewed towards low byte values so code lengths vary
            let a: u8 = rng.gen();
            let b: u8 = rng.gen();
            a.min(b)
        })
        .collect()
}

fn bench_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_frequencies");
    for size in [10_000, 1_000_000] {
        let input = generate_input(size);
        group.bench_with_input(BenchmarkId::new("sequential", size), &input, |b, input| {
            b.iter(|| count_frequencies(black_box(input).iter().copied()))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &input, |b, input| {
            b.iter(|| count_frequencies_parallel(black_box(input), 1 << 16).unwrap())
        });
    }
    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let input = generate_input(100_000);
    let frequencies = count_frequencies(input.iter().copied());
    let root = build_tree(&frequencies, TieBreak::Sequence).unwrap();
    let codes = generate_codes(&root);

    c.bench_function("build_tree", |b| {
        b.iter(|| build_tree(black_box(&frequencies), TieBreak::Sequence).unwrap())
    });
    c.bench_function("build_tree_deepest", |b| {
        b.iter(|| build_tree(black_box(&frequencies), TieBreak::Deepest).unwrap())
    });
    c.bench_function("generate_codes", |b| {
        b.iter(|| generate_codes(black_box(&root)))
    });
    c.bench_function("encode", |b| {
        b.iter(|| encode(black_box(&input).iter().copied(), &codes).unwrap())
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let encoder = HuffmanEncoder::new(HuffmanConfig::default()).unwrap();
    for size in [1_000, 100_000] {
        let input = generate_input(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| encoder.encode(black_box(input)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_counting, bench_stages, bench_pipeline);
criterion_main!(benches);
