//! Evaluation benchmarks for kmt.
//!
//! Measures the parallel sequence engine across sizes and chunk sizes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kmtc::{AnalysisOptions, Analyzer};

fn pi_program(n: u64) -> String {
    format!(
        "var s = map({{0, {n}}}, i -> (-1)^i / (2 * i + 1))\nout 4 * reduce(s, 0, x y -> x + y)"
    )
}

fn bench_fused_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("fused_reduce");
    for n in [10_000u64, 1_000_000] {
        let source = format!("out reduce(map({{1, {n}}}, i -> i * i), 0, a b -> a + b)");
        let analyzer = Analyzer::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &source, |b, src| {
            b.iter(|| analyzer.analyze(black_box(src)));
        });
    }
    group.finish();
}

fn bench_pi(c: &mut Criterion) {
    let mut group = c.benchmark_group("pi_chunk_size");
    let source = pi_program(1_000_000);
    for chunk in [1_000usize, 10_000, 100_000] {
        let analyzer = Analyzer::new(AnalysisOptions::default().with_chunk_size(chunk));
        group.bench_with_input(BenchmarkId::from_parameter(chunk), &source, |b, src| {
            b.iter(|| analyzer.analyze(black_box(src)));
        });
    }
    group.finish();
}

fn bench_front_end(c: &mut Criterion) {
    let source = (0..500)
        .map(|i| format!("var v{i} = reduce(map({{1, {i}}}, x -> x * 2 + 1), 0, a b -> a + b)"))
        .collect::<Vec<_>>()
        .join("\n");
    c.bench_function("lex_parse_bind_500_vars", |b| {
        b.iter(|| {
            let lexed = kmtc::lex(black_box(&source));
            let parsed = kmt_parse::parse(&lexed.tokens);
            kmt_types::bind(&parsed.program)
        });
    });
}

criterion_group!(benches, bench_fused_reduce, bench_pi, bench_front_end);
criterion_main!(benches);
