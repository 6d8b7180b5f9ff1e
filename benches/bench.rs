//! Criterion benchmarks for the Exude analyzers.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use exude::analysis::analyzer::AnalyzerKind;
use exude::analysis::pipeline::TokenPipeline;
use exude::config::ToolkitConfig;
use exude::toolkit::Toolkit;
use std::hint::black_box;

/// Generate test texts for benchmarking.
fn generate_test_texts(count: usize) -> Vec<String> {
    let words = [
        "The",
        "quick",
        "foxes",
        "are",
        "jumping",
        "over",
        "lazy",
        "dogs.",
        "Authorities",
        "reported",
        "new",
        "findings",
        "on",
        "technology",
        "and",
        "innovation!",
        "damn",
        "running",
        "quickly,",
        "development",
    ];

    let mut texts = Vec::with_capacity(count);
    for i in 0..count {
        let length = 20 + (i % 80);
        let text: Vec<&str> = (0..length)
            .map(|j| words[(i * 7 + j * 13) % words.len()])
            .collect();
        texts.push(text.join(" "));
    }

    texts
}

/// Benchmark the token pipeline on its own.
fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");

    let pipeline = TokenPipeline::new().unwrap();
    let texts = generate_test_texts(100);

    group.bench_function("tokenize_normalized", |b| {
        b.iter(|| black_box(pipeline.tokenize(black_box(&texts[0]), false)))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("aligned_tokens_batch", |b| {
        b.iter(|| {
            for text in &texts {
                let _ = black_box(pipeline.tokens(black_box(text)));
            }
        })
    });

    group.finish();
}

/// Benchmark every analyzer over the same batch.
fn bench_analyzers(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyzers");

    let toolkit = Toolkit::new(ToolkitConfig::default()).unwrap();
    let texts = generate_test_texts(100);

    group.throughput(Throughput::Elements(texts.len() as u64));
    for kind in AnalyzerKind::ALL {
        group.bench_function(kind.name(), |b| {
            b.iter(|| {
                for text in &texts {
                    let _ = black_box(toolkit.analyze(kind, black_box(text)));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenization, bench_analyzers);
criterion_main!(benches);
