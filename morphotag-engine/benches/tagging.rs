//! Tagging throughput benchmarks
//!
//! Run with: cargo bench --bench tagging

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use morphotag_engine::{Input, TagOptions, Tagger, Tokenizer, TokenizerKind};
use std::hint::black_box;

const DEMO_MODEL: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../models/czech-demo.toml");

/// Generate Czech text of roughly the given size
fn generate_text(size: usize) -> String {
    let base = "Je zima. Děti pijí mléko, a venku bude sněžit. Praha je v zimě krásná! ";
    let mut text = base.repeat(size / base.len() + 1);
    let mut end = size.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    text
}

fn bench_flat_vs_grouped(c: &mut Criterion) {
    let mut group = c.benchmark_group("tag");
    let mut tagger = Tagger::load(DEMO_MODEL, true).expect("demo model");

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("flat", size), &text, |b, text| {
            b.iter(|| {
                tagger
                    .tag(Input::raw(black_box(text.as_str())), TagOptions::with_guesser())
                    .unwrap()
                    .count()
            });
        });
        group.bench_with_input(BenchmarkId::new("grouped", size), &text, |b, text| {
            b.iter(|| {
                tagger
                    .tag_sentences(Input::raw(black_box(text.as_str())), TagOptions::with_guesser())
                    .unwrap()
                    .count()
            });
        });
    }

    group.finish();
}

fn bench_pretokenized(c: &mut Criterion) {
    let mut tagger = Tagger::load(DEMO_MODEL, false).expect("demo model");
    let mut tokenizer = Tokenizer::new(TokenizerKind::Czech).expect("czech tokenizer");
    let sentences: Vec<Vec<String>> = tokenizer.apply(&generate_text(102_400)).collect();

    c.bench_function("tag_pretokenized_100k", |b| {
        b.iter(|| {
            tagger
                .tag(Input::Segmented(black_box(sentences.clone())), TagOptions::default())
                .unwrap()
                .count()
        });
    });
}

fn bench_tokenize(c: &mut Criterion) {
    let text = generate_text(102_400);
    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Bytes(text.len() as u64));

    for kind in [TokenizerKind::Generic, TokenizerKind::Czech, TokenizerKind::English] {
        let mut tokenizer = Tokenizer::new(kind).expect("tokenizer");
        group.bench_function(kind.name(), |b| {
            b.iter(|| tokenizer.apply(black_box(&text)).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_flat_vs_grouped, bench_pretokenized, bench_tokenize);
criterion_main!(benches);
