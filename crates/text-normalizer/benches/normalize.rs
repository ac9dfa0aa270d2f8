use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use text_normalizer::{Lexicon, Normalizer, Registry};
use tn_core::TextNormalizer;

const ALL: &[&str] = &[
    "numbers",
    "ordinals",
    "currency",
    "units",
    "dates",
    "time",
    "abbreviations",
];

const SENTENCE: &str =
    "डॉ. शर्मा 15/08/2024 को सुबह 10:30 बजे आए, 5 kg चावल ₹1,250.50 में लिया और वर्ष 1990 की 21वीं बरसी मनाई।";

fn bench_build(c: &mut Criterion) {
    c.bench_function("registry_builtin", |b| {
        b.iter(|| Registry::builtin().unwrap());
    });
    c.bench_function("lexicon_parse", |b| {
        b.iter(|| Lexicon::hindi().unwrap());
    });
}

fn bench_normalize(c: &mut Criterion) {
    let normalizer = Normalizer::new().unwrap();
    let mut group = c.benchmark_group("normalize");

    // same sentence repeated N times
    for repeat in [1usize, 16, 128] {
        let text = vec![SENTENCE; repeat].join(" ");
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("all_categories", repeat), &text, |b, text| {
            b.iter(|| {
                normalizer
                    .normalize(black_box(text), ALL, "hi-IN")
                    .unwrap()
            });
        });
        group.bench_with_input(BenchmarkId::new("numbers_only", repeat), &text, |b, text| {
            b.iter(|| {
                normalizer
                    .normalize(black_box(text), &["numbers"], "hi-IN")
                    .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_normalize);
criterion_main!(benches);
