//! Benchmarks for piece segmentation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pieces::{idlize, Segmenter, Unit};

fn sample_text(size: usize) -> String {
    // Mixed ASCII and multi-byte prose
    let sentences = [
        "The quick brown fox jumps over the lazy dog. ",
        "Pack my box with five dozen liquor jugs. ",
        "Zwölf Boxkämpfer jagen Viktor quer über den großen Sylter Deich. ",
        "色は匂へど散りぬるを。",
        "Sphinx of black quartz, judge my vow. ",
    ];
    let mut text = String::with_capacity(size + 64);
    let mut i = 0;
    while text.len() < size {
        text.push_str(sentences[i % sentences.len()]);
        i += 1;
    }
    text
}

fn bench_cut(c: &mut Criterion) {
    let mut group = c.benchmark_group("cut");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);

        for (name, unit) in [("char", Unit::Char), ("grapheme", Unit::Grapheme)] {
            let segmenter = Segmenter::new(500, 4)
                .unwrap()
                .with_context(1)
                .with_unit(unit);

            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &text, |b, text| {
                b.iter(|| segmenter.cut(black_box(text)).count())
            });
        }
    }

    group.finish();
}

fn bench_count(c: &mut Criterion) {
    let text = sample_text(100_000);
    let segmenter = Segmenter::new(500, 4).unwrap();

    c.bench_function("count_100k", |b| b.iter(|| segmenter.count(black_box(&text))));
}

fn bench_idlize(c: &mut Criterion) {
    c.bench_function("idlize", |b| {
        b.iter(|| idlize(black_box("  Quarterly Report v2.1: Revenue & Growth!  ")))
    });
}

criterion_group!(benches, bench_cut, bench_count, bench_idlize);
criterion_main!(benches);
