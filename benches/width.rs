//! Width benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mochi_width::{ClipOptions, DatasetCollection, TextMeasure, TextWrapper};

fn bench_wcswidth(c: &mut Criterion) {
    let mut group = c.benchmark_group("wcswidth");
    let dataset = DatasetCollection::builtin().latest();

    // Plain ASCII takes the fast path
    let ascii = "Hello, World! ".repeat(1000);
    group.throughput(Throughput::Bytes(ascii.len() as u64));
    group.bench_function("ascii", |b| {
        b.iter(|| black_box(dataset.wcswidth(black_box(&ascii), None)))
    });

    let cjk = "コンニチハ、世界！".repeat(500);
    group.throughput(Throughput::Bytes(cjk.len() as u64));
    group.bench_function("cjk", |b| {
        b.iter(|| black_box(dataset.wcswidth(black_box(&cjk), None)))
    });

    let emoji = "👨\u{200D}👩\u{200D}👧 🇺🇸 👍🏻 ❤\u{FE0F} ".repeat(300);
    group.throughput(Throughput::Bytes(emoji.len() as u64));
    group.bench_function("emoji", |b| {
        b.iter(|| black_box(dataset.wcswidth(black_box(&emoji), None)))
    });

    let devanagari = "क्षत्रिय नमस्ते ".repeat(500);
    group.throughput(Throughput::Bytes(devanagari.len() as u64));
    group.bench_function("devanagari", |b| {
        b.iter(|| black_box(dataset.wcswidth(black_box(&devanagari), None)))
    });

    group.finish();
}

fn bench_graphemes(c: &mut Criterion) {
    let mut group = c.benchmark_group("graphemes");
    let dataset = DatasetCollection::builtin().latest();

    let mixed = "Hello, 世界! 👨\u{200D}👩\u{200D}👧 cafe\u{301} ".repeat(300);
    group.throughput(Throughput::Bytes(mixed.len() as u64));

    group.bench_function("forward", |b| {
        b.iter(|| black_box(dataset.graphemes(black_box(&mixed)).count()))
    });
    group.bench_function("reverse", |b| {
        b.iter(|| black_box(dataset.graphemes_rev(black_box(&mixed)).count()))
    });

    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    let dataset = DatasetCollection::builtin().latest();
    let measure = TextMeasure::new(dataset);

    // Typical colored terminal output
    let styled = "Line: \x1b[32mOK\x1b[0m\tdone 中文 \x1b[1;31mERROR\x1b[0m ".repeat(200);
    group.throughput(Throughput::Bytes(styled.len() as u64));

    group.bench_function("width", |b| {
        b.iter(|| black_box(measure.width(black_box(&styled))))
    });
    group.bench_function("clip", |b| {
        let options = ClipOptions::default();
        b.iter(|| black_box(measure.clip(black_box(&styled), 100, 900, &options)))
    });
    group.bench_function("wrap", |b| {
        let wrapper = TextWrapper::new(dataset, 72);
        b.iter(|| black_box(wrapper.wrap(black_box(&styled))))
    });

    group.finish();
}

criterion_group!(benches, bench_wcswidth, bench_graphemes, bench_text);

criterion_main!(benches);
