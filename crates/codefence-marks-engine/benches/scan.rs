use codefence_marks_engine::{KeywordConfig, TextDocument, locate, scan};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    group.sample_size(10);

    let config = KeywordConfig::default();
    let doc = TextDocument::new(&common::generate_markdown_content(1000));
    group.bench_function("locate", |b| {
        b.iter(|| std::hint::black_box(locate(std::hint::black_box(&doc)).count()));
    });
    group.bench_function("scan", |b| {
        b.iter(|| std::hint::black_box(scan(std::hint::black_box(&doc), &config)));
    });

    let tail = TextDocument::new(&common::generate_unterminated_tail(1000));
    group.bench_function("scan_unterminated_tail", |b| {
        b.iter(|| std::hint::black_box(scan(std::hint::black_box(&tail), &config)));
    });

    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
