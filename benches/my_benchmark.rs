use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_frequency::analyze_text;

fn benchmark_analyze_text(c: &mut Criterion) {
    let text = "It was the best of times, it was the worst of times, it was the age of \
                wisdom, it was the age of foolishness, it was the epoch of belief, it \
                was the epoch of incredulity.";

    c.bench_function("analyze_text", |b| {
        b.iter(|| analyze_text(black_box(text)))
    });
}

criterion_group!(benches, benchmark_analyze_text);
criterion_main!(benches);
