use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mcq_normalizer_engine::segmenting::{McqLineClassifier, segment};
use mcq_normalizer_engine::Config;
mod common;

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    group.sample_size(10);

    let lines = common::generate_quiz_lines(500);
    let classifier = McqLineClassifier::new();
    group.bench_function("classify_lines", |b| {
        b.iter(|| {
            for line in std::hint::black_box(&lines) {
                std::hint::black_box(classifier.classify(line));
            }
        });
    });

    group.finish();
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmenting");
    group.sample_size(10);

    let config = Config::default();
    for questions in [50, 500] {
        let lines = common::generate_quiz_lines(questions);
        group.bench_with_input(BenchmarkId::new("segment", questions), &lines, |b, lines| {
            b.iter(|| std::hint::black_box(segment(std::hint::black_box(lines), &config)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_segment);
criterion_main!(benches);
