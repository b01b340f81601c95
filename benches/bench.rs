// Criterion benchmarks for contact form validation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use awareness_site::core::validate_submission;
use awareness_site::models::ContactSubmission;

fn bench_validation(c: &mut Criterion) {
    let cases = [
        ("valid", ContactSubmission::new("Ada", "ada@example.com", "Hello")),
        ("empty", ContactSubmission::default()),
        ("bad_email", ContactSubmission::new("Ada", "not-an-email", "Hello")),
        (
            "long_message",
            ContactSubmission::new("Ada", "ada@example.com", "I would like to volunteer. ".repeat(200)),
        ),
    ];

    let mut group = c.benchmark_group("validate_submission");
    for (name, submission) in cases.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), submission, |b, s| {
            b.iter(|| validate_submission(black_box(s)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_validation);
criterion_main!(benches);
