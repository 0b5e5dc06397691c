use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use lspf::words::{fibonacci, thue_morse};
use lspf::{Lspf, Mode};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for i in [16, 20, 24] {
        let text = fibonacci(i);
        group.bench_with_input(BenchmarkId::new("fibonacci", text.len()), &text, |b, t| {
            b.iter(|| Lspf::new(black_box(t)).unwrap())
        });
    }
    group.finish();
}

fn bench_factors(c: &mut Criterion) {
    let mut group = c.benchmark_group("factors");
    for (name, text) in [("fibonacci", fibonacci(22)), ("thue_morse", thue_morse(15))] {
        let lspf = Lspf::new(&text).unwrap();
        for mode in [Mode::Prev, Mode::Succ] {
            group.bench_function(BenchmarkId::new(name, mode), |b| {
                b.iter(|| lspf.factors(black_box(mode)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_factors);
criterion_main!(benches);
