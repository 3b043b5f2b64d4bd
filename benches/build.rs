use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use satree::{build, Point};

fn random_points(n: usize, dim: usize) -> Vec<Point> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| Point::new((0..dim).map(|_| rng.gen_range(-1000.0..1000.0)).collect()))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[100usize, 1_000, 10_000] {
        group.bench_function(format!("n={n}"), |b| {
            b.iter_batched(
                || random_points(n, 3),
                |points| black_box(build(points).unwrap()),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
