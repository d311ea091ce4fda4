use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use rect_overlap::geometry::primitives::Rectangle;

criterion_main!(benches);
criterion_group!(benches, overlap_bench);

const N_PAIRS_PER_ITER: usize = 1000;

/// Benchmark how many overlap tests can be performed every second,
/// for rectangles sharing an orientation (2 candidate axes) and rectangles with arbitrary orientations (4 candidate axes).
fn overlap_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap_1k");
    group.throughput(criterion::Throughput::Elements(N_PAIRS_PER_ITER as u64));

    for (name, random_rotation) in [("shared_orientation", false), ("arbitrary_orientation", true)] {
        let mut rng = SmallRng::seed_from_u64(0);
        let pairs = (0..N_PAIRS_PER_ITER)
            .map(|_| {
                let mut sample = || {
                    let rotation = match random_rotation {
                        true => rng.random_range(0.0..360.0),
                        false => 0.0,
                    };
                    Rectangle::new(
                        rng.random_range(-10.0..10.0),
                        rng.random_range(-10.0..10.0),
                        rng.random_range(0.1..5.0),
                        rng.random_range(0.1..5.0),
                        rotation,
                    )
                };
                (sample(), sample())
            })
            .collect::<Vec<_>>();

        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| {
                pairs
                    .iter()
                    .filter(|(r1, r2)| std::hint::black_box(r1.overlapped(r2)))
                    .count()
            })
        });
    }
    group.finish();
}
