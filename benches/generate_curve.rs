use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fractal_curves::{CurveKinds, FractalParameters, generate_curve};

fn bench_generate_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_curve");

    for kind in CurveKinds::ALL.iter().copied() {
        for depth in [4, 7, 9] {
            let params = FractalParameters::new(depth, 4)
                .validate()
                .expect("benchmark parameters are in range");

            group.bench_with_input(
                BenchmarkId::new(kind.display_name(), depth),
                &params,
                |b, &params| {
                    b.iter(|| {
                        generate_curve(
                            black_box(kind),
                            black_box(params),
                            kind.default_start(),
                            kind.default_size(),
                        )
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_generate_curve);
criterion_main!(benches);
