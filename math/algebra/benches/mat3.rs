use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rendiation_matrix_math::*;

fn criterion_benchmark(c: &mut Criterion) {
  let a = Mat3::<f32>::from_rows([[2., 1., 1.], [1., 3., 2.], [1., 0., 0.5]]);
  let b = Mat3::<f32>::from_rows([[55.55, 999.0, 12.21], [-1.5, -900.5, 44.421], [-0.1, 5.0, 0.5]]);

  c.bench_function("mat3 mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
  c.bench_function("mat3 det", |bench| bench.iter(|| black_box(b).det()));
  c.bench_function("mat3 inverse", |bench| {
    bench.iter(|| black_box(b).inverse())
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
