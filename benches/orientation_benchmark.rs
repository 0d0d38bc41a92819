use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

use crystal_orientation::misorientation::misorientation_angle;
use crystal_orientation::orientation::{euler_to_matrix, matrix_to_euler, random_euler, EulerAngles};
use crystal_orientation::symmetries::SymmetryClass;

/// Benchmarks for the per-grain hot paths: conversions, sampling, and
/// symmetry-reduced misorientation
fn bench_orientation_hot_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("orientation_hot_paths");

    let euler_1 = EulerAngles::from_degrees(10.0, 40.0, 70.0);
    let euler_2 = EulerAngles::from_degrees(80.0, 20.0, 110.0);

    group.bench_function("euler_matrix_round_trip", |b| {
        b.iter(|| matrix_to_euler(&euler_to_matrix(black_box(&euler_1))));
    });

    group.bench_function("random_euler", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        b.iter(|| random_euler(black_box(&mut rng)));
    });

    for class in [
        SymmetryClass::Cubic,
        SymmetryClass::Hexagonal,
        SymmetryClass::Tetrahedral,
    ] {
        group.bench_function(format!("misorientation_{}", class.as_str()), |b| {
            b.iter(|| {
                misorientation_angle(black_box(&euler_1), black_box(&euler_2), black_box(class))
            });
        });
    }

    group.finish();
}

criterion_group!(orientation_benches, bench_orientation_hot_paths);
criterion_main!(orientation_benches);
