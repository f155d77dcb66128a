//! Criterion benchmarks for surface_core.
//!
//! Measures the Gauss-Seidel solve, spline construction across breakpoint
//! counts, and surface queries on each evaluation path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use surface_core::math::interpolators::CubicSplineInterpolator;
use surface_core::math::solvers::{GaussSeidelSolver, LinearSystem, SolverConfig};
use surface_core::surface::{GridTable, SurfaceEvaluator};

/// Diagonally dominant system of size `n`.
fn generate_system(n: usize) -> LinearSystem<f64> {
    let matrix: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| if i == j { n as f64 } else { 1.0 / (1 + i + j) as f64 })
                .collect()
        })
        .collect();
    let rhs: Vec<f64> = (0..n).map(|i| i as f64).collect();
    LinearSystem::new(matrix, rhs).unwrap()
}

/// Uniformly spaced breakpoints sampling a smooth curve.
fn generate_1d_data(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|&x| (0.5 * x).sin()).collect();
    (xs, ys)
}

fn generate_surface(rows: usize, cols: usize) -> SurfaceEvaluator<f64> {
    let axis_a: Vec<f64> = (0..rows).map(|i| 2.0 * i as f64).collect();
    let axis_m: Vec<f64> = (0..cols).map(|j| 1.0 + j as f64).collect();
    let values: Vec<Vec<f64>> = axis_a
        .iter()
        .map(|&a| axis_m.iter().map(|&m| 0.02 * a / m).collect())
        .collect();
    let table = GridTable::from_rows(axis_a, axis_m, values).unwrap();
    SurfaceEvaluator::with_config(table, Default::default()).unwrap()
}

fn bench_gauss_seidel(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss_seidel");
    let solver = GaussSeidelSolver::new(SolverConfig::new(1e-10));

    for size in [8, 32, 64] {
        let system = generate_system(size);
        group.bench_with_input(BenchmarkId::new("solve", size), &system, |b, system| {
            b.iter(|| solver.solve_system(black_box(system)).unwrap());
        });
    }

    group.finish();
}

fn bench_spline_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("cubic_spline");
    group.sample_size(10);

    for size in [4, 6, 8] {
        let (xs, ys) = generate_1d_data(size);
        group.bench_with_input(
            BenchmarkId::new("construction", size),
            &(&xs, &ys),
            |b, (xs, ys)| {
                b.iter(|| CubicSplineInterpolator::new(black_box(xs), black_box(ys)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_surface_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_query");
    let surface = generate_surface(7, 6);

    group.bench_function("exact", |b| {
        b.iter(|| surface.query(black_box(4.0), black_box(3.0)).unwrap());
    });
    group.bench_function("along_a", |b| {
        b.iter(|| surface.query(black_box(5.0), black_box(3.0)).unwrap());
    });
    group.bench_function("along_m", |b| {
        b.iter(|| surface.query(black_box(4.0), black_box(3.5)).unwrap());
    });
    group.bench_function("nested", |b| {
        b.iter(|| surface.query(black_box(5.0), black_box(3.5)).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_gauss_seidel,
    bench_spline_construction,
    bench_surface_query
);
criterion_main!(benches);
