//! Benchmark RANSAC line extraction.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rekha::{Node, PolarReading, Ransac, RansacConfig, fit_line};
use std::f32::consts::PI;
use std::hint::black_box;

/// Full scan of a rectangular room seen from `(robot_x, robot_y)`.
fn room_scan(
    room_width: f32,
    room_height: f32,
    robot_x: f32,
    robot_y: f32,
    num_points: usize,
) -> Vec<PolarReading> {
    let angle_increment = 2.0 * PI / num_points as f32;

    (0..num_points)
        .map(|i| {
            let angle = i as f32 * angle_increment - PI;
            let (sin_a, cos_a) = angle.sin_cos();
            let mut range = f32::MAX;

            // Right / left walls
            if cos_a > 1e-6 {
                range = range.min((room_width - robot_x) / cos_a);
            } else if cos_a < -1e-6 {
                range = range.min(-robot_x / cos_a);
            }
            // Top / bottom walls
            if sin_a > 1e-6 {
                range = range.min((room_height - robot_y) / sin_a);
            } else if sin_a < -1e-6 {
                range = range.min(-robot_y / sin_a);
            }

            PolarReading::new(angle, range)
        })
        .collect()
}

fn bench_compute_scan(c: &mut Criterion) {
    let scan = room_scan(6.0, 4.0, 2.5, 1.5, 360);
    let mut ransac = Ransac::new(RansacConfig::default().with_seed(42));

    c.bench_function("compute_scan_360pts", |b| {
        b.iter(|| {
            let stats = ransac.compute_scan(black_box(&scan));
            black_box(stats)
        })
    });
}

fn bench_compute_scan_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_scan_points");

    for num_points in [180, 360, 720].iter() {
        let scan = room_scan(6.0, 4.0, 2.5, 1.5, *num_points);
        let config = RansacConfig::default()
            .with_seed(42)
            .with_max_nodes(*num_points);
        let mut ransac = Ransac::new(config);

        group.bench_with_input(
            BenchmarkId::from_parameter(num_points),
            num_points,
            |b, _| {
                b.iter(|| {
                    let stats = ransac.compute_scan(black_box(&scan));
                    black_box(stats)
                })
            },
        );
    }

    group.finish();
}

fn bench_fit_line(c: &mut Criterion) {
    let nodes: Vec<Node> = (0..100)
        .map(|i| {
            let x = i as f32 * 0.02;
            Node::new(x, 0.5 * x + 1.0, 0.0)
        })
        .collect();

    c.bench_function("fit_line_100pts", |b| {
        b.iter(|| black_box(fit_line(black_box(&nodes))))
    });
}

criterion_group!(
    benches,
    bench_compute_scan,
    bench_compute_scan_sizes,
    bench_fit_line
);
criterion_main!(benches);
