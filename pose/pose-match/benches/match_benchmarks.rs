//! Benchmarks for the offset search.
//!
//! Run with: cargo bench -p pose-match
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p pose-match -- --save-baseline main
//! 2. After changes: cargo bench -p pose-match -- --baseline main

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use pose_match::{MatchParams, OffsetMatcher, SpatialHash};
use pose_types::{Pose, UnitQuaternion, Vector3};

// =============================================================================
// Test Data Generation
// =============================================================================

/// Square grid of `side × side` poses, one unit apart, each with a small yaw.
fn create_grid(side: u32) -> Vec<Pose> {
    let mut poses = Vec::with_capacity((side * side) as usize);
    for i in 0..side {
        for j in 0..side {
            let yaw = f64::from((i + j) % 4) * std::f64::consts::FRAC_PI_2;
            poses.push(Pose::from_trs(
                &Vector3::new(f64::from(i), f64::from(j), 0.0),
                &UnitQuaternion::from_euler_angles(0.0, 0.0, yaw),
                &Vector3::new(1.0, 1.0, 1.0),
            ));
        }
    }
    poses
}

/// L-shaped three-entry model that matches the grid's yaw pattern.
fn create_model(grid: &[Pose], side: u32) -> Vec<Pose> {
    let side = side as usize;
    let anchor_inv = grid[0].inverse().unwrap_or_default();
    [grid[0], grid[1], grid[side]]
        .iter()
        .map(|p| &anchor_inv * p)
        .collect()
}

// =============================================================================
// Search Benchmarks
// =============================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("FindAllOffsets");

    for side in [16_u32, 32, 64] {
        let space = create_grid(side);
        let model = create_model(&space, side);
        group.throughput(Throughput::Elements(space.len() as u64));

        let sequential = OffsetMatcher::new(MatchParams::new());
        group.bench_with_input(BenchmarkId::new("sequential", side), &space, |b, space| {
            b.iter(|| sequential.run(black_box(&model), black_box(space)));
        });

        let parallel = OffsetMatcher::new(MatchParams::new().with_parallel(true));
        group.bench_with_input(BenchmarkId::new("parallel", side), &space, |b, space| {
            b.iter(|| parallel.run(black_box(&model), black_box(space)));
        });
    }

    group.finish();
}

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("SpatialHash");

    let space = create_grid(64);
    group.throughput(Throughput::Elements(space.len() as u64));

    group.bench_function("build", |b| {
        b.iter(|| SpatialHash::build(black_box(&space), black_box(1e-3)));
    });

    let hash = SpatialHash::build(&space, 1e-3);
    group.bench_function("contains_match", |b| {
        b.iter(|| {
            space
                .iter()
                .filter(|p| hash.contains_match(black_box(p)))
                .count()
        });
    });

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_search, bench_hash);
criterion_main!(benches);
