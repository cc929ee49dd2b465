use cubetree_core::{Cube, Point3i};
use cubetree_partition::{Covering, PrOctree};

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

const RANGE: i64 = 1 << 10;
const NUM_POINTS: usize = 10_000;

fn random_points(n: usize) -> Vec<Point3i> {
    let mut rng = StdRng::seed_from_u64(42);

    (0..n)
        .map(|_| {
            Point3i::new(
                rng.gen_range(-RANGE, RANGE + 1),
                rng.gen_range(-RANGE, RANGE + 1),
                rng.gen_range(-RANGE, RANGE + 1),
            )
        })
        .collect()
}

fn filled_octree(points: &[Point3i]) -> PrOctree<usize> {
    let mut octree = PrOctree::new(8, 10, RANGE).unwrap();
    for (i, p) in points.iter().enumerate() {
        octree.insert_at(i, *p);
    }

    octree
}

fn octree_insert(c: &mut Criterion) {
    let points = random_points(NUM_POINTS);
    c.bench_function("octree_insert", |b| {
        b.iter_batched(
            || PrOctree::new(8, 10, RANGE).unwrap(),
            |mut octree| {
                for (i, p) in points.iter().enumerate() {
                    octree.insert_at(i, *p);
                }
                octree
            },
            BatchSize::SmallInput,
        );
    });
}

fn octree_contains_at(c: &mut Criterion) {
    let points = random_points(NUM_POINTS);
    let octree = filled_octree(&points);
    c.bench_function("octree_contains_at", |b| {
        b.iter(|| {
            for (i, p) in points.iter().enumerate() {
                black_box(octree.contains_at(&i, p.x(), p.y(), p.z()));
            }
        });
    });
}

fn octree_remove_at(c: &mut Criterion) {
    let points = random_points(NUM_POINTS);
    let octree = filled_octree(&points);
    c.bench_function("octree_remove_at", |b| {
        b.iter_batched(
            || octree.clone(),
            |mut octree| {
                for (i, p) in points.iter().enumerate() {
                    octree.remove_at(&i, p.x(), p.y(), p.z());
                }
                octree
            },
            BatchSize::SmallInput,
        );
    });
}

fn octree_query_box(c: &mut Criterion) {
    let octree = filled_octree(&random_points(NUM_POINTS));
    let (min, max) = (-RANGE / 4, RANGE / 4);
    let in_box = move |cube: &Cube| {
        let (cmin, cmax) = (cube.min(), cube.max());
        if cmax.0.iter().any(|c| *c < min) || cmin.0.iter().any(|c| *c > max) {
            Covering::Outside
        } else if cmin.is_within(min, max) && cmax.is_within(min, max) {
            Covering::Inside
        } else {
            Covering::Partial
        }
    };
    c.bench_function("octree_query_box", |b| {
        b.iter(|| black_box(octree.query_filtered(&in_box, |p| p.is_within(min, max)).len()));
    });
}

criterion_group!(
    benches,
    octree_insert,
    octree_contains_at,
    octree_remove_at,
    octree_query_box
);
criterion_main!(benches);
