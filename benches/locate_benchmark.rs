use std::time::Duration;

use criterion::{measurement::WallTime, BenchmarkGroup, Criterion};
use quad_delaunay::{DelaunayTriangulation, Point2};

use crate::benchmark_utilities::{uniform_distribution, uniform_f64, RANGE, SEED2};

pub fn locate_benchmark(c: &mut Criterion) {
    fn single_locate_benchmark<I: IntoIterator<Item = Point2<f64>>>(
        group: &mut BenchmarkGroup<WallTime>,
        name: String,
        num_sites: usize,
        queries: I,
    ) {
        let mut triangulation = DelaunayTriangulation::new();
        for site in uniform_distribution(*SEED2, RANGE).take(num_sites) {
            triangulation.insert(site).unwrap();
        }

        let mut queries = queries.into_iter();

        group.bench_function(name, |b| {
            b.iter_with_setup(
                || queries.next().unwrap(),
                |point| triangulation.locate(point),
            )
        });
    }

    let mut group = c.benchmark_group("locate benchmark (uniform)");
    group
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(4));

    for num_sites in [250, 500, 1000, 2000] {
        single_locate_benchmark(
            &mut group,
            format!("locate in {} sites, f64", num_sites),
            num_sites,
            uniform_f64(),
        );
    }

    group.finish();
}
