#![allow(missing_docs)]
use crate::{Point2, TriangulationConfig};
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;

pub const SEED: &[u8; 32] = b"wPYxAkIiHcEmSBAxQFoXFrpYToCe1B71";
pub const SEED2: &[u8; 32] = b"14LzG37Y9EHTcmLW8vBDqWwtYsCeVVyF";

pub fn random_points_in_range(range: f64, size: usize, seed: &[u8; 32]) -> Vec<Point2<f64>> {
    let mut rng = rand::rngs::StdRng::from_seed(*seed);
    let range = Uniform::new(-range, range);
    let mut points = Vec::with_capacity(size);
    for _ in 0..size {
        let x = range.sample(&mut rng);
        let y = range.sample(&mut rng);
        points.push(Point2::new(x, y));
    }
    points
}

/// Random points with integral coordinates in `[-range, range]`.
pub fn random_integer_points(range: i32, size: usize, seed: &[u8; 32]) -> Vec<Point2<f64>> {
    let mut rng = rand::rngs::StdRng::from_seed(*seed);
    let range = Uniform::new_inclusive(-range, range);
    (0..size)
        .map(|_| Point2::new(range.sample(&mut rng) as f64, range.sample(&mut rng) as f64))
        .collect()
}

/// A `size` x `size` grid starting at the origin.
pub fn grid_points(size: usize, spacing: f64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(size * size);
    for x in 0..size {
        for y in 0..size {
            points.push(Point2::new(x as f64 * spacing, y as f64 * spacing));
        }
    }
    points
}

/// Configuration for sites with integral coordinates within `[-500, 500]`.
///
/// All predicates are evaluated without rounding errors for these sites and the on-edge
/// test only accepts points that are exactly collinear.
pub fn exact_config() -> TriangulationConfig<f64> {
    TriangulationConfig::default()
        .boundary_size(2000.0)
        .epsilon(1.0e-9)
}
