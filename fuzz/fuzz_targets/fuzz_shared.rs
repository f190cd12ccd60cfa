use quad_delaunay::{DelaunayTriangulation, Point2, TriangulationConfig};

#[derive(Clone, Copy, arbitrary::Arbitrary)]
pub struct FuzzPoint {
    pub x: f64,
    pub y: f64,
}

impl FuzzPoint {
    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

impl core::fmt::Debug for FuzzPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("Point2::new({:?}, {:?})", self.x, self.y))
    }
}

/// A point with small integral coordinates. Predicates on these points are exact.
#[derive(Clone, Copy, arbitrary::Arbitrary)]
pub struct FuzzIntPoint {
    pub x: i16,
    pub y: i16,
}

impl FuzzIntPoint {
    pub fn position(&self) -> Point2<f64> {
        Point2::new(f64::from(self.x % 500), f64::from(self.y % 500))
    }
}

impl core::fmt::Debug for FuzzIntPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let position = self.position();
        f.write_fmt(format_args!(
            "Point2::new({:?}, {:?})",
            position.x, position.y
        ))
    }
}

pub fn fuzz_triangulation(boundary_size: f64, epsilon: f64) -> DelaunayTriangulation<f64> {
    let config = TriangulationConfig::default()
        .boundary_size(boundary_size)
        .epsilon(epsilon);
    DelaunayTriangulation::with_config(config).unwrap()
}
