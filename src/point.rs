use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coordinate type that can be used with a triangulation.
///
/// All predicates are evaluated directly in this type, there is no conversion into a
/// wider or exact representation. This type should usually be either `f32` or `f64`.
pub trait CoordNum: Float + Into<f64> + From<f32> + std::fmt::Debug {}

impl<T> CoordNum for T where T: Float + Into<f64> + From<f32> + std::fmt::Debug {}

/// A two dimensional point.
///
/// This is the basic type used for defining positions.
#[derive(Debug, PartialEq, Eq, PartialOrd, Clone, Copy, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Point2<S> {
    /// The point's x coordinate
    pub x: S,
    /// The point's y coordinate
    pub y: S,
}

impl<S> Point2<S> {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Point2 { x, y }
    }
}

impl<S: CoordNum> Point2<S> {
    /// Returns the squared distance of this point and another point.
    #[inline]
    pub fn distance_2(&self, other: Self) -> S {
        self.sub(other).length2()
    }

    /// Returns the distance of this point and another point.
    #[inline]
    pub fn distance(&self, other: Self) -> S {
        self.distance_2(other).sqrt()
    }

    pub(crate) fn add(&self, other: Self) -> Self {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub(crate) fn sub(&self, other: Self) -> Self {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    pub(crate) fn length2(&self) -> S {
        self.x * self.x + self.y * self.y
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<S: CoordNum> From<Point2<S>> for [S; 2] {
    #[inline]
    fn from(point: Point2<S>) -> Self {
        [point.x, point.y]
    }
}

impl<S: CoordNum> From<Point2<S>> for (S, S) {
    #[inline]
    fn from(point: Point2<S>) -> (S, S) {
        (point.x, point.y)
    }
}

impl<S: CoordNum> From<[S; 2]> for Point2<S> {
    #[inline]
    fn from(source: [S; 2]) -> Self {
        Self::new(source[0], source[1])
    }
}

impl<S: CoordNum> From<(S, S)> for Point2<S> {
    #[inline]
    fn from(source: (S, S)) -> Self {
        Self::new(source.0, source.1)
    }
}

/// The role a [MeshPoint] plays within the mesh.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub enum PointRole {
    /// No finite position is known.
    ///
    /// Used for faces adjacent to the bounding triangle: their Voronoi vertex lies
    /// "at infinity". Freshly created dual edge slots carry this role as well until the
    /// Voronoi diagram is recomputed.
    #[default]
    Undetermined,
    /// A site (vertex) of the Delaunay triangulation.
    Site,
    /// The circumcenter of a triangle, i.e. a vertex of the Voronoi diagram.
    Face,
}

/// A position tagged with the role it plays in the mesh.
///
/// Primal edge slots carry sites, dual edge slots carry face points. Two mesh points are
/// equal if and only if both their coordinates and their roles match.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct MeshPoint<S> {
    /// The point's coordinates
    pub position: Point2<S>,
    /// The point's role
    pub role: PointRole,
}

impl<S: CoordNum> MeshPoint<S> {
    /// Creates a point with the [PointRole::Site] role.
    pub fn site(position: Point2<S>) -> Self {
        MeshPoint {
            position,
            role: PointRole::Site,
        }
    }

    /// Creates a point with the [PointRole::Face] role.
    pub fn face(position: Point2<S>) -> Self {
        MeshPoint {
            position,
            role: PointRole::Face,
        }
    }

    /// The sentinel used for faces without a finite Voronoi vertex.
    pub fn undetermined() -> Self {
        MeshPoint {
            position: Point2::new(S::zero(), S::zero()),
            role: PointRole::Undetermined,
        }
    }

    /// Returns `true` if this point is a site.
    pub fn is_site(&self) -> bool {
        self.role == PointRole::Site
    }

    /// Returns `true` if this point is a finite Voronoi vertex.
    pub fn is_face(&self) -> bool {
        self.role == PointRole::Face
    }
}
