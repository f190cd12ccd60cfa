//! # quad-delaunay
//!
//! Incremental two dimensional Delaunay triangulations and their Voronoi diagrams,
//! stored in a single quad-edge mesh.
//!
//! Every undirected edge of the triangulation is represented by a *quad-edge*: its two
//! directions and the two directions of its dual edge, which connects the circumcenters
//! of the two adjacent triangles. Navigating the mesh only requires the rotation algebra
//! of a quad-edge (`rot`, `sym`) and a single ring pointer per directed edge (`o_next`),
//! see [EdgeHandle].
//!
//! Sites are inserted one at a time using the incremental algorithm of Guibas and
//! Stolfi: locate the containing triangle by walking towards the site, connect the site
//! to the triangle's corners and flip edges until the triangulation is Delaunay again.
//!
//! # Features
//!  - [DelaunayTriangulation] supports insertion, point location and Voronoi queries
//!  - Generic over `f32` and `f64` coordinates
//!  - Serde support with the `serde` feature
//!
//! # Example
//! ```
//! use quad_delaunay::{DelaunayTriangulation, Point2, TraversalMode};
//!
//! # fn main() -> Result<(), quad_delaunay::InsertionError> {
//! let mut triangulation = DelaunayTriangulation::<f64>::new();
//! for (x, y) in [(0.0, 0.0), (40.0, 0.0), (0.0, 30.0), (35.0, 35.0)] {
//!     triangulation.insert(Point2::new(x, y))?;
//! }
//!
//! // Walk over all sites, including the vertices of the bounding triangle
//! let num_vertices = triangulation
//!     .walk(triangulation.first_edge().fix(), TraversalMode::FirstEdgePerVertex)
//!     .count();
//! assert_eq!(num_vertices, 4 + 3);
//!
//! let cell = triangulation
//!     .voronoi_cell(Point2::new(2.0, 1.0))
//!     .expect("Triangulation is not empty");
//! assert_eq!(cell.site, Point2::new(0.0, 0.0));
//! # Ok(()) }
//! ```
//!
//! # Logging
//! Insertions and Voronoi recomputations are reported through the [tracing] crate on
//! the `debug` and `trace` levels. No subscriber is installed by this crate.

#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(missing_docs)]

mod config;
mod delaunay_core;
mod delaunay_triangulation;
mod point;
mod voronoi;

#[cfg(test)]
mod test_utilities;

pub use crate::config::{ConfigError, TriangulationConfig};
pub use crate::delaunay_core::{
    validate_coordinate, EdgeHandle, FixedEdgeHandle, InsertionError, MeshWalk, QuadEdgeMesh,
    TraversalMode,
};
pub use crate::delaunay_triangulation::{
    DelaunayTriangulation, InsertionOutcome, PositionInTriangulation,
};
pub use crate::point::{CoordNum, MeshPoint, Point2, PointRole};
pub use crate::voronoi::{Circumcircle, VoronoiCell};

pub use delaunay_core::iterators;

/// Low level operators for building quad-edge meshes by hand.
pub mod operators {
    pub use crate::delaunay_core::edge_operations::{
        connect, delete, flip, make_edge, make_edge_between, splice,
    };
}
