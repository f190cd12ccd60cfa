//! Read-only queries for drawing a triangulation and its Voronoi diagram.
//!
//! All queries are built on top of [DelaunayTriangulation::walk] and skip any geometry
//! connected to the bounding triangle.

use crate::delaunay_core::TraversalMode;
use crate::{CoordNum, DelaunayTriangulation, MeshPoint, Point2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The circumcircle of a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Circumcircle<S> {
    /// The circle's center, a vertex of the Voronoi diagram.
    pub center: Point2<S>,
    /// The circle's radius.
    pub radius: S,
}

/// The Voronoi cell of a site.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiCell<S> {
    /// The site owning this cell.
    pub site: Point2<S>,
    /// The Voronoi vertices around the site, in counterclockwise order.
    ///
    /// Vertices of faces adjacent to the bounding triangle have no finite position and
    /// are [undetermined](crate::PointRole::Undetermined).
    pub vertices: Vec<MeshPoint<S>>,
}

impl<S: CoordNum> VoronoiCell<S> {
    /// Returns `true` if all vertices of this cell are finite.
    pub fn is_bounded(&self) -> bool {
        self.vertices.iter().all(|vertex| vertex.is_face())
    }

    /// Returns the positions of the cell's finite vertices.
    pub fn polygon(&self) -> Vec<Point2<S>> {
        self.vertices
            .iter()
            .filter(|vertex| vertex.is_face())
            .map(|vertex| vertex.position)
            .collect()
    }
}

impl<S: CoordNum> DelaunayTriangulation<S> {
    /// Returns the positions of all inserted sites.
    pub fn sites(&self) -> Vec<Point2<S>> {
        self.walk(self.first_edge().fix(), TraversalMode::FirstEdgePerVertex)
            .map(|edge| edge.origin())
            .filter(|vertex| !self.is_boundary_vertex(vertex))
            .map(|vertex| vertex.position)
            .collect()
    }

    /// Returns all edges of the triangulation that connect two inserted sites.
    ///
    /// Every edge is contained once.
    pub fn delaunay_edges(&self) -> Vec<[Point2<S>; 2]> {
        self.walk(self.first_edge().fix(), TraversalMode::AllEdges)
            .filter(|edge| edge.fix().rotation() == 0)
            .filter(|edge| !self.is_to_or_from_boundary(edge.fix()))
            .map(|edge| edge.positions())
            .collect()
    }

    /// Returns all finite vertices of the Voronoi diagram.
    pub fn voronoi_vertices(&self) -> Vec<Point2<S>> {
        self.walk(
            self.voronoi_entry_edge().fix(),
            TraversalMode::FirstEdgePerVertex,
        )
        .map(|edge| edge.origin())
        .filter(MeshPoint::is_face)
        .map(|vertex| vertex.position)
        .collect()
    }

    /// Returns all edges of the Voronoi diagram connecting two finite vertices.
    ///
    /// Every edge is contained once.
    pub fn voronoi_edges(&self) -> Vec<[Point2<S>; 2]> {
        self.walk(self.voronoi_entry_edge().fix(), TraversalMode::AllEdges)
            .filter(|edge| edge.fix().rotation() == 1)
            .filter(|edge| edge.origin().is_face() && edge.dest().is_face())
            .map(|edge| edge.positions())
            .collect()
    }

    /// Returns the circumcircles of all triangles that do not touch the bounding
    /// triangle.
    pub fn circumcircles(&self) -> Vec<Circumcircle<S>> {
        self.walk(
            self.voronoi_entry_edge().fix(),
            TraversalMode::FirstEdgePerVertex,
        )
        .filter(|edge| edge.origin().is_face())
        .map(|edge| {
            let center = edge.origin().position;
            let corner = edge.rot().origin().position;
            Circumcircle {
                center,
                radius: center.distance(corner),
            }
        })
        .collect()
    }

    /// Returns the site closest to `position` together with its Voronoi cell.
    ///
    /// Returns `None` if the triangulation contains no sites or if `position` is not
    /// finite. Ties are broken in favor of the site visited first.
    pub fn voronoi_cell(&self, position: Point2<S>) -> Option<VoronoiCell<S>> {
        if self.num_sites() == 0 || !position.is_finite() {
            return None;
        }

        let mut nearest = None;
        for edge in self.walk(self.first_edge().fix(), TraversalMode::FirstEdgePerVertex) {
            let vertex = edge.origin();
            if self.is_boundary_vertex(&vertex) {
                continue;
            }
            let distance = vertex.position.distance_2(position);
            match nearest {
                Some((_, nearest_distance)) if nearest_distance <= distance => {}
                _ => nearest = Some((edge, distance)),
            }
        }

        let (leaving_edge, _) = nearest?;
        let vertices = leaving_edge
            .rot()
            .left_face_ring()
            .map(|edge| edge.origin())
            .collect();

        Some(VoronoiCell {
            site: leaving_edge.origin().position,
            vertices,
        })
    }
}
