use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::{ConfigError, TriangulationConfig};
use crate::delaunay_core::edge_operations::{connect, delete, flip, make_edge_between, splice};
use crate::delaunay_core::math::{self, in_circle, orientation_determinant};
use crate::delaunay_core::{
    validate_coordinate, EdgeHandle, FixedEdgeHandle, InsertionError, MeshWalk, QuadEdgeMesh,
    TraversalMode,
};
use crate::{CoordNum, MeshPoint, Point2};

/// Describes what happened when a site was inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertionOutcome {
    /// The site was inserted into the interior of a triangle.
    Inserted,
    /// The site was inserted onto an existing edge. The edge was removed and both
    /// adjacent triangles were re-triangulated around the new site.
    InsertedOnEdge,
    /// The site was already part of the triangulation. Nothing was changed.
    AlreadyPresent,
}

/// The result of a point location query, see [DelaunayTriangulation::locate].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionInTriangulation {
    /// The point coincides with a vertex. The edge starts or ends at this vertex.
    OnVertex(FixedEdgeHandle),
    /// The point lies on the given edge, within the configured tolerance.
    OnEdge(FixedEdgeHandle),
    /// The point lies inside the triangle left of the given edge.
    OnFace(FixedEdgeHandle),
    /// The point does not lie strictly inside the bounding triangle or is not finite.
    OutsideOfBoundary,
}

/// A two dimensional Delaunay triangulation together with its Voronoi diagram.
///
/// Sites are inserted one by one. Every insertion locates the triangle containing the new
/// site, connects the site to the triangle's corners and restores the Delaunay property by
/// flipping illegal edges. Afterwards, the circumcenter of every triangle is stored as
/// the origin of the dual edges around it: the dual mesh of the triangulation is its
/// Voronoi diagram.
///
/// The triangulation is enclosed by a large *bounding triangle* with three synthetic
/// vertices. Only sites strictly inside this triangle can be inserted. Edges and faces
/// adjacent to the bounding triangle are part of the mesh but can be recognized with
/// [is_to_or_from_boundary](Self::is_to_or_from_boundary); their Voronoi vertex is
/// [undetermined](crate::PointRole::Undetermined).
///
/// # Example
///
/// ```
/// use quad_delaunay::{DelaunayTriangulation, InsertionOutcome, Point2};
///
/// # fn main() -> Result<(), quad_delaunay::InsertionError> {
/// let mut triangulation: DelaunayTriangulation<f64> = DelaunayTriangulation::new();
/// triangulation.insert(Point2::new(100.0, 100.0))?;
/// triangulation.insert(Point2::new(200.0, 100.0))?;
/// triangulation.insert(Point2::new(150.0, 200.0))?;
///
/// assert_eq!(triangulation.num_sites(), 3);
/// assert_eq!(triangulation.voronoi_vertices().len(), 1);
/// assert_eq!(
///     triangulation.insert(Point2::new(150.0, 200.0))?,
///     InsertionOutcome::AlreadyPresent
/// );
/// # Ok(()) }
/// ```
///
/// # Precision
///
/// All predicates are evaluated in `S` without any exact arithmetic fallback. Sites that
/// are (almost) collinear or co-circular may be handled inconsistently.
///
/// The on-edge test compares the point's parameters along the edge's x and y axis (see
/// [TriangulationConfig::epsilon]). This is not a distance: on long edges, and close to
/// an edge's endpoints, a point several units away from the edge can still be classified
/// as lying on it. Such a point may lie outside of both triangles adjacent to that edge.
/// [locate](Self::locate) then reports [PositionInTriangulation::OnEdge] for an edge
/// that does not bound the point's triangle, and [insert](Self::insert) deletes that edge
/// and connects the site to the corners of a quadrilateral it does not lie in. This
/// leaves clockwise (inverted) triangles behind and corrupts the triangulation. Use a
/// small epsilon, relative to the coordinate range, if sites may come close to existing
/// edges without being collinear.
#[derive(Clone, Debug)]
pub struct DelaunayTriangulation<S = f64> {
    pub(crate) mesh: QuadEdgeMesh<S>,
    first_edge: FixedEdgeHandle,
    boundary: [MeshPoint<S>; 3],
    num_sites: usize,
    config: TriangulationConfig<S>,
}

impl<S: CoordNum> Default for DelaunayTriangulation<S> {
    fn default() -> Self {
        Self::from_valid_config(TriangulationConfig::default())
    }
}

impl<S: CoordNum> DelaunayTriangulation<S> {
    /// Creates a triangulation containing only the bounding triangle, using the default
    /// configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty triangulation with a custom configuration.
    pub fn with_config(config: TriangulationConfig<S>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: TriangulationConfig<S>) -> Self {
        let size = config.get_boundary_size();
        let boundary = [
            MeshPoint::site(Point2::new(S::zero(), -size)),
            MeshPoint::site(Point2::new(size, size)),
            MeshPoint::site(Point2::new(-size, size)),
        ];
        let mut mesh = QuadEdgeMesh::default();
        let first_edge = create_bounding_triangle(&mut mesh, &boundary);

        let mut result = DelaunayTriangulation {
            mesh,
            first_edge,
            boundary,
            num_sites: 0,
            config,
        };
        result.compute_voronoi();
        debug!(boundary_size = ?size, "created triangulation");
        result
    }

    /// Removes all sites. The configuration is kept.
    pub fn clear(&mut self) {
        self.mesh.clear();
        self.first_edge = create_bounding_triangle(&mut self.mesh, &self.boundary);
        self.num_sites = 0;
        self.compute_voronoi();
        debug!("cleared triangulation");
    }

    /// Returns the configuration this triangulation was created with.
    pub fn config(&self) -> TriangulationConfig<S> {
        self.config
    }

    /// Returns the number of inserted sites. The vertices of the bounding triangle are
    /// not counted.
    pub fn num_sites(&self) -> usize {
        self.num_sites
    }

    /// Returns the number of vertices, including the three vertices of the bounding
    /// triangle.
    pub fn num_vertices(&self) -> usize {
        self.num_sites + 3
    }

    /// Returns the number of undirected edges, including those of the bounding triangle.
    pub fn num_quad_edges(&self) -> usize {
        self.mesh.num_quad_edges()
    }

    /// Returns the positions of the bounding triangle's vertices.
    pub fn boundary_vertices(&self) -> [Point2<S>; 3] {
        self.boundary.map(|vertex| vertex.position)
    }

    /// Returns the entry edge of the triangulation.
    ///
    /// This is a side of the bounding triangle, the triangulation's interior lies on its
    /// left side. It stays the same for the whole lifetime of the triangulation.
    pub fn first_edge(&self) -> EdgeHandle<'_, S> {
        self.mesh.edge(self.first_edge)
    }

    /// Returns the entry edge of the Voronoi diagram, the dual of [first_edge](Self::first_edge).
    pub fn voronoi_entry_edge(&self) -> EdgeHandle<'_, S> {
        self.first_edge().rot()
    }

    /// Converts a fixed handle into an edge handle.
    ///
    /// The handle must stem from this triangulation and must not have been invalidated by
    /// a later insertion.
    pub fn edge(&self, handle: FixedEdgeHandle) -> EdgeHandle<'_, S> {
        self.mesh.edge(handle)
    }

    /// Returns `true` if the edge starts at a vertex of the bounding triangle.
    pub fn is_from_boundary(&self, edge: FixedEdgeHandle) -> bool {
        self.is_boundary_vertex(&self.mesh.edge(edge).origin())
    }

    /// Returns `true` if the edge starts or ends at a vertex of the bounding triangle.
    pub fn is_to_or_from_boundary(&self, edge: FixedEdgeHandle) -> bool {
        self.is_from_boundary(edge) || self.is_from_boundary(edge.sym())
    }

    pub(crate) fn is_boundary_vertex(&self, point: &MeshPoint<S>) -> bool {
        self.boundary.contains(point)
    }

    /// Walks over all edges reachable from `start`.
    ///
    /// Starting at [first_edge](Self::first_edge) visits the triangulation, starting at
    /// [voronoi_entry_edge](Self::voronoi_entry_edge) visits the Voronoi diagram. See
    /// [MeshWalk] for the visiting order.
    pub fn walk(&self, start: FixedEdgeHandle, mode: TraversalMode) -> MeshWalk<'_, S> {
        MeshWalk::new(&self.mesh, start, mode)
    }

    /// Calls `visitor` for every edge yielded by [walk](Self::walk).
    pub fn traverse<F>(&self, start: FixedEdgeHandle, mode: TraversalMode, mut visitor: F)
    where
        F: FnMut(EdgeHandle<'_, S>),
    {
        for edge in self.walk(start, mode) {
            visitor(edge);
        }
    }

    /// Locates a point within the triangulation.
    pub fn locate(&self, position: Point2<S>) -> PositionInTriangulation {
        let Some(edge) = self.locate_edge(position) else {
            return PositionInTriangulation::OutsideOfBoundary;
        };

        let handle = self.mesh.edge(edge);
        let [from, to] = handle.positions();
        if from == position || to == position {
            PositionInTriangulation::OnVertex(edge)
        } else if self.is_on_edge(position, edge) {
            PositionInTriangulation::OnEdge(edge)
        } else {
            PositionInTriangulation::OnFace(edge)
        }
    }

    /// Returns the edge found by walking towards `position`.
    ///
    /// The point lies on the returned edge or in the triangle on its left side. Returns
    /// `None` if the point is not strictly inside the bounding triangle.
    pub fn locate_edge(&self, position: Point2<S>) -> Option<FixedEdgeHandle> {
        if self.is_inside_boundary(position) {
            Some(self.walk_to(position))
        } else {
            None
        }
    }

    /// Jump-and-walk starting at the first edge. The point must lie inside the bounding
    /// triangle, otherwise the walk may not terminate.
    fn walk_to(&self, position: Point2<S>) -> FixedEdgeHandle {
        let mut edge = self.first_edge();
        loop {
            let l_next = edge.l_next();
            let l_prev = edge.l_prev();
            for candidate in [edge, l_next, l_prev] {
                if self.is_on_edge(position, candidate.fix()) {
                    return candidate.fix();
                }
            }

            edge = if edge.is_right_of(position) {
                edge.sym()
            } else if l_next.is_right_of(position) {
                l_next.sym()
            } else if l_prev.is_right_of(position) {
                l_prev.sym()
            } else {
                return edge.fix();
            };
        }
    }

    fn is_on_edge(&self, position: Point2<S>, edge: FixedEdgeHandle) -> bool {
        let [from, to] = self.mesh.edge(edge).positions();
        math::is_on_segment(position, from, to, self.config.get_epsilon())
    }

    /// Returns `true` if the position lies strictly inside the bounding triangle and not
    /// on any of its sides.
    fn is_inside_boundary(&self, position: Point2<S>) -> bool {
        let [a, b, c] = self.boundary_vertices();
        let epsilon = self.config.get_epsilon();
        [(a, b), (b, c), (c, a)].into_iter().all(|(from, to)| {
            orientation_determinant(from, to, position) > S::zero()
                && !math::is_on_segment(position, from, to, epsilon)
        })
    }

    /// Inserts a new site into the triangulation.
    ///
    /// Inserting a site that is already present leaves the triangulation untouched and
    /// returns [InsertionOutcome::AlreadyPresent].
    ///
    /// Returns an error if the position is not finite or does not lie strictly inside
    /// the bounding triangle.
    pub fn insert(&mut self, position: Point2<S>) -> Result<InsertionOutcome, InsertionError> {
        validate_coordinate(position.x)?;
        validate_coordinate(position.y)?;
        if !self.is_inside_boundary(position) {
            return Err(InsertionError::OutsideBoundary);
        }

        let site = MeshPoint::site(position);
        let mut triangle_side = self.walk_to(position);
        {
            let edge = self.mesh.edge(triangle_side);
            if edge.origin() == site || edge.dest() == site {
                trace!(?position, "skipped duplicate site");
                return Ok(InsertionOutcome::AlreadyPresent);
            }
        }

        let is_on_edge = self.is_on_edge(position, triangle_side);
        if is_on_edge {
            debug!(?position, "site lies on an existing edge");
            let o_prev = self.mesh.edge(triangle_side).o_prev().fix();
            delete(&mut self.mesh, triangle_side);
            triangle_side = o_prev;
        }

        let first_vertex = self.mesh.edge(triangle_side).origin();
        let mut star_edge = make_edge_between(&mut self.mesh, first_vertex, site);
        splice(&mut self.mesh, star_edge, triangle_side);
        loop {
            star_edge = connect(&mut self.mesh, triangle_side, star_edge.sym());
            triangle_side = self.mesh.edge(star_edge).o_prev().fix();
            if self.mesh.edge(triangle_side).dest() == first_vertex {
                break;
            }
        }

        let num_flips = self.legalize(star_edge, site, first_vertex);
        self.compute_voronoi();
        self.num_sites += 1;
        trace!(?position, num_flips, "inserted site");

        Ok(if is_on_edge {
            InsertionOutcome::InsertedOnEdge
        } else {
            InsertionOutcome::Inserted
        })
    }

    /// Flips illegal edges around a newly inserted site until every triangle is locally
    /// Delaunay. Returns the number of flips.
    fn legalize(
        &mut self,
        last_star_edge: FixedEdgeHandle,
        site: MeshPoint<S>,
        first_vertex: MeshPoint<S>,
    ) -> usize {
        let mut num_flips = 0;
        let mut suspect = self.mesh.edge(last_star_edge).o_prev().fix();
        loop {
            let (is_illegal, origin, next_suspect) = {
                let edge = self.mesh.edge(suspect);
                let opposite = edge.o_prev().dest().position;
                let [from, to] = edge.positions();
                let is_illegal =
                    edge.is_right_of(opposite) && in_circle(from, opposite, to, site.position);
                (is_illegal, edge.origin(), edge.o_next().o_next().sym().fix())
            };

            if is_illegal {
                flip(&mut self.mesh, suspect);
                num_flips += 1;
                // The flip may have created a new suspect edge, one step clockwise
                suspect = self.mesh.edge(suspect).o_prev().fix();
            } else if origin == first_vertex {
                return num_flips;
            } else {
                suspect = next_suspect;
            }
        }
    }

    /// Stores the circumcenter of every triangle as the origin of its dual edges.
    ///
    /// Triangles touching the bounding triangle (and the outer face) receive the
    /// [undetermined](MeshPoint::undetermined) sentinel instead.
    fn compute_voronoi(&mut self) {
        let entry = self.voronoi_entry_edge().fix();
        let mut assignments = Vec::with_capacity(self.mesh.num_quad_edges() * 2);
        let mut num_faces = 0;
        for dual_edge in self.walk(entry, TraversalMode::FirstEdgePerVertex) {
            let face_point = self.face_point(dual_edge);
            assignments.extend(dual_edge.origin_ring().map(|edge| (edge.fix(), face_point)));
            num_faces += 1;
        }

        for (edge, face_point) in assignments {
            self.mesh.set_data(edge, face_point);
        }
        trace!(num_faces, "recomputed voronoi vertices");
    }

    /// Calculates the Voronoi vertex of the face a dual edge starts at.
    fn face_point(&self, dual_edge: EdgeHandle<S>) -> MeshPoint<S> {
        let corners: SmallVec<[MeshPoint<S>; 3]> = dual_edge
            .rot()
            .left_face_ring()
            .map(|edge| edge.origin())
            .collect();

        match corners.as_slice() {
            [a, b, c] if !corners.iter().any(|corner| self.is_boundary_vertex(corner)) => {
                MeshPoint::face(math::circumcenter([a.position, b.position, c.position]))
            }
            _ => MeshPoint::undetermined(),
        }
    }
}

/// Creates the three sides of the bounding triangle and returns the side whose left face
/// is the triangle's interior.
fn create_bounding_triangle<S: CoordNum>(
    mesh: &mut QuadEdgeMesh<S>,
    boundary: &[MeshPoint<S>; 3],
) -> FixedEdgeHandle {
    let [a, b, c] = *boundary;
    let ab = make_edge_between(mesh, a, b);
    let bc = make_edge_between(mesh, b, c);
    let ca = make_edge_between(mesh, c, a);
    splice(mesh, ab.sym(), bc);
    splice(mesh, bc.sym(), ca);
    splice(mesh, ca.sym(), ab);
    ab
}

#[cfg(any(test, fuzzing))]
impl<S: CoordNum> DelaunayTriangulation<S> {
    /// Checks the structural and geometric invariants of the triangulation. Panics if any
    /// of them is violated.
    pub fn sanity_check(&self) {
        let primal: Vec<_> = self
            .walk(self.first_edge, TraversalMode::AllEdges)
            .collect();
        let max_ring_length = primal.len() + 1;

        assert_eq!(primal.len(), self.num_quad_edges() * 2);
        assert!(self.mesh.capacity_in_use() >= self.num_quad_edges());

        for edge in &primal {
            assert!(edge.is_primal());
            assert!(!self.mesh.is_released(edge.fix()));
            assert_eq!(edge.rot().rot().rot().rot(), *edge);
            assert_eq!(edge.sym().sym(), *edge);
            assert_eq!(edge.rot().sym(), edge.rot_inv());
            assert_eq!(edge.o_next().o_prev(), *edge);
            assert_eq!(edge.l_next().l_prev(), *edge);
            assert!(edge.origin().is_site());

            let mut current = edge.o_next();
            let mut steps = 1;
            while current != *edge {
                assert_eq!(current.origin(), edge.origin());
                current = current.o_next();
                steps += 1;
                assert!(steps <= max_ring_length, "Origin ring is not closed");
            }

            // Every face, including the outer face, is a triangle
            assert_eq!(edge.l_next().l_next().l_next(), *edge);
        }

        let num_vertices = self
            .walk(self.first_edge, TraversalMode::FirstEdgePerVertex)
            .count();
        assert_eq!(num_vertices, self.num_vertices());

        let faces: Vec<_> = self
            .walk(self.voronoi_entry_edge().fix(), TraversalMode::FirstEdgePerVertex)
            .collect();
        // Euler characteristic of a planar graph
        assert_eq!(
            num_vertices as isize - self.num_quad_edges() as isize + faces.len() as isize,
            2
        );

        let outer_face = self.first_edge().sym();
        for dual_edge in &faces {
            let side = dual_edge.rot();
            let is_outer = side.left_face_ring().any(|edge| edge == outer_face);
            let [a, b] = side.positions();
            let c = side.l_next().dest().position;
            let area = orientation_determinant(a, b, c);
            if is_outer {
                assert!(area < S::zero());
            } else {
                assert!(area > S::zero(), "Inner face is not oriented counterclockwise");
            }

            let face_point = dual_edge.origin();
            for ring_edge in dual_edge.origin_ring() {
                assert_eq!(ring_edge.origin(), face_point);
            }

            let touches_boundary = side
                .left_face_ring()
                .any(|edge| self.is_boundary_vertex(&edge.origin()));
            if touches_boundary {
                assert_eq!(face_point, MeshPoint::undetermined());
            } else {
                assert!(face_point.is_face());
                let radius: f64 = face_point.position.distance(a).into();
                for corner in [b, c] {
                    let distance: f64 = face_point.position.distance(corner).into();
                    assert!((distance - radius).abs() <= radius * 1.0e-4 + 1.0e-6);
                }
            }
        }

        for edge in &primal {
            let quad = [
                edge.origin(),
                edge.o_prev().dest(),
                edge.dest(),
                edge.o_next().dest(),
            ];
            if quad.iter().any(|vertex| self.is_boundary_vertex(vertex)) {
                continue;
            }
            let [a, b, c, d] = quad.map(|vertex| vertex.position);
            assert!(
                !in_circle(a, b, c, d) && !in_circle(a, c, d, b),
                "Illegal edge {:?}",
                edge
            );
        }
    }
}
