//! Topological operators on a [QuadEdgeMesh].
//!
//! All operators work on fixed handles and mutate the mesh in place. [splice] is the only
//! primitive changing ring pointers; every other operator is expressed through it.

use super::quad_edge::{FixedEdgeHandle, QuadEdgeMesh};
use crate::{CoordNum, MeshPoint};

/// Creates an isolated edge. All four endpoint slots are left undetermined.
pub fn make_edge<S: CoordNum>(mesh: &mut QuadEdgeMesh<S>) -> FixedEdgeHandle {
    mesh.allocate()
}

/// Creates an isolated edge from `origin` to `dest`.
pub fn make_edge_between<S: CoordNum>(
    mesh: &mut QuadEdgeMesh<S>,
    origin: MeshPoint<S>,
    dest: MeshPoint<S>,
) -> FixedEdgeHandle {
    let edge = make_edge(mesh);
    mesh.set_end_points(edge, origin, dest);
    edge
}

/// Merges or splits the origin rings of `a` and `b`.
///
/// If `a` and `b` belong to different origin rings, both rings are joined. If they share
/// a ring, the ring is cut into two. The dual rings of the affected faces are updated
/// accordingly. Splice is its own inverse: splicing the same pair twice restores the
/// mesh.
pub fn splice<S>(mesh: &mut QuadEdgeMesh<S>, a: FixedEdgeHandle, b: FixedEdgeHandle) {
    let alpha = mesh.o_next(a).rot();
    let beta = mesh.o_next(b).rot();

    let a_next = mesh.o_next(a);
    let b_next = mesh.o_next(b);
    let alpha_next = mesh.o_next(alpha);
    let beta_next = mesh.o_next(beta);

    mesh.set_o_next(a, b_next);
    mesh.set_o_next(b, a_next);
    mesh.set_o_next(alpha, beta_next);
    mesh.set_o_next(beta, alpha_next);
}

/// Adds a new edge from the destination of `a` to the origin of `b`.
///
/// `a` and `b` must share their left face. The new edge splits this face into two.
/// Afterwards `a`, the new edge and `b` bound the same left face: `a.l_next()` is the new
/// edge and its `l_next()` is `b`.
pub fn connect<S: CoordNum>(
    mesh: &mut QuadEdgeMesh<S>,
    a: FixedEdgeHandle,
    b: FixedEdgeHandle,
) -> FixedEdgeHandle {
    let (origin, dest, a_l_next) = {
        let a = mesh.edge(a);
        (a.dest(), mesh.edge(b).origin(), a.l_next().fix())
    };
    let edge = make_edge_between(mesh, origin, dest);
    splice(mesh, edge, a_l_next);
    splice(mesh, edge.sym(), b);
    edge
}

/// Detaches an edge from the mesh and releases its record.
///
/// The handle, and every handle of the same quad-edge record, must not be used after
/// calling this function.
pub fn delete<S: CoordNum>(mesh: &mut QuadEdgeMesh<S>, edge: FixedEdgeHandle) {
    let o_prev = mesh.edge(edge).o_prev().fix();
    splice(mesh, edge, o_prev);
    let sym_o_prev = mesh.edge(edge.sym()).o_prev().fix();
    splice(mesh, edge.sym(), sym_o_prev);
    mesh.release(edge);
}

/// Replaces an edge by the other diagonal of the quadrilateral formed by its two adjacent
/// triangles.
///
/// The edge is rotated counterclockwise within the quadrilateral and keeps its handle.
/// Both adjacent faces must be triangles.
pub fn flip<S: CoordNum>(mesh: &mut QuadEdgeMesh<S>, edge: FixedEdgeHandle) {
    let (bottom_right, top_right, bottom_left, top_left) = {
        let e = mesh.edge(edge);
        (
            e.o_prev().fix(),
            e.d_next().fix(),
            e.l_prev().fix(),
            e.sym().o_prev().fix(),
        )
    };
    let new_origin = mesh.edge(top_right).origin();
    let new_dest = mesh.edge(bottom_left).origin();
    mesh.set_end_points(edge, new_origin, new_dest);

    splice(mesh, edge, bottom_right);
    splice(mesh, edge.sym(), top_left);

    splice(mesh, edge, top_right);
    splice(mesh, edge.sym(), bottom_left);
}

#[cfg(test)]
mod test {
    use super::{connect, delete, flip, make_edge, make_edge_between, splice};
    use crate::delaunay_core::quad_edge::{FixedEdgeHandle, QuadEdgeMesh};
    use crate::{MeshPoint, Point2};

    fn site(x: f64, y: f64) -> MeshPoint<f64> {
        MeshPoint::site(Point2::new(x, y))
    }

    /// Creates a closed, counterclockwise polygon and returns its edges.
    fn create_polygon(
        mesh: &mut QuadEdgeMesh<f64>,
        corners: &[MeshPoint<f64>],
    ) -> Vec<FixedEdgeHandle> {
        let edges: Vec<_> = corners
            .iter()
            .zip(corners.iter().cycle().skip(1))
            .map(|(from, to)| make_edge_between(mesh, *from, *to))
            .collect();
        for (current, next) in edges.iter().zip(edges.iter().cycle().skip(1)) {
            splice(mesh, current.sym(), *next);
        }
        edges
    }

    fn face_positions(mesh: &QuadEdgeMesh<f64>, edge: FixedEdgeHandle) -> Vec<Point2<f64>> {
        mesh.edge(edge)
            .left_face_ring()
            .map(|e| e.origin().position)
            .collect()
    }

    #[test]
    fn test_make_edge() {
        let mut mesh = QuadEdgeMesh::<f64>::default();
        let edge = make_edge(&mut mesh);
        let handle = mesh.edge(edge);
        assert_eq!(handle.origin(), MeshPoint::undetermined());
        assert_eq!(handle.rot().origin(), MeshPoint::undetermined());
        assert_eq!(handle.origin_ring().count(), 1);
        assert_eq!(handle.rot().origin_ring().count(), 2);
    }

    #[test]
    fn test_splice_is_involution() {
        let mut mesh = QuadEdgeMesh::default();
        let a = make_edge_between(&mut mesh, site(0.0, 0.0), site(1.0, 0.0));
        let b = make_edge_between(&mut mesh, site(0.0, 0.0), site(0.0, 1.0));

        splice(&mut mesh, a, b);
        assert_eq!(mesh.edge(a).origin_ring().count(), 2);
        assert_eq!(mesh.edge(a).o_next().fix(), b);
        assert_eq!(mesh.edge(b).o_next().fix(), a);

        splice(&mut mesh, a, b);
        assert_eq!(mesh.edge(a).o_next().fix(), a);
        assert_eq!(mesh.edge(b).o_next().fix(), b);
        assert_eq!(mesh.edge(a).rot().o_next().fix(), a.rot_inv());
        assert_eq!(mesh.edge(b).rot().o_next().fix(), b.rot_inv());
    }

    #[test]
    fn test_polygon_faces() {
        let mut mesh = QuadEdgeMesh::default();
        let corners = [site(0.0, 0.0), site(1.0, 0.0), site(1.0, 1.0), site(0.0, 1.0)];
        let edges = create_polygon(&mut mesh, &corners);

        let inner = face_positions(&mesh, edges[0]);
        assert_eq!(inner, corners.iter().map(|c| c.position).collect::<Vec<_>>());
        assert_eq!(mesh.edge(edges[0].sym()).left_face_ring().count(), 4);
        for edge in &edges {
            assert_eq!(mesh.edge(*edge).origin_ring().count(), 2);
        }
    }

    #[test]
    fn test_connect() {
        let mut mesh = QuadEdgeMesh::default();
        let corners = [site(0.0, 0.0), site(1.0, 0.0), site(1.0, 1.0), site(0.0, 1.0)];
        let edges = create_polygon(&mut mesh, &corners);
        let [ab, _, cd, _] = [edges[0], edges[1], edges[2], edges[3]];

        // Adds a second edge from b to c, next to the existing one
        let diagonal = connect(&mut mesh, ab, cd);
        let handle = mesh.edge(diagonal);
        assert_eq!(handle.origin(), corners[1]);
        assert_eq!(handle.dest(), corners[2]);
        assert_eq!(mesh.num_quad_edges(), 5);

        assert_eq!(mesh.edge(ab).l_next().fix(), diagonal);
        assert_eq!(handle.l_next().fix(), cd);
    }

    #[test]
    fn test_connect_diagonal() {
        let mut mesh = QuadEdgeMesh::default();
        let corners = [site(0.0, 0.0), site(1.0, 0.0), site(1.0, 1.0), site(0.0, 1.0)];
        let edges = create_polygon(&mut mesh, &corners);
        let [ab, bc, cd, da] = [edges[0], edges[1], edges[2], edges[3]];

        let ac = connect(&mut mesh, bc, ab);
        assert_eq!(mesh.edge(ac).origin(), corners[2]);
        assert_eq!(mesh.edge(ac).dest(), corners[0]);
        assert_eq!(mesh.edge(ac).left_face_ring().count(), 3);
        assert_eq!(mesh.edge(ac.sym()).left_face_ring().count(), 3);
        assert_eq!(mesh.edge(ab).l_next().fix(), bc);
        assert_eq!(mesh.edge(bc).l_next().fix(), ac);
        assert_eq!(mesh.edge(cd).l_next().fix(), da);
        assert_eq!(mesh.edge(ac).l_next().fix(), ab);
        assert_eq!(mesh.edge(ac.sym()).l_next().fix(), cd);
    }

    #[test]
    fn test_delete() {
        let mut mesh = QuadEdgeMesh::default();
        let corners = [site(0.0, 0.0), site(1.0, 0.0), site(1.0, 1.0), site(0.0, 1.0)];
        let edges = create_polygon(&mut mesh, &corners);
        let ac = connect(&mut mesh, edges[1], edges[0]);
        assert_eq!(mesh.num_quad_edges(), 5);

        delete(&mut mesh, ac);
        assert_eq!(mesh.num_quad_edges(), 4);
        assert!(mesh.is_released(ac));
        assert_eq!(mesh.edge(edges[0]).left_face_ring().count(), 4);
        assert_eq!(mesh.edge(edges[0].sym()).left_face_ring().count(), 4);

        // The released record is handed out again
        let reused = make_edge(&mut mesh);
        assert_eq!(reused.quad_edge(), ac.quad_edge());
        assert_eq!(mesh.capacity_in_use(), 5);
    }

    #[test]
    fn test_flip() {
        let mut mesh = QuadEdgeMesh::default();
        let corners = [site(0.0, 0.0), site(1.0, 0.0), site(1.0, 1.0), site(0.0, 1.0)];
        let edges = create_polygon(&mut mesh, &corners);
        let [ab, bc, cd, da] = [edges[0], edges[1], edges[2], edges[3]];

        // Diagonal from a to c
        let diagonal = connect(&mut mesh, da, cd);
        assert_eq!(mesh.edge(diagonal).origin(), corners[0]);
        assert_eq!(mesh.edge(diagonal).dest(), corners[2]);

        flip(&mut mesh, diagonal);
        let flipped = mesh.edge(diagonal);
        assert_eq!(flipped.origin(), corners[1]);
        assert_eq!(flipped.dest(), corners[3]);
        assert_eq!(mesh.num_quad_edges(), 5);

        assert_eq!(
            face_positions(&mesh, diagonal),
            vec![corners[1].position, corners[3].position, corners[0].position]
        );
        assert_eq!(
            face_positions(&mesh, diagonal.sym()),
            vec![corners[3].position, corners[1].position, corners[2].position]
        );
        assert_eq!(mesh.edge(ab).l_next().fix(), diagonal);
        assert_eq!(mesh.edge(cd).l_next().fix(), diagonal.sym());
        assert_eq!(mesh.edge(bc).l_next().fix(), cd);
        assert_eq!(mesh.edge(da).l_next().fix(), ab);

        // Each flip rotates the edge counterclockwise within its quadrilateral
        flip(&mut mesh, diagonal);
        flip(&mut mesh, diagonal);
        assert_eq!(mesh.edge(diagonal).origin(), corners[3]);
        flip(&mut mesh, diagonal);
        assert_eq!(mesh.edge(diagonal).origin(), corners[0]);
        assert_eq!(mesh.edge(diagonal).dest(), corners[2]);
    }
}
