use super::quad_edge::{FixedEdgeHandle, QuadEdgeMesh};
use super::ring_iterator::{LeftFaceRing, OriginRing, RingIterator};
use crate::{CoordNum, MeshPoint, Point2};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

/// A directed edge of the mesh, borrowed together with the mesh it belongs to.
///
/// Edge handles expose the quad-edge algebra: `rot`, `sym` and `rot_inv` move between the
/// four edges of the same quad-edge record, `o_next` follows the ring of edges sharing
/// an origin. Every other step (`l_next`, `d_prev`, ...) is derived from these.
///
/// Terminology for an edge `e`: its *origin* and *destination* are the points at its
/// start and end, its *left* and *right* faces lie to the left and right when looking
/// from origin to destination. For a dual edge, origin and destination are face points
/// and the left and right "faces" are sites.
pub struct EdgeHandle<'a, S> {
    mesh: &'a QuadEdgeMesh<S>,
    handle: FixedEdgeHandle,
}

impl<'a, S> EdgeHandle<'a, S> {
    #[inline]
    pub(crate) fn new(mesh: &'a QuadEdgeMesh<S>, handle: FixedEdgeHandle) -> Self {
        EdgeHandle { mesh, handle }
    }

    #[inline]
    fn with(&self, handle: FixedEdgeHandle) -> Self {
        EdgeHandle::new(self.mesh, handle)
    }

    /// Converts this handle into its fixed variant which does not borrow the mesh.
    #[inline]
    pub fn fix(&self) -> FixedEdgeHandle {
        self.handle
    }

    /// Returns `true` if this edge connects two sites rather than two faces.
    #[inline]
    pub fn is_primal(&self) -> bool {
        self.handle.is_primal()
    }

    /// The dual edge pointing from this edge's right face to its left face.
    #[inline]
    pub fn rot(&self) -> Self {
        self.with(self.handle.rot())
    }

    /// This edge with its direction reversed.
    #[inline]
    pub fn sym(&self) -> Self {
        self.with(self.handle.sym())
    }

    /// The dual edge pointing from this edge's left face to its right face.
    #[inline]
    pub fn rot_inv(&self) -> Self {
        self.with(self.handle.rot_inv())
    }

    /// Next edge counterclockwise around the origin.
    #[inline]
    pub fn o_next(&self) -> Self {
        self.with(self.mesh.o_next(self.handle))
    }

    /// Next edge clockwise around the origin.
    pub fn o_prev(&self) -> Self {
        self.rot().o_next().rot()
    }

    /// Next edge counterclockwise around the destination, pointing into the destination.
    pub fn d_next(&self) -> Self {
        self.sym().o_next().sym()
    }

    /// Next edge clockwise around the destination, pointing into the destination.
    pub fn d_prev(&self) -> Self {
        self.rot_inv().o_next().rot_inv()
    }

    /// Next edge counterclockwise around the left face.
    pub fn l_next(&self) -> Self {
        self.rot_inv().o_next().rot()
    }

    /// Previous edge around the left face.
    pub fn l_prev(&self) -> Self {
        self.o_next().sym()
    }

    /// Next edge counterclockwise around the right face.
    pub fn r_next(&self) -> Self {
        self.rot().o_next().rot_inv()
    }

    /// Previous edge around the right face.
    pub fn r_prev(&self) -> Self {
        self.sym().o_next()
    }

    /// Iterates over all edges sharing this edge's origin, counterclockwise, starting with
    /// this edge.
    pub fn origin_ring(&self) -> RingIterator<'a, S, OriginRing> {
        RingIterator::new(*self)
    }

    /// Iterates over the edges bounding this edge's left face, counterclockwise, starting
    /// with this edge.
    pub fn left_face_ring(&self) -> RingIterator<'a, S, LeftFaceRing> {
        RingIterator::new(*self)
    }
}

impl<'a, S: Copy> EdgeHandle<'a, S> {
    /// The point this edge starts at.
    #[inline]
    pub fn origin(&self) -> MeshPoint<S> {
        self.mesh.data(self.handle)
    }

    /// The point this edge ends at.
    #[inline]
    pub fn dest(&self) -> MeshPoint<S> {
        self.sym().origin()
    }

    /// Returns the start and end position of this edge.
    pub fn positions(&self) -> [Point2<S>; 2] {
        [self.origin().position, self.dest().position]
    }
}

impl<'a, S: CoordNum> EdgeHandle<'a, S> {
    /// Returns `true` if `point` lies strictly on the right side of this edge.
    #[inline]
    pub fn is_right_of(&self, point: Point2<S>) -> bool {
        super::math::is_right_of(point, self.origin().position, self.dest().position)
    }

    /// Returns the squared length of this edge.
    pub fn length_2(&self) -> S {
        let [from, to] = self.positions();
        from.distance_2(to)
    }
}

impl<'a, S> Clone for EdgeHandle<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S> Copy for EdgeHandle<'a, S> {}

impl<'a, S> PartialEq for EdgeHandle<'a, S> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl<'a, S> Eq for EdgeHandle<'a, S> {}

impl<'a, S> Hash for EdgeHandle<'a, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.handle.hash(state);
    }
}

impl<'a, S> PartialOrd for EdgeHandle<'a, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, S> Ord for EdgeHandle<'a, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.handle.cmp(&other.handle)
    }
}

impl<'a, S: Copy + Debug> Debug for EdgeHandle<'a, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EdgeHandle - id: {:?} ({:?} -> {:?})",
            self.handle,
            self.origin().position,
            self.dest().position
        )
    }
}

#[cfg(test)]
mod test {
    use super::super::edge_operations::{make_edge_between, splice};
    use super::super::quad_edge::QuadEdgeMesh;
    use crate::{MeshPoint, Point2};

    fn site(x: f64, y: f64) -> MeshPoint<f64> {
        MeshPoint::site(Point2::new(x, y))
    }

    #[test]
    fn test_isolated_edge_algebra() {
        let mut mesh = QuadEdgeMesh::default();
        let e = make_edge_between(&mut mesh, site(0.0, 0.0), site(1.0, 0.0));
        let e = mesh.edge(e);

        assert_eq!(e.origin(), site(0.0, 0.0));
        assert_eq!(e.dest(), site(1.0, 0.0));
        assert_eq!(e.o_next(), e);
        assert_eq!(e.o_prev(), e);
        // The left face of an isolated edge is bounded by the edge and its reversal
        assert_eq!(e.l_next(), e.sym());
        assert_eq!(e.l_prev(), e.sym());
        assert_eq!(e.r_next(), e.sym());
        assert_eq!(e.d_next(), e);
        assert_eq!(e.rot().o_next(), e.rot_inv());
    }

    #[test]
    fn test_triangle_algebra() {
        let mut mesh = QuadEdgeMesh::default();
        let (a, b, c) = (site(0.0, 0.0), site(1.0, 0.0), site(0.0, 1.0));
        let ab = make_edge_between(&mut mesh, a, b);
        let bc = make_edge_between(&mut mesh, b, c);
        let ca = make_edge_between(&mut mesh, c, a);
        splice(&mut mesh, ab.sym(), bc);
        splice(&mut mesh, bc.sym(), ca);
        splice(&mut mesh, ca.sym(), ab);

        let ab = mesh.edge(ab);
        assert_eq!(ab.l_next().fix(), bc);
        assert_eq!(ab.l_next().l_next().fix(), ca);
        assert_eq!(ab.l_next().l_next().l_next(), ab);
        assert_eq!(ab.l_prev().fix(), ca);
        assert_eq!(ab.left_face_ring().count(), 3);
        assert_eq!(ab.origin_ring().count(), 2);
        assert_eq!(ab.o_next().fix(), ca.sym());
        assert_eq!(ab.d_prev().fix(), bc.sym());
        assert_eq!(ab.r_prev(), ab.sym().o_next());
        assert!(ab.is_right_of(Point2::new(0.5, -1.0)));
        assert!(!ab.is_right_of(Point2::new(0.5, 1.0)));
        assert!(!ab.is_right_of(Point2::new(2.0, 0.0)));
        assert_eq!(ab.length_2(), 1.0);
    }
}
