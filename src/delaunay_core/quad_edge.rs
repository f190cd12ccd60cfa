use std::convert::TryInto;

use super::handles::EdgeHandle;
use crate::{CoordNum, MeshPoint};

/// Refers to one of the four directed edges of a quad-edge record.
///
/// The handle stores the record's index in the mesh arena together with the edge's
/// rotation (`0..4`). Rotations `0` and `2` are the two directions of the primal edge,
/// rotations `1` and `3` the two directions of its dual.
///
/// Fixed handles are plain indices: they do not borrow the mesh. Use
/// [DelaunayTriangulation::edge](crate::DelaunayTriangulation::edge) to convert them into
/// an [EdgeHandle] which can be used to navigate the mesh.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedEdgeHandle {
    index: u32,
}

impl std::fmt::Debug for FixedEdgeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedEdgeHandle")
            .field("quad_edge", &self.quad_edge())
            .field("rotation", &self.rotation())
            .finish()
    }
}

impl FixedEdgeHandle {
    pub(crate) fn new(quad_edge: usize, rotation: usize) -> Self {
        debug_assert!(rotation < 4);
        let index: u32 = (quad_edge << 2 | rotation)
            .try_into()
            .expect("Index too big - at most 2^30 quad edges supported");
        FixedEdgeHandle { index }
    }

    #[inline]
    fn with_rotation(self, rotation: usize) -> Self {
        FixedEdgeHandle {
            index: (self.index & !0x3) | (rotation & 0x3) as u32,
        }
    }

    /// Returns the index of the quad-edge record this edge belongs to.
    #[inline]
    pub fn quad_edge(self) -> usize {
        (self.index >> 2) as usize
    }

    /// Returns this edge's position (`0..4`) within its quad-edge record.
    #[inline]
    pub fn rotation(self) -> usize {
        (self.index & 0x3) as usize
    }

    /// Returns `true` if this edge connects two sites rather than two faces.
    #[inline]
    pub fn is_primal(self) -> bool {
        self.index & 0x1 == 0
    }

    /// The dual edge, rotated 90° counterclockwise.
    ///
    /// Applying `rot` four times yields the original edge.
    #[inline]
    pub fn rot(self) -> Self {
        self.with_rotation(self.rotation() + 1)
    }

    /// The same undirected edge, pointing into the opposite direction.
    #[inline]
    pub fn sym(self) -> Self {
        FixedEdgeHandle {
            index: self.index ^ 0x2,
        }
    }

    /// The dual edge, rotated 90° clockwise. Inverse of [rot](Self::rot).
    #[inline]
    pub fn rot_inv(self) -> Self {
        self.with_rotation(self.rotation() + 3)
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct QuadEdgeEntry<S> {
    /// Ring pointer of each directed edge: the next edge counterclockwise around its origin.
    o_next: [FixedEdgeHandle; 4],
    /// Origin point of each directed edge.
    data: [MeshPoint<S>; 4],
}

/// Arena of quad-edge records.
///
/// Records are never moved. Deleted records are kept on a free list and handed out
/// again by [make_edge](super::edge_operations::make_edge).
#[derive(Clone, Debug)]
pub struct QuadEdgeMesh<S> {
    quad_edges: Vec<QuadEdgeEntry<S>>,
    free_list: Vec<usize>,
}

impl<S> Default for QuadEdgeMesh<S> {
    fn default() -> Self {
        QuadEdgeMesh {
            quad_edges: Vec::new(),
            free_list: Vec::new(),
        }
    }
}

impl<S: CoordNum> QuadEdgeMesh<S> {
    /// Allocates an isolated quad-edge record and returns its rotation `0` edge.
    ///
    /// Both primal edges form rings of their own, the two dual edges point at each other:
    /// an isolated edge is surrounded by a single face.
    pub(crate) fn allocate(&mut self) -> FixedEdgeHandle {
        let quad_edge = match self.free_list.pop() {
            Some(reused) => reused,
            None => {
                let undetermined = MeshPoint::undetermined();
                self.quad_edges.push(QuadEdgeEntry {
                    o_next: [FixedEdgeHandle { index: 0 }; 4],
                    data: [undetermined; 4],
                });
                self.quad_edges.len() - 1
            }
        };

        let e0 = FixedEdgeHandle::new(quad_edge, 0);
        let entry = &mut self.quad_edges[quad_edge];
        entry.o_next = [e0, e0.rot().sym(), e0.sym(), e0.rot()];
        entry.data = [MeshPoint::undetermined(); 4];
        e0
    }

    /// Returns a record to the free list. The caller must have detached it from all rings.
    pub(crate) fn release(&mut self, edge: FixedEdgeHandle) {
        debug_assert!(!self.free_list.contains(&edge.quad_edge()));
        self.free_list.push(edge.quad_edge());
    }

    pub(crate) fn clear(&mut self) {
        self.quad_edges.clear();
        self.free_list.clear();
    }
}

impl<S> QuadEdgeMesh<S> {
    /// Number of quad-edge records currently in use.
    pub fn num_quad_edges(&self) -> usize {
        self.quad_edges.len() - self.free_list.len()
    }

    /// Number of allocated records, including released ones.
    #[cfg(any(test, fuzzing))]
    pub(crate) fn capacity_in_use(&self) -> usize {
        self.quad_edges.len()
    }

    #[inline]
    pub(crate) fn o_next(&self, edge: FixedEdgeHandle) -> FixedEdgeHandle {
        self.quad_edges[edge.quad_edge()].o_next[edge.rotation()]
    }

    #[inline]
    pub(crate) fn set_o_next(&mut self, edge: FixedEdgeHandle, next: FixedEdgeHandle) {
        self.quad_edges[edge.quad_edge()].o_next[edge.rotation()] = next;
    }

    pub(crate) fn set_data(&mut self, edge: FixedEdgeHandle, point: MeshPoint<S>) {
        self.quad_edges[edge.quad_edge()].data[edge.rotation()] = point;
    }

    #[cfg(any(test, fuzzing))]
    pub(crate) fn is_released(&self, edge: FixedEdgeHandle) -> bool {
        self.free_list.contains(&edge.quad_edge())
    }

    /// Returns a navigable view of the given edge.
    pub fn edge(&self, handle: FixedEdgeHandle) -> EdgeHandle<'_, S> {
        EdgeHandle::new(self, handle)
    }
}

impl<S: Copy> QuadEdgeMesh<S> {
    #[inline]
    pub(crate) fn data(&self, edge: FixedEdgeHandle) -> MeshPoint<S> {
        self.quad_edges[edge.quad_edge()].data[edge.rotation()]
    }

    /// Sets the origin of `edge` and the origin of `edge.sym()`.
    pub(crate) fn set_end_points(
        &mut self,
        edge: FixedEdgeHandle,
        origin: MeshPoint<S>,
        dest: MeshPoint<S>,
    ) {
        let entry = &mut self.quad_edges[edge.quad_edge()];
        entry.data[edge.rotation()] = origin;
        entry.data[edge.sym().rotation()] = dest;
    }
}
