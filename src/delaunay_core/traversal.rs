use hashbrown::HashSet;

use super::handles::EdgeHandle;
use super::quad_edge::{FixedEdgeHandle, QuadEdgeMesh};

/// Determines which edges a [MeshWalk] yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalMode {
    /// Yields every reachable directed edge exactly once.
    AllEdges,
    /// Yields only the first encountered edge of every origin ring.
    ///
    /// For a walk over primal edges this yields one edge per site, for a walk over dual
    /// edges one edge per face.
    FirstEdgePerVertex,
}

/// Depth first walk over all directed edges reachable from a start edge.
///
/// Edges are reached through `sym`, `o_next` and `l_next`. The walk never applies `rot`:
/// starting at a primal edge visits primal edges only, starting at a dual edge visits the
/// dual mesh only.
///
/// The visiting order is a depth first pre-order: after visiting an edge `e`, the edges
/// reachable through `e.sym()` are explored first, then those reachable through
/// `e.o_next()` and finally those reachable through `e.l_next()`.
///
/// Created by [DelaunayTriangulation::walk](crate::DelaunayTriangulation::walk).
pub struct MeshWalk<'a, S> {
    mesh: &'a QuadEdgeMesh<S>,
    mode: TraversalMode,
    pending: Vec<FixedEdgeHandle>,
    visited: HashSet<FixedEdgeHandle>,
    processed_vertices: HashSet<FixedEdgeHandle>,
}

impl<'a, S> MeshWalk<'a, S> {
    pub(crate) fn new(
        mesh: &'a QuadEdgeMesh<S>,
        start: FixedEdgeHandle,
        mode: TraversalMode,
    ) -> Self {
        MeshWalk {
            mesh,
            mode,
            pending: vec![start],
            visited: HashSet::new(),
            processed_vertices: HashSet::new(),
        }
    }

    /// Marks the whole origin ring of `edge` as processed. Returns `false` if it was
    /// processed before.
    fn process_vertex(&mut self, edge: EdgeHandle<'a, S>) -> bool {
        if self.processed_vertices.contains(&edge.fix()) {
            return false;
        }
        self.processed_vertices
            .extend(edge.origin_ring().map(|ring_edge| ring_edge.fix()));
        true
    }
}

impl<'a, S> Iterator for MeshWalk<'a, S> {
    type Item = EdgeHandle<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.pending.pop() {
            if !self.visited.insert(current) {
                continue;
            }

            let edge = self.mesh.edge(current);
            // Pushed in reverse order of exploration
            self.pending.push(edge.l_next().fix());
            self.pending.push(edge.o_next().fix());
            self.pending.push(edge.sym().fix());

            let should_yield = match self.mode {
                TraversalMode::AllEdges => true,
                TraversalMode::FirstEdgePerVertex => self.process_vertex(edge),
            };

            if should_yield {
                return Some(edge);
            }
        }
        None
    }
}
