mod handles;
mod quad_edge;
mod ring_iterator;
mod traversal;

pub mod edge_operations;
pub(crate) mod math;


pub use handles::EdgeHandle;
pub use quad_edge::{FixedEdgeHandle, QuadEdgeMesh};
pub use traversal::{MeshWalk, TraversalMode};

pub use math::{validate_coordinate, InsertionError};

/// Iterators over the rings of a quad-edge mesh.
pub mod iterators {
    pub use super::ring_iterator::{LeftFaceRing, OriginRing, RingIterator, RingStep};
}
