use core::marker::PhantomData;

use super::handles::EdgeHandle;

/// Describes how to step along a closed ring of edges.
pub trait RingStep {
    /// Returns the edge following `edge` in counterclockwise order.
    fn next<S>(edge: EdgeHandle<S>) -> EdgeHandle<S>;

    /// Returns the edge preceding `edge` in counterclockwise order.
    fn next_back<S>(edge: EdgeHandle<S>) -> EdgeHandle<S>;
}

/// Steps through all edges sharing an origin.
#[derive(Debug, Clone, Copy)]
pub struct OriginRing;

impl RingStep for OriginRing {
    fn next<S>(edge: EdgeHandle<S>) -> EdgeHandle<S> {
        edge.o_next()
    }

    fn next_back<S>(edge: EdgeHandle<S>) -> EdgeHandle<S> {
        edge.o_prev()
    }
}

/// Steps through all edges bounding the same left face.
#[derive(Debug, Clone, Copy)]
pub struct LeftFaceRing;

impl RingStep for LeftFaceRing {
    fn next<S>(edge: EdgeHandle<S>) -> EdgeHandle<S> {
        edge.l_next()
    }

    fn next_back<S>(edge: EdgeHandle<S>) -> EdgeHandle<S> {
        edge.l_prev()
    }
}

/// Iterates once around a ring of edges, starting at a given edge.
///
/// Created by [EdgeHandle::origin_ring] and [EdgeHandle::left_face_ring].
pub struct RingIterator<'a, S, R> {
    current_handle: EdgeHandle<'a, S>,
    final_handle: EdgeHandle<'a, S>,
    iteration_finished: bool,
    step: PhantomData<R>,
}

impl<'a, S, R: RingStep> RingIterator<'a, S, R> {
    pub(crate) fn new(start_edge: EdgeHandle<'a, S>) -> Self {
        RingIterator {
            current_handle: start_edge,
            final_handle: start_edge,
            iteration_finished: false,
            step: PhantomData,
        }
    }
}

impl<'a, S, R: RingStep> Iterator for RingIterator<'a, S, R> {
    type Item = EdgeHandle<'a, S>;

    fn next(&mut self) -> Option<EdgeHandle<'a, S>> {
        if self.iteration_finished {
            return None;
        }
        let result = self.current_handle;
        self.current_handle = R::next(self.current_handle);
        if self.current_handle == self.final_handle {
            self.iteration_finished = true;
        }
        Some(result)
    }
}

impl<'a, S, R: RingStep> DoubleEndedIterator for RingIterator<'a, S, R> {
    fn next_back(&mut self) -> Option<EdgeHandle<'a, S>> {
        if self.iteration_finished {
            return None;
        }
        self.final_handle = R::next_back(self.final_handle);
        if self.current_handle == self.final_handle {
            self.iteration_finished = true;
        }
        Some(self.final_handle)
    }
}
