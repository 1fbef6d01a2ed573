use super::VertexId;
use std::collections::{HashMap, HashSet, hash_map};
use std::iter::FusedIterator;

/// Adjacency storage shared by all variants: vertex id -> neighbour set
pub(crate) type AdjacencyMap = HashMap<VertexId, HashSet<VertexId>>;

/// Read-only iterator over the vertex ids of a graph.
///
/// Borrows the owning graph's adjacency map, so the graph cannot be mutated
/// while a view is alive. Cloning a view yields an independent cursor at
/// the same position; calling `vertices()` again starts over.
#[derive(Debug, Clone)]
pub struct Vertices<'a> {
    inner: hash_map::Keys<'a, VertexId, HashSet<VertexId>>,
}

impl<'a> Vertices<'a> {
    pub(crate) fn new(adjacency: &'a AdjacencyMap) -> Self {
        Self {
            inner: adjacency.keys(),
        }
    }
}

impl Iterator for Vertices<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Vertices<'_> {}

impl FusedIterator for Vertices<'_> {}
