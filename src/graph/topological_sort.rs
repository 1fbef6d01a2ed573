//! Topological sorting by depth-first search with three-color cycle detection.

use super::{Directed, VertexId};
use std::collections::{HashMap, hash_set};
use std::fmt;
use tracing::{debug, trace};

/// Traversal state of a vertex during a single sort call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsState {
    NotVisited,
    InProgress,
    Done,
}

impl DfsState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DfsState::NotVisited => "not visited",
            DfsState::InProgress => "in progress",
            DfsState::Done => "done",
        }
    }
}

impl fmt::Display for DfsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One level of the explicit DFS stack: a vertex and the rest of its out-edges
struct Frame<'a> {
    vertex: VertexId,
    targets: Option<hash_set::Iter<'a, VertexId>>,
}

impl<'a> Frame<'a> {
    fn new<G: Directed>(graph: &'a G, vertex: VertexId) -> Self {
        Self {
            vertex,
            targets: graph.edges(vertex).ok().map(|targets| targets.iter()),
        }
    }

    fn next_target(&mut self) -> Option<VertexId> {
        self.targets.as_mut().and_then(Iterator::next).copied()
    }
}

/// Sort the vertices so that for every edge `(u, v)`, `u` comes before `v`.
///
/// Returns an empty vector if the graph has a directed cycle. An empty graph
/// also yields an empty vector; use [`try_topological_sort`] to tell them apart.
pub fn topological_sort<G: Directed>(graph: &G) -> Vec<VertexId> {
    try_topological_sort(graph).unwrap_or_default()
}

/// Like [`topological_sort`], but returns `None` when a cycle is found.
///
/// Roots are taken in the graph's iteration order, so the relative order of
/// independent subgraphs is unspecified. Traversal state lives only for the
/// duration of this call.
pub fn try_topological_sort<G: Directed>(graph: &G) -> Option<Vec<VertexId>> {
    let mut state: HashMap<VertexId, DfsState> = graph
        .vertices()
        .map(|vertex| (vertex, DfsState::NotVisited))
        .collect();
    let mut post_order = Vec::with_capacity(graph.num_vertices());

    for root in graph.vertices() {
        if state.get(&root) != Some(&DfsState::NotVisited) {
            continue;
        }
        if !visit(graph, root, &mut state, &mut post_order) {
            debug!(root, "cycle detected, aborting topological sort");
            return None;
        }
    }

    post_order.reverse();
    debug!(vertices = post_order.len(), "topological sort finished");
    Some(post_order)
}

/// Depth-first walk from `root`, appending finished vertices in post-order.
///
/// Returns false as soon as an edge into an in-progress vertex is found.
fn visit<G: Directed>(
    graph: &G,
    root: VertexId,
    state: &mut HashMap<VertexId, DfsState>,
    post_order: &mut Vec<VertexId>,
) -> bool {
    state.insert(root, DfsState::InProgress);
    trace!(vertex = root, "dfs enter");
    let mut stack = vec![Frame::new(graph, root)];

    while let Some(frame) = stack.last_mut() {
        let vertex = frame.vertex;

        let Some(target) = frame.next_target() else {
            stack.pop();
            state.insert(vertex, DfsState::Done);
            trace!(vertex, state = %DfsState::Done, "dfs leave");
            post_order.push(vertex);
            continue;
        };

        let target_state = state.get(&target).copied().unwrap_or(DfsState::NotVisited);
        trace!(vertex, target, state = %target_state, "dfs edge");

        match target_state {
            DfsState::NotVisited => {
                state.insert(target, DfsState::InProgress);
                trace!(vertex = target, "dfs enter");
                stack.push(Frame::new(graph, target));
            }
            DfsState::InProgress => return false,
            DfsState::Done => {}
        }
    }

    true
}
