use crate::graph::{Graph, Neighbors};
use crate::model::VertexId;

/// Point-to-point reachability over a [`Graph`], depth-first.
///
/// The engine owns the per-query visitation buffer. The buffer is
/// all-false before and after every completed query, so the same graph
/// can be queried repeatedly with no visible side effects. One engine
/// serves one in-flight query at a time; for shared graphs queried from
/// several threads, give each caller its own engine or use [`reachable`].
#[derive(Debug, Default)]
pub struct Reachability {
    visited: Vec<bool>,
}

impl Reachability {
    /// Engine with an empty scratch buffer; it is sized on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a directed path of zero or more edges leads from `start`
    /// to `end`. `start == end` is trivially true.
    ///
    /// Both vertices must lie in `[0, vertex_count)`; boundary layers
    /// validate before calling. Every call performs a fresh traversal;
    /// no result is cached.
    pub fn path_exists(&mut self, graph: &Graph, start: VertexId, end: VertexId) -> bool {
        debug_assert!(graph.contains(start), "start vertex out of range");
        debug_assert!(graph.contains(end), "end vertex out of range");

        self.visited.clear();
        self.visited.resize(graph.vertex_count(), false);

        let found = self.search(graph, start, end);

        // Callers never observe a dirty buffer, on either outcome.
        self.visited.fill(false);
        found
    }

    /// Depth-first search with an explicit work stack. Each frame is the
    /// untried remainder of one vertex's neighbor list, which keeps the
    /// visitation order and short-circuiting of the recursive formulation
    /// while the depth stays off the call stack.
    fn search(&mut self, graph: &Graph, start: VertexId, end: VertexId) -> bool {
        self.visited[start] = true;
        if start == end {
            return true;
        }

        let mut stack: Vec<Neighbors<'_>> = vec![graph.neighbors(start)];
        while let Some(frame) = stack.last_mut() {
            match frame.next() {
                Some(next) if !self.visited[next] => {
                    // Each vertex is entered at most once per query; this
                    // guard is what bounds work on cyclic graphs.
                    self.visited[next] = true;
                    if next == end {
                        return true;
                    }
                    stack.push(graph.neighbors(next));
                }
                Some(_) => {}
                None => {
                    stack.pop();
                }
            }
        }
        false
    }
}

/// One-shot reachability query with a private engine.
///
/// Allocates its own visitation buffer, so any number of callers may
/// query the same shared graph concurrently.
pub fn reachable(graph: &Graph, start: VertexId, end: VertexId) -> bool {
    Reachability::new().path_exists(graph, start, end)
}
