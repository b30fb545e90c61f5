//! Shortest paths on weighted graphs with A*.
//!
//! [`AStarSearcher`] runs a search over a [`Graph`] guided by a per-node heuristic table. The
//! returned path is optimal when the heuristic is *consistent*, i.e. `h(u) <= cost(u, v) + h(v)`
//! for every edge `u -> v` and `h(target) == 0`. This is the caller's responsibility;
//! [`heuristic_is_consistent`] can check it.

use log::{debug, trace};
pub use wpath_core::*;

/// One node of a path returned by [`AStarSearcher::search`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathStep {
    /// The node.
    pub id: NodeId,
    /// Cost of the path from the start node up to this node.
    pub g: f64,
    /// `g` plus the heuristic of this node.
    pub f: f64,
}

/// Counters describing the work done by one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the open list and expanded.
    pub expanded: usize,
    /// Successful edge relaxations.
    pub relaxed: usize,
    /// Relaxations that put an already-expanded node back on the open list.
    pub reinserted: usize,
}

/// A* over a borrowed graph and heuristic table.
///
/// All search state is created per call to [`search`](Self::search), so one searcher can be
/// shared between threads running independent searches.
#[derive(Clone, Copy, Debug)]
pub struct AStarSearcher<'a> {
    graph: &'a Graph,
    heuristic: &'a [f64],
}

impl<'a> AStarSearcher<'a> {
    /// Checks that `heuristic` has one finite, non-negative estimate per node of `graph`, and
    /// that no path cost plus estimate can overflow.
    pub fn new(graph: &'a Graph, heuristic: &'a [f64]) -> Result<Self, SearchError> {
        if heuristic.len() != graph.node_count() {
            return Err(SearchError::HeuristicLength {
                expected: graph.node_count(),
                actual: heuristic.len(),
            });
        }
        if let Some((id, &value)) = heuristic
            .iter()
            .enumerate()
            .find(|(_, h)| !h.is_finite() || **h < 0.0)
        {
            return Err(SearchError::InvalidHeuristic { id, value });
        }

        // Unreached nodes use `f64::INFINITY`, so every real `g + h` must stay below it.
        let total_cost = graph.total_cost();
        let max_heuristic = heuristic.iter().copied().fold(0.0, f64::max);
        if !(total_cost + max_heuristic).is_finite() {
            return Err(SearchError::CostOverflow {
                total_cost,
                max_heuristic,
            });
        }

        Ok(AStarSearcher { graph, heuristic })
    }

    /// The graph being searched.
    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// Finds a shortest path from `start` to `target`.
    ///
    /// Returns an empty path if `target` is unreachable. `start == target` also yields an empty
    /// path, since the target is reached without following any edge.
    pub fn search(&self, start: NodeId, target: NodeId) -> Result<Vec<PathStep>, SearchError> {
        self.search_with_stats(start, target).map(|(path, _)| path)
    }

    /// Like [`search`](Self::search), also reporting how much work the search did.
    pub fn search_with_stats(
        &self,
        start: NodeId,
        target: NodeId,
    ) -> Result<(Vec<PathStep>, SearchStats), SearchError> {
        self.check_node(start)?;
        self.check_node(target)?;

        let mut stats = SearchStats::default();
        let mut nodes = NodeTable::new(self.heuristic);
        nodes.relax(start, 0.0, None);
        let mut open_list = IndexedMinHeap::build([start], &nodes);

        debug!("searching from node {start} to node {target}");

        while let Some(node) = open_list.extract_min(&nodes) {
            if node == target {
                break;
            }
            stats.expanded += 1;

            let node_g = nodes[node].g;
            trace!("expanding node {node} (g = {node_g}, f = {})", nodes[node].f);

            for edge in self.graph.edges(node) {
                let successor = edge.successor;
                let new_g = node_g + edge.cost;
                if new_g >= nodes[successor].g {
                    continue;
                }

                let reached_before = nodes[successor].g.is_finite();
                nodes.relax(successor, new_g, Some(node));
                stats.relaxed += 1;
                trace!("relaxed node {successor} to g = {new_g} via node {node}");

                if open_list.contains(successor) {
                    open_list.decrease_priority(successor, &nodes);
                } else {
                    if reached_before {
                        stats.reinserted += 1;
                    }
                    open_list.insert(successor, &nodes);
                }
            }
        }

        let path: Vec<PathStep> = nodes
            .backtrack(target)
            .into_iter()
            .map(|id| PathStep {
                id,
                g: nodes[id].g,
                f: nodes[id].f,
            })
            .collect();

        if path.is_empty() {
            debug!("no path to node {target} after {} expansions", stats.expanded);
        } else {
            debug!(
                "found path of {} nodes with cost {} after {} expansions",
                path.len(),
                path_cost(&path),
                stats.expanded
            );
        }

        Ok((path, stats))
    }

    fn check_node(&self, id: NodeId) -> Result<(), SearchError> {
        if id >= self.graph.node_count() {
            return Err(SearchError::NodeOutOfRange {
                id,
                node_count: self.graph.node_count(),
            });
        }
        Ok(())
    }
}

/// Total cost of a path; `0.0` for the empty path.
pub fn path_cost(path: &[PathStep]) -> f64 {
    path.last().map_or(0.0, |step| step.g)
}

/// Whether `heuristic` is consistent on `graph`: `h(u) <= cost(u, v) + h(v)` for every edge.
///
/// Returns `false` if the table does not have one entry per node.
pub fn heuristic_is_consistent(graph: &Graph, heuristic: &[f64]) -> bool {
    if heuristic.len() != graph.node_count() {
        return false;
    }
    (0..graph.node_count()).all(|from| {
        graph
            .edges(from)
            .iter()
            .all(|edge| heuristic[from] <= edge.cost + heuristic[edge.successor])
    })
}
