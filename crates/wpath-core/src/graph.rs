use crate::error::GraphError;
use crate::node::NodeId;

/// A directed edge to `successor`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedEdge {
    /// Head of the edge.
    pub successor: NodeId,
    /// Cost of traversing the edge. Always finite and non-negative.
    pub cost: f64,
}

/// Static adjacency-list graph over the dense node ids `0..node_count`.
///
/// Every edge is checked on construction, so a search never sees an out-of-range successor or
/// a cost that would break its optimality guarantee.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: Vec<Vec<WeightedEdge>>,
}

impl Graph {
    /// Builds a graph from one `(successor, cost)` list per node.
    pub fn new(adjacency: Vec<Vec<(NodeId, f64)>>) -> Result<Self, GraphError> {
        let node_count = adjacency.len();
        let mut checked = Vec::with_capacity(node_count);
        for (from, edges) in adjacency.into_iter().enumerate() {
            let mut successors = Vec::with_capacity(edges.len());
            for (to, cost) in edges {
                check_edge(from, to, cost, node_count)?;
                successors.push(WeightedEdge {
                    successor: to,
                    cost,
                });
            }
            checked.push(successors);
        }
        Ok(Graph { adjacency: checked })
    }

    /// Builds a graph with `node_count` nodes where every `(a, b, cost)` adds both `a -> b` and
    /// `b -> a`.
    pub fn from_undirected_edges(
        node_count: usize,
        edges: impl IntoIterator<Item = (NodeId, NodeId, f64)>,
    ) -> Result<Self, GraphError> {
        let mut adjacency = vec![vec![]; node_count];
        for (a, b, cost) in edges {
            check_edge(a, b, cost, node_count)?;
            adjacency[a].push(WeightedEdge { successor: b, cost });
            if a != b {
                adjacency[b].push(WeightedEdge { successor: a, cost });
            }
        }
        Ok(Graph { adjacency })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Outgoing edges of `id`, in the order they were given.
    ///
    /// # Panics
    /// Panics if `id` is not a node of this graph.
    pub fn edges(&self, id: NodeId) -> &[WeightedEdge] {
        &self.adjacency[id]
    }

    /// Sum of every edge cost. No path in the graph can cost more than this.
    pub fn total_cost(&self) -> f64 {
        self.adjacency.iter().flatten().map(|edge| edge.cost).sum()
    }

    /// Cheapest cost of an edge `from -> to`, if there is one.
    pub fn edge_cost(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.adjacency
            .get(from)?
            .iter()
            .filter(|edge| edge.successor == to)
            .map(|edge| edge.cost)
            .min_by(f64::total_cmp)
    }
}

fn check_edge(from: NodeId, to: NodeId, cost: f64, node_count: usize) -> Result<(), GraphError> {
    if from >= node_count || to >= node_count {
        return Err(GraphError::EdgeOutOfRange {
            from,
            to,
            node_count,
        });
    }
    if !cost.is_finite() || cost < 0.0 {
        return Err(GraphError::InvalidWeight { from, to, cost });
    }
    Ok(())
}
