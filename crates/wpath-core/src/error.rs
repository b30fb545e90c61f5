use thiserror::Error;

use crate::node::NodeId;

/// Reasons a [`Graph`](crate::Graph) can be rejected at construction time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An edge names a node outside `0..node_count`.
    #[error("edge {from} -> {to} leaves the graph of {node_count} nodes")]
    EdgeOutOfRange {
        /// Tail of the offending edge.
        from: NodeId,
        /// Head of the offending edge.
        to: NodeId,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// An edge cost is negative, infinite or NaN.
    #[error("edge {from} -> {to} has invalid cost {cost}")]
    InvalidWeight {
        /// Tail of the offending edge.
        from: NodeId,
        /// Head of the offending edge.
        to: NodeId,
        /// The rejected cost.
        cost: f64,
    },
}

/// Reasons a search is refused before it begins.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The heuristic table does not have one entry per node.
    #[error("heuristic has {actual} entries but the graph has {expected} nodes")]
    HeuristicLength {
        /// Number of nodes in the graph.
        expected: usize,
        /// Number of heuristic entries supplied.
        actual: usize,
    },
    /// A heuristic value is negative, infinite or NaN.
    #[error("heuristic for node {id} is {value}, expected a finite non-negative value")]
    InvalidHeuristic {
        /// Node carrying the bad estimate.
        id: NodeId,
        /// The rejected estimate.
        value: f64,
    },
    /// The start or target node is outside the graph.
    #[error("node {id} is out of range for a graph of {node_count} nodes")]
    NodeOutOfRange {
        /// The requested node.
        id: NodeId,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// Path costs plus heuristic estimates can exceed the largest finite `f64`.
    #[error("edge costs sum to {total_cost} and the largest heuristic is {max_heuristic}; path costs could overflow")]
    CostOverflow {
        /// Sum of every edge cost in the graph.
        total_cost: f64,
        /// Largest heuristic estimate.
        max_heuristic: f64,
    },
}
