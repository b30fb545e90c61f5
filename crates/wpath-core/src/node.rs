use std::ops::Index;

use crate::pqueue::Priority;

/// Identity of a node: its index in the graph.
pub type NodeId = usize;

/// Search state of a single node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    /// Index of the node in the graph.
    pub id: NodeId,
    /// Best known cost from the start node. `f64::INFINITY` while unreached.
    pub g: f64,
    /// Heuristic estimate of the cost to the target.
    pub h: f64,
    /// `g + h`; the open list orders nodes by this value.
    pub f: f64,
    /// Node from which the current best path to this node was found.
    pub parent: Option<NodeId>,
}

/// Arena of [`Node`]s for one search, indexed by [`NodeId`].
///
/// Parents are stored as ids into this table, so path reconstruction never needs to follow
/// owning references.
#[derive(Clone, Debug)]
pub struct NodeTable {
    nodes: Vec<Node>,
}

impl NodeTable {
    /// Creates one unreached node per heuristic entry.
    pub fn new(heuristic: &[f64]) -> Self {
        NodeTable {
            nodes: heuristic
                .iter()
                .enumerate()
                .map(|(id, &h)| Node {
                    id,
                    g: f64::INFINITY,
                    h,
                    f: f64::INFINITY,
                    parent: None,
                })
                .collect(),
        }
    }

    /// Number of nodes in the table.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the table has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Records a new best cost for `id`, keeping `f` in step with `g`.
    ///
    /// If the node is in an open list, the caller must reorder it afterwards.
    pub fn relax(&mut self, id: NodeId, g: f64, parent: Option<NodeId>) {
        let node = &mut self.nodes[id];
        node.g = g;
        node.f = g + node.h;
        node.parent = parent;
    }

    /// Follows parent links back from `target` and returns the node ids in start-to-target
    /// order.
    ///
    /// Returns an empty path if `target` has no parent, which covers both an unreached target
    /// and a target that is the start node.
    pub fn backtrack(&self, target: NodeId) -> Vec<NodeId> {
        if self.nodes[target].parent.is_none() {
            return vec![];
        }

        let mut path = vec![target];
        while let Some(parent) = self.nodes[path[path.len() - 1]].parent {
            path.push(parent);
        }
        path.reverse();
        path
    }
}

impl Index<NodeId> for NodeTable {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }
}

impl Priority for NodeTable {
    fn priority(&self, id: NodeId) -> f64 {
        self.nodes[id].f
    }
}
