use fxhash::FxHashMap;

use crate::error::PlanError;
use crate::graph::{Graph, PositionAccess};
use crate::position::Position;
use crate::types::{Cost, EdgeId, NodeId};

pub struct GraphEdge {
    start_node: NodeId,
    end_node: NodeId,
}

impl GraphEdge {
    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn adj_node(&self, node: NodeId) -> NodeId {
        if self.start_node == node {
            self.end_node
        } else {
            self.start_node
        }
    }

    fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.start_node == a && self.end_node == b)
            || (self.start_node == b && self.end_node == a)
    }
}

/// An undirected graph of nodes embedded in Euclidean space. Node ids
/// are assigned monotonically starting at 0; edge weight is the
/// Euclidean distance between the endpoint positions, computed on
/// demand and never cached.
pub struct PositionGraph {
    positions: Vec<Position>,
    edges: FxHashMap<EdgeId, GraphEdge>,
    adjacency_list: Vec<Vec<EdgeId>>,
    next_edge_id: EdgeId,
}

impl PositionGraph {
    pub fn new() -> PositionGraph {
        PositionGraph {
            positions: Vec::new(),
            edges: FxHashMap::default(),
            adjacency_list: Vec::new(),
            next_edge_id: 0,
        }
    }

    pub fn add_node_at(&mut self, position: Position) -> NodeId {
        let node_id = self.positions.len();
        self.positions.push(position);
        self.adjacency_list.push(Vec::new());
        node_id
    }

    /// The node sitting exactly at `position`, if any.
    pub fn node_at(&self, position: &Position) -> Option<NodeId> {
        self.positions.iter().position(|p| p == position)
    }

    pub fn add_edge_between(&mut self, a: NodeId, b: NodeId) -> Result<EdgeId, PlanError> {
        if !self.has_node(a) {
            return Err(PlanError::NodeNotFound(a));
        }
        if !self.has_node(b) {
            return Err(PlanError::NodeNotFound(b));
        }

        let edge_id = self.next_edge_id;
        self.next_edge_id += 1;
        self.edges.insert(
            edge_id,
            GraphEdge {
                start_node: a,
                end_node: b,
            },
        );

        self.adjacency_list[a].push(edge_id);
        if b != a {
            self.adjacency_list[b].push(edge_id);
        }

        Ok(edge_id)
    }

    /// Removes the edge between `a` and `b`, in either direction.
    /// Returns false when no such edge exists.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        let Some(edge_id) = self.edge_between(a, b) else {
            return false;
        };

        self.edges.remove(&edge_id);
        for node in [a, b] {
            if let Some(list) = self.adjacency_list.get_mut(node) {
                list.retain(|&id| id != edge_id);
            }
        }

        true
    }

    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        let edge_ids = self.adjacency_list.get(a)?;
        edge_ids.iter().copied().find(|edge_id| {
            self.edges
                .get(edge_id)
                .is_some_and(|edge| edge.connects(a, b))
        })
    }

    pub fn edge(&self, edge_id: EdgeId) -> Option<&GraphEdge> {
        self.edges.get(&edge_id)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Default for PositionGraph {
    fn default() -> Self {
        PositionGraph::new()
    }
}

pub struct Neighbors<'a> {
    graph: &'a PositionGraph,
    node: NodeId,
    edge_ids: std::slice::Iter<'a, EdgeId>,
}

impl Iterator for Neighbors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.edge_ids
            .by_ref()
            .find_map(|edge_id| self.graph.edges.get(edge_id))
            .map(|edge| edge.adj_node(self.node))
    }
}

impl Graph for PositionGraph {
    type NeighborIter<'a> = Neighbors<'a>;

    fn node_count(&self) -> usize {
        self.positions.len()
    }

    fn has_node(&self, node: NodeId) -> bool {
        node < self.positions.len()
    }

    fn neighbors_iter(&self, node: NodeId) -> Result<Neighbors<'_>, PlanError> {
        let edge_ids = self
            .adjacency_list
            .get(node)
            .ok_or(PlanError::NodeNotFound(node))?;

        Ok(Neighbors {
            graph: self,
            node,
            edge_ids: edge_ids.iter(),
        })
    }

    fn weight_between(&self, a: NodeId, b: NodeId) -> Option<Cost> {
        self.edge_between(a, b)?;
        Some(self.positions[a].euclidean_distance(&self.positions[b]))
    }
}

impl PositionAccess for PositionGraph {
    fn position(&self, node: NodeId) -> Result<&Position, PlanError> {
        self.positions
            .get(node)
            .ok_or(PlanError::NodeNotFound(node))
    }
}
