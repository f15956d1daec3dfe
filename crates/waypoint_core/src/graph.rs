use crate::error::PlanError;
use crate::position::Position;
use crate::types::{Cost, NodeId};

/// Read-only view of an undirected weighted graph, as consumed by the
/// planner. An edge registered between `a` and `b` answers queries in
/// both directions.
pub trait Graph {
    type NeighborIter<'a>: Iterator<Item = NodeId>
    where
        Self: 'a;

    fn node_count(&self) -> usize;

    fn has_node(&self, node: NodeId) -> bool;

    /// All nodes reachable by one edge from `node`, in a deterministic
    /// per-call order.
    fn neighbors_iter(&self, node: NodeId) -> Result<Self::NeighborIter<'_>, PlanError>;

    /// Weight of the edge between `a` and `b`, looked up in either
    /// direction. `None` when no such edge exists.
    fn weight_between(&self, a: NodeId, b: NodeId) -> Option<Cost>;
}

/// Capability of graphs whose nodes carry a spatial position, required
/// by the Euclidean heuristic.
pub trait PositionAccess {
    fn position(&self, node: NodeId) -> Result<&Position, PlanError>;
}
