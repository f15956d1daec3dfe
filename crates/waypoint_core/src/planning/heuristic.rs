use crate::error::PlanError;
use crate::graph::{Graph, PositionAccess};
use crate::types::{Cost, NodeId};

/// Estimate of the remaining cost from `node` to `goal`.
///
/// The planner only guarantees an optimal plan for admissible estimates
/// (never overestimating the true remaining cost). Nothing verifies
/// admissibility; an inadmissible heuristic silently yields a
/// non-optimal plan rather than an error.
pub trait Heuristic<G: Graph> {
    fn estimate(&self, graph: &G, node: NodeId, goal: NodeId) -> Result<Cost, PlanError>;
}

/// Plain closures over `(graph, node, goal)` can be supplied directly.
impl<G: Graph, F> Heuristic<G> for F
where
    F: Fn(&G, NodeId, NodeId) -> Cost,
{
    fn estimate(&self, graph: &G, node: NodeId, goal: NodeId) -> Result<Cost, PlanError> {
        Ok(self(graph, node, goal))
    }
}

pub struct ZeroHeuristic;

impl<G: Graph> Heuristic<G> for ZeroHeuristic {
    #[inline(always)]
    fn estimate(&self, _graph: &G, _node: NodeId, _goal: NodeId) -> Result<Cost, PlanError> {
        Ok(0.0)
    }
}

/// Straight-line distance from `node` to `goal`. Admissible whenever
/// edge weights are the Euclidean distance between endpoint positions.
pub struct EuclideanHeuristic;

impl<G: Graph + PositionAccess> Heuristic<G> for EuclideanHeuristic {
    fn estimate(&self, graph: &G, node: NodeId, goal: NodeId) -> Result<Cost, PlanError> {
        let from = graph.position(node)?;
        let to = graph.position(goal)?;
        Ok(from.euclidean_distance(to))
    }
}
