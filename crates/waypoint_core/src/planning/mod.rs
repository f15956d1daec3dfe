pub mod astar;
pub mod dijkstra;
pub mod heuristic;
pub mod plan;
pub mod planner;

pub mod frontier;
pub mod search_tree;

use crate::error::PlanError;
use crate::graph::Graph;
use crate::types::NodeId;

use self::heuristic::Heuristic;
use self::plan::Plan;
use self::planner::Planner;

/// Finds a least-cost path from `start` to `goal` with a single
/// best-first search, ordered by the supplied heuristic. Passing the
/// zero heuristic degenerates the search to Dijkstra's algorithm.
pub fn find_plan<G, H>(
    graph: &G,
    start: NodeId,
    goal: NodeId,
    heuristic: H,
) -> Result<Plan, PlanError>
where
    G: Graph,
    H: Heuristic<G>,
{
    Planner::with_heuristic(heuristic).find_plan(graph, start, goal)
}
