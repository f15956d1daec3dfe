use super::heuristic::EuclideanHeuristic;
use super::planner::Planner;

pub struct AStar;

/// A* with the straight-line distance to the goal as its estimate, the
/// admissible default for Euclidean-weighted position graphs.
impl AStar {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> Planner<EuclideanHeuristic> {
        Planner::with_heuristic(EuclideanHeuristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::dijkstra::Dijkstra;
    use crate::planning::find_plan;
    use crate::test_graph_utils::test_graph::{create_chain_graph, create_diamond_graph};
    use crate::types::{Cost, NodeId};

    #[test]
    fn test_find_plan() {
        let graph = create_chain_graph();

        let astar = AStar::new();
        let plan = astar.find_plan(&graph, 0, 3).unwrap();

        assert_eq!(plan.sequence(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_matches_dijkstra_on_uniquely_weighted_graph() {
        let graph = create_diamond_graph();

        let astar_plan = AStar::new().find_plan(&graph, 0, 3).unwrap();
        let dijkstra_plan = Dijkstra::new().find_plan(&graph, 0, 3).unwrap();

        assert_eq!(astar_plan.sequence(), dijkstra_plan.sequence());
        assert_eq!(astar_plan.total_cost(), dijkstra_plan.total_cost());
    }

    #[test]
    fn test_zero_closure_matches_dijkstra() {
        let graph = create_diamond_graph();

        let zero =
            |_: &crate::position_graph::PositionGraph, _: NodeId, _: NodeId| -> Cost { 0.0 };
        let closure_plan = find_plan(&graph, 0, 3, zero).unwrap();
        let dijkstra_plan = Dijkstra::new().find_plan(&graph, 0, 3).unwrap();

        assert_eq!(closure_plan.sequence(), dijkstra_plan.sequence());
        assert_eq!(closure_plan.total_cost(), dijkstra_plan.total_cost());
    }
}
