use super::heuristic::ZeroHeuristic;
use super::planner::Planner;

pub struct Dijkstra;

/// Dijkstra is simply a variant of the A* planner with a zero heuristic
impl Dijkstra {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> Planner<ZeroHeuristic> {
        Planner::with_heuristic(ZeroHeuristic)
    }
}
