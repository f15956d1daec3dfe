use fxhash::FxHashMap;
use tracing::debug;

use crate::constants::MAX_COST;
use crate::error::PlanError;
use crate::graph::Graph;
use crate::stopwatch::Stopwatch;
use crate::types::{Cost, NodeId};

use super::frontier::Frontier;
use super::heuristic::Heuristic;
use super::plan::Plan;
use super::search_tree::SearchTree;

/// https://en.wikipedia.org/wiki/A*_search_algorithm

struct NodeData {
    settled: bool,
    best_g: Cost,
}

impl NodeData {
    fn new() -> Self {
        NodeData {
            settled: false,
            best_g: MAX_COST,
        }
    }
}

/// Best-first planner over a [`Graph`], parameterized by its heuristic.
/// One `find_plan` call runs one complete search; the frontier and the
/// search tree are private to that invocation.
pub struct Planner<H> {
    heuristic: H,
}

impl<H> Planner<H> {
    pub fn with_heuristic(heuristic: H) -> Planner<H> {
        Planner { heuristic }
    }

    pub fn find_plan<G>(
        &self,
        graph: &G,
        start: NodeId,
        goal: NodeId,
    ) -> Result<Plan, PlanError>
    where
        G: Graph,
        H: Heuristic<G>,
    {
        let stopwatch = Stopwatch::new("planner/find_plan");

        if !graph.has_node(start) {
            return Err(PlanError::NodeNotFound(start));
        }
        if !graph.has_node(goal) {
            return Err(PlanError::NodeNotFound(goal));
        }

        let mut tree = SearchTree::new();
        let mut frontier = Frontier::new();
        let mut data: FxHashMap<NodeId, NodeData> = FxHashMap::default();

        let h = self.heuristic.estimate(graph, start, goal)?;
        let root = tree.insert_root(start, h);
        frontier.insert(root, 0.0, tree.node(root).cost());
        data.insert(
            start,
            NodeData {
                settled: false,
                best_g: 0.0,
            },
        );

        let mut iterations = 0usize;
        let mut nodes_settled = 0usize;

        while let Some((current, g)) = frontier.extract_min() {
            iterations += 1;

            let node = tree.node(current).node();
            let node_data = data.entry(node).or_insert_with(NodeData::new);

            // Node is already settled, skip
            if node_data.settled {
                continue;
            }

            // A cheaper entry for this node was queued after this one, skip
            if g > node_data.best_g {
                continue;
            }

            node_data.settled = true;
            nodes_settled += 1;

            if node == goal {
                let plan = tree.unroll_plan_from(current);
                debug!(iterations, nodes_settled, "plan found");
                stopwatch.report();
                return Ok(plan);
            }

            for child in tree.expand(graph, &self.heuristic, current, goal)? {
                let child_node = *tree.node(child);
                let entry = data
                    .entry(child_node.node())
                    .or_insert_with(NodeData::new);

                if entry.settled {
                    continue;
                }

                if child_node.g() < entry.best_g {
                    entry.best_g = child_node.g();
                    frontier.insert(child, child_node.g(), child_node.cost());
                }
            }
        }

        debug!(iterations, nodes_settled, "frontier exhausted");
        stopwatch.report();

        Err(PlanError::NoPathFound)
    }
}
