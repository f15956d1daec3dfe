use crate::constants::MAX_COST;
use crate::error::PlanError;
use crate::graph::Graph;
use crate::types::{Cost, NodeId};

use super::heuristic::Heuristic;
use super::plan::Plan;

/// Index of a search node within its [`SearchTree`].
pub type SearchNodeId = usize;

/// One candidate partial path: the graph node it occupies, the arena
/// index of the search node it was reached from, the accumulated cost g
/// and the heuristic estimate h.
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    node: NodeId,
    predecessor: Option<SearchNodeId>,
    g: Cost,
    h: Cost,
}

impl SearchNode {
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn predecessor(&self) -> Option<SearchNodeId> {
        self.predecessor
    }

    pub fn g(&self) -> Cost {
        self.g
    }

    pub fn h(&self) -> Cost {
        self.h
    }

    /// Ordering key for the frontier: f = g + h.
    pub fn cost(&self) -> Cost {
        self.g + self.h
    }
}

/// Arena holding the search tree built during one planner invocation.
/// Predecessor links are indices into the arena, so frontier entries
/// sharing an ancestor share its record.
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> SearchTree {
        SearchTree {
            nodes: Vec::with_capacity(64),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: SearchNodeId) -> &SearchNode {
        &self.nodes[id]
    }

    pub fn insert_root(&mut self, node: NodeId, h: Cost) -> SearchNodeId {
        self.insert(SearchNode {
            node,
            predecessor: None,
            g: 0.0,
            h,
        })
    }

    pub fn insert_child(
        &mut self,
        predecessor: SearchNodeId,
        node: NodeId,
        g: Cost,
        h: Cost,
    ) -> SearchNodeId {
        self.insert(SearchNode {
            node,
            predecessor: Some(predecessor),
            g,
            h,
        })
    }

    fn insert(&mut self, node: SearchNode) -> SearchNodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    /// Expands `id` into one child per neighbor of its occupied node,
    /// with `g = g(id) + edge weight` and `h` from the heuristic. Purely
    /// generative: `id` itself is left untouched.
    pub fn expand<G, H>(
        &mut self,
        graph: &G,
        heuristic: &H,
        id: SearchNodeId,
        goal: NodeId,
    ) -> Result<Vec<SearchNodeId>, PlanError>
    where
        G: Graph,
        H: Heuristic<G>,
    {
        let parent = self.nodes[id];

        let mut children = Vec::new();
        for neighbor in graph.neighbors_iter(parent.node)? {
            let Some(weight) = graph.weight_between(parent.node, neighbor) else {
                continue;
            };

            let g = parent.g + weight;
            let h = heuristic.estimate(graph, neighbor, goal)?;
            children.push(self.insert_child(id, neighbor, g, h));
        }

        Ok(children)
    }

    /// Recomputes g by walking the predecessor chain (0 for the root)
    /// and h via the heuristic. The predecessor's costs must already be
    /// finalized. An edge removed from under the chain leaves the node
    /// unreachable (infinite g).
    pub fn update_costs<G, H>(
        &mut self,
        graph: &G,
        heuristic: &H,
        id: SearchNodeId,
        goal: NodeId,
    ) -> Result<(), PlanError>
    where
        G: Graph,
        H: Heuristic<G>,
    {
        let node = self.nodes[id];

        let g = match node.predecessor {
            None => 0.0,
            Some(predecessor) => {
                let previous = self.nodes[predecessor];
                match graph.weight_between(previous.node, node.node) {
                    Some(weight) => previous.g + weight,
                    None => MAX_COST,
                }
            }
        };
        let h = heuristic.estimate(graph, node.node, goal)?;

        let entry = &mut self.nodes[id];
        entry.g = g;
        entry.h = h;

        Ok(())
    }

    /// Walks the predecessor chain from `id` back to the root and
    /// returns the node sequence reversed to run start to goal, with the
    /// accumulated cost of `id`.
    pub fn unroll_plan_from(&self, id: SearchNodeId) -> Plan {
        let mut sequence = Vec::with_capacity(32);

        let mut current = Some(id);
        while let Some(index) = current {
            let search_node = &self.nodes[index];
            sequence.push(search_node.node);
            current = search_node.predecessor;
        }

        sequence.reverse();

        Plan::new(sequence, self.nodes[id].g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::heuristic::{EuclideanHeuristic, ZeroHeuristic};
    use crate::position::Position;
    use crate::position_graph::PositionGraph;
    use crate::test_graph_utils::test_graph::{assert_cost_eq, create_chain_graph};

    #[test]
    fn test_root_has_zero_g() {
        let mut tree = SearchTree::new();
        let root = tree.insert_root(0, 2.5);

        assert_eq!(tree.node(root).g(), 0.0);
        assert_eq!(tree.node(root).cost(), 2.5);
    }

    #[test]
    fn test_expand_isolated_node() {
        let mut graph = PositionGraph::new();
        let n1 = graph.add_node_at(Position::from([1.0, 2.0]));
        let n2 = graph.add_node_at(Position::from([1.0, 3.0]));
        let n3 = graph.add_node_at(Position::from([2.0, 3.0]));
        graph.add_edge_between(n2, n3).unwrap();

        let mut tree = SearchTree::new();
        let root = tree.insert_root(n1, 0.0);

        let children = tree
            .expand(&graph, &ZeroHeuristic, root, n3)
            .unwrap();
        assert!(children.is_empty());
    }

    #[test]
    fn test_expand_creates_one_child_per_neighbor() {
        let mut graph = PositionGraph::new();
        let n1 = graph.add_node_at(Position::from([1.0, 2.0]));
        let n2 = graph.add_node_at(Position::from([1.0, 3.0]));
        let n3 = graph.add_node_at(Position::from([2.0, 3.0]));
        let n4 = graph.add_node_at(Position::from([0.0, 0.0]));
        let n5 = graph.add_node_at(Position::from([-1.0, 0.2]));

        graph.add_edge_between(n1, n2).unwrap();
        graph.add_edge_between(n1, n3).unwrap();
        graph.add_edge_between(n1, n4).unwrap();
        graph.add_edge_between(n3, n5).unwrap();

        let mut tree = SearchTree::new();
        let root = tree.insert_root(n1, 0.0);

        let children = tree
            .expand(&graph, &EuclideanHeuristic, root, n3)
            .unwrap();
        assert_eq!(children.len(), 3);

        for child in children {
            assert_eq!(tree.node(child).predecessor(), Some(root));
            let weight = graph
                .weight_between(n1, tree.node(child).node())
                .unwrap();
            assert_cost_eq(tree.node(child).g(), weight);
        }
    }

    #[test]
    fn test_update_costs_along_chain() {
        let graph = create_chain_graph();

        let mut tree = SearchTree::new();
        let pn1 = tree.insert_root(0, 0.0);
        let pn2 = tree.insert_child(pn1, 1, 0.0, 0.0);
        let pn3 = tree.insert_child(pn2, 2, 0.0, 0.0);

        tree.update_costs(&graph, &EuclideanHeuristic, pn1, 3).unwrap();
        tree.update_costs(&graph, &EuclideanHeuristic, pn2, 3).unwrap();
        tree.update_costs(&graph, &EuclideanHeuristic, pn3, 3).unwrap();

        assert_eq!(tree.node(pn1).g(), 0.0);
        assert_cost_eq(tree.node(pn3).g(), 1.0 + 2.0_f64.sqrt());

        // h is the straight-line distance to the goal, so f > g away
        // from the goal.
        assert!(tree.node(pn3).cost() > tree.node(pn3).g());
    }

    #[test]
    fn test_unroll_plan_runs_start_to_goal() {
        let mut tree = SearchTree::new();
        let pn1 = tree.insert_root(4, 0.0);
        let pn2 = tree.insert_child(pn1, 7, 1.5, 0.0);
        let pn3 = tree.insert_child(pn2, 9, 3.0, 0.0);

        let plan = tree.unroll_plan_from(pn3);
        assert_eq!(plan.sequence(), &[4, 7, 9]);
        assert_eq!(plan.total_cost(), 3.0);
    }
}
