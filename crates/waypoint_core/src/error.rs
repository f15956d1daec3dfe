use thiserror::Error;

use crate::types::NodeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("node with id {0} not found in graph")]
    NodeNotFound(NodeId),
    /// The frontier emptied before the goal was reached. This is an
    /// expected outcome for a disconnected graph, not a programming error.
    #[error("no path found in graph")]
    NoPathFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_not_found_message() {
        let error = PlanError::NodeNotFound(42);
        assert_eq!(error.to_string(), "node with id 42 not found in graph");
    }

    #[test]
    fn test_no_path_found_message() {
        assert_eq!(PlanError::NoPathFound.to_string(), "no path found in graph");
    }
}
