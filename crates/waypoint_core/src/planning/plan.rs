use serde::{Deserialize, Serialize};

use crate::types::{Cost, NodeId};

/// The result of a successful search: the node sequence from start to
/// goal inclusive and the accumulated cost along it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    sequence: Vec<NodeId>,
    total_cost: Cost,
}

impl Plan {
    pub(crate) fn new(sequence: Vec<NodeId>, total_cost: Cost) -> Plan {
        Plan {
            sequence,
            total_cost,
        }
    }

    pub fn sequence(&self) -> &[NodeId] {
        &self.sequence
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }
}
