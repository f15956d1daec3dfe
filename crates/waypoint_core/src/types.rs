pub type NodeId = usize;
pub type EdgeId = usize;

/// Accumulated path cost, in the same unit as edge weights.
pub type Cost = f64;
