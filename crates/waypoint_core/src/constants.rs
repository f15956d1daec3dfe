use crate::types::Cost;

pub(crate) const MAX_COST: Cost = f64::INFINITY;
