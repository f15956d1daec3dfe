pub mod error;
pub mod graph;
pub mod planning;
pub mod position;
pub mod position_graph;
pub mod types;

pub(crate) mod constants;
pub(crate) mod stopwatch;

pub use error::PlanError;
pub use planning::find_plan;
pub use planning::plan::Plan;
