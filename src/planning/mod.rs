//! Planning system
//!
//! Turns a root task plus a world state snapshot into an ordered plan of
//! primitive tasks via backtracking depth-first decomposition search.

pub mod checkpoint;
pub mod planner;
pub mod types;

// Re-export commonly used types
pub use planner::HtnPlanner;
pub use types::{Plan, PlanReport, PlannerConfig};
