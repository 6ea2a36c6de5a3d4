//! Execution system
//!
//! Tick-driven state machine that consumes a plan and drives the controlled
//! agent through it, one primitive task at a time.

pub mod executor;
pub mod progress;

// Re-export commonly used types
pub use executor::{ActionResult, PlanExecutor};
pub use progress::PlanProgress;
