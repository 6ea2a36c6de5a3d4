//! htn-planner - Hierarchical Task Network planning for goal-directed agents
//!
//! Given a goal-shaped root task and a snapshot of world state, the planner
//! searches a tree of task decompositions to produce an ordered sequence of
//! directly executable actions; the executor then drives that sequence
//! against a controlled agent, one tick at a time.
//!
//! # Architecture
//!
//! - **world**: `Condition` / `Effect` contracts over a host-defined world
//!   state value type
//! - **task**: closed Primitive/Compound task variants and method tables
//! - **planning**: backtracking decomposition search with checkpoint rollback
//! - **execution**: pull-based plan execution state machine
//! - **telemetry**: event collection for search and execution observability
//!
//! The host supplies the agent type, the world state type, and concrete
//! `Condition` / `Effect` / task implementations; the core only orchestrates
//! them. Everything is single-threaded and synchronous: one planning call
//! blocks until the search returns, one `act_on_plan` call performs exactly
//! one tick.

pub mod errors;
pub mod execution;
pub mod planning;
pub mod task;
pub mod telemetry;
pub mod world;

// Re-export commonly used types
pub use errors::{HtnError, Result};
pub use execution::{ActionResult, PlanExecutor, PlanProgress};
pub use planning::{HtnPlanner, Plan, PlanReport, PlannerConfig};
pub use task::{CompoundTask, Method, OperationResult, PrimitiveTask, Task};
pub use telemetry::{TelemetryCollector, TelemetryEvent, TelemetryStats};
pub use world::{Condition, Effect, FnCondition, FnEffect};
