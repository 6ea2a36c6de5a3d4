//! Directly executable tasks

use crate::world::{ConditionRef, EffectRef};
use serde::{Deserialize, Serialize};

/// Outcome of one execution tick of a primitive task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationResult {
    /// Not finished yet
    Running,

    /// Finished successfully
    Success,

    /// Finished unsuccessfully
    Failure,
}

/// Task that can be executed directly
///
/// Hosts implement this once per concrete action. The data side (conditions
/// and effects) is read-only after construction and drives the planner; the
/// hook side drives execution against the agent, one tick at a time.
///
/// # Hook contract
///
/// - [`initialize`](PrimitiveTask::initialize) is called exactly once each
///   time the task becomes the active task of a plan.
/// - [`operate`](PrimitiveTask::operate) is called once per tick while the
///   task is active. Side effects on the agent are the task's business,
///   opaque to the core.
/// - [`on_interrupted`](PrimitiveTask::on_interrupted) is called exactly
///   once, only when a running plan is discarded by a new root task before
///   this task reached `Success` or `Failure`. It is never called on natural
///   completion or failure.
pub trait PrimitiveTask<A, S: Clone> {
    /// Diagnostic name; never used for search decisions
    fn name(&self) -> &str;

    /// Conditions that must all hold for the planner to accept this task
    fn conditions(&self) -> &[ConditionRef<S>];

    /// Effects applied strictly in listed order when the task is accepted,
    /// each effect consuming the previous effect's output
    fn effects(&self) -> &[EffectRef<S>];

    /// Prepare the task for execution against the agent
    fn initialize(&self, agent: &mut A);

    /// Execute one tick against the agent
    fn operate(&self, agent: &mut A) -> OperationResult;

    /// React to the owning plan being discarded mid-execution
    fn on_interrupted(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_result_equality() {
        assert_eq!(OperationResult::Running, OperationResult::Running);
        assert_ne!(OperationResult::Success, OperationResult::Failure);
    }

    #[test]
    fn test_operation_result_serialization() {
        let json = serde_json::to_string(&OperationResult::Success).unwrap();
        let back: OperationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OperationResult::Success);
    }
}
