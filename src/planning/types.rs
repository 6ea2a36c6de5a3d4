//! Core data structures for the planning system
//!
//! Defines the plan produced by the decomposition search, its serializable
//! report, and the planner configuration.

use crate::errors::{HtnError, Result};
use crate::task::PrimitiveRef;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use uuid::Uuid;

/// Planner configuration
#[derive(Debug, Clone, Default)]
pub struct PlannerConfig {
    /// Maximum number of decompositions (checkpoint pushes, counting
    /// re-decompositions after rollback) allowed in one search.
    ///
    /// `None` leaves the search unbounded; a method that transitively
    /// reintroduces its own compound task will then recurse without limit.
    /// Exceeding the budget is a normal "no plan" outcome, not an error.
    pub max_decompositions: Option<usize>,
}

impl PlannerConfig {
    /// Configuration with a decomposition budget
    pub fn bounded(max_decompositions: usize) -> Self {
        Self {
            max_decompositions: Some(max_decompositions),
        }
    }
}

/// Ordered, first-in-first-out sequence of primitive tasks
///
/// The successful output of the decomposition search. Owned exclusively by
/// the executor while active and consumed one element at a time.
pub struct Plan<A, S: Clone> {
    id: Uuid,
    tasks: VecDeque<PrimitiveRef<A, S>>,
}

impl<A, S: Clone> Plan<A, S> {
    pub(crate) fn with_id(id: Uuid, tasks: Vec<PrimitiveRef<A, S>>) -> Self {
        Self {
            id,
            tasks: tasks.into(),
        }
    }

    /// Unique identifier assigned by the planning call that produced this plan
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Number of tasks remaining
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether any tasks remain
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The active (front) task, if any
    pub fn front(&self) -> Option<&PrimitiveRef<A, S>> {
        self.tasks.front()
    }

    pub(crate) fn pop_front(&mut self) -> Option<PrimitiveRef<A, S>> {
        self.tasks.pop_front()
    }

    /// Names of the remaining tasks, in execution order
    pub fn task_names(&self) -> Vec<String> {
        self.tasks.iter().map(|task| task.name().to_string()).collect()
    }

    /// Re-apply the plan's conditions and effects to a world state
    ///
    /// Replaying a plan against the initial state it was searched from
    /// reproduces exactly the state transitions the search accepted. Against
    /// any other state the first unsatisfied condition is reported.
    pub fn replay(&self, world_state: &S) -> Result<S> {
        let mut state = world_state.clone();
        for task in &self.tasks {
            for (index, condition) in task.conditions().iter().enumerate() {
                if !condition.is_met(&state) {
                    return Err(HtnError::ConditionUnsatisfied {
                        task: task.name().to_string(),
                        condition_index: index,
                    });
                }
            }
            for effect in task.effects() {
                state = effect.apply(&state);
            }
        }
        Ok(state)
    }

    /// Build a serializable summary of this plan
    pub fn report(&self) -> PlanReport {
        PlanReport {
            plan_id: self.id,
            task_count: self.len(),
            task_names: self.task_names(),
        }
    }
}

impl<A, S: Clone> fmt::Debug for Plan<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plan")
            .field("id", &self.id)
            .field("tasks", &self.task_names())
            .finish()
    }
}

/// Serializable summary of a produced plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    /// Identifier of the planning call
    pub plan_id: Uuid,

    /// Number of primitive tasks in the plan
    pub task_count: usize,

    /// Task names in execution order
    pub task_names: Vec<String>,
}

impl PlanReport {
    /// Serialize the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get a human-readable summary of the plan
    pub fn summary(&self) -> String {
        format!(
            "plan {} ({} tasks): {}",
            self.plan_id,
            self.task_count,
            self.task_names.join(" -> ")
        )
    }
}
