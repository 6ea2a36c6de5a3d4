//! Tasks that decompose into other tasks

use crate::task::Task;
use crate::world::{Condition, ConditionRef};
use std::sync::Arc;

/// One alternative decomposition of a compound task
///
/// Method order on the owning compound task encodes priority: lower index is
/// tried first. A method applies when all of its conditions hold; its
/// subtasks then replace the compound task on the search stack, in declared
/// order.
pub struct Method<A, S: Clone> {
    /// Diagnostic name
    pub name: String,

    /// Preconditions; all must hold (logical AND)
    pub conditions: Vec<ConditionRef<S>>,

    /// Subtasks in execution order; primitive or compound, recursively
    pub subtasks: Vec<Task<A, S>>,
}

impl<A, S: Clone> Method<A, S> {
    /// Create an empty method with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            conditions: Vec::new(),
            subtasks: Vec::new(),
        }
    }

    /// Append a precondition
    pub fn with_condition(mut self, condition: impl Condition<S> + 'static) -> Self {
        self.conditions.push(Arc::new(condition));
        self
    }

    /// Append a subtask
    pub fn with_subtask(mut self, subtask: Task<A, S>) -> Self {
        self.subtasks.push(subtask);
        self
    }
}

/// Task that compounds other tasks
///
/// Exposes an ordered list of [`Method`] alternatives, read-only after
/// construction. The planner picks the lowest-index applicable method and
/// backtracks through the rest when a decomposition dead-ends.
pub trait CompoundTask<A, S: Clone> {
    /// Diagnostic name; never used for search decisions
    fn name(&self) -> &str;

    /// Alternative decompositions in priority order
    fn methods(&self) -> &[Method<A, S>];
}
