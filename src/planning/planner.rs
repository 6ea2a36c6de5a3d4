//! Backtracking decomposition search
//!
//! Expands a root task into an ordered sequence of primitive tasks by
//! exhaustive depth-first search over the method choices at every compound
//! task on the current path. Each method choice is checkpointed; a dead end
//! rolls the search back to the most recent checkpoint and tries the next
//! method alternative. "No plan" is a normal search outcome, not an error.

use crate::planning::checkpoint::Checkpoint;
use crate::planning::types::{Plan, PlannerConfig};
use crate::task::{PrimitiveRef, Task};
use crate::telemetry::{TelemetryCollector, TelemetryEvent};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// HTN decomposition planner
///
/// Stateless between calls: all search state lives on the stack of one
/// [`plan`](HtnPlanner::plan) invocation, which blocks the caller's thread
/// until the search returns.
pub struct HtnPlanner {
    config: PlannerConfig,
    telemetry: Option<TelemetryCollector>,
}

impl HtnPlanner {
    /// Create a planner with default (unbounded) configuration
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::default())
    }

    /// Create a planner with the given configuration
    pub fn with_config(config: PlannerConfig) -> Self {
        Self {
            config,
            telemetry: None,
        }
    }

    /// Attach a telemetry collector
    pub fn with_telemetry(mut self, telemetry: TelemetryCollector) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Plan a task sequence towards the root task's goal
    ///
    /// Returns `None` if no combination of method choices and conditions
    /// admits a fully satisfiable expansion (or the decomposition budget ran
    /// out). Identical root task and world state always produce an identical
    /// result: method order alone decides which alternatives are tried, and
    /// rollback re-derives state purely from stored snapshots, never by
    /// re-running effects.
    pub fn plan<A, S: Clone>(&self, root: &Task<A, S>, mut world_state: S) -> Option<Plan<A, S>> {
        let plan_id = Uuid::new_v4();
        self.record(TelemetryEvent::PlanningStarted {
            plan_id,
            root_task: root.name().to_string(),
            timestamp: Instant::now(),
        });

        let mut result: Vec<PrimitiveRef<A, S>> = Vec::new();
        let mut to_process: Vec<Task<A, S>> = vec![root.clone()];
        let mut history: Vec<Checkpoint<A, S>> = Vec::new();

        // Method-index cursor for whichever compound task is currently on
        // top of `to_process`. Shared across the whole search: reset to 0 on
        // every fresh decomposition, restored to `checkpoint.trial + 1` on
        // rollback.
        let mut trial: usize = 0;
        let mut decompositions: usize = 0;

        // Peek, don't pop: checkpoints must capture the compound task still
        // on top of the stack.
        while let Some(task) = to_process.last().cloned() {
            match task {
                Task::Primitive(primitive) => {
                    to_process.pop();

                    if primitive
                        .conditions()
                        .iter()
                        .all(|condition| condition.is_met(&world_state))
                    {
                        // Accept: thread the effects through the world state
                        // strictly in listed order.
                        for effect in primitive.effects() {
                            world_state = effect.apply(&world_state);
                        }
                        self.record(TelemetryEvent::PrimitiveAccepted {
                            plan_id,
                            task: primitive.name().to_string(),
                            timestamp: Instant::now(),
                        });
                        result.push(Arc::clone(&primitive));
                    } else if !self.roll_back(
                        plan_id,
                        &mut history,
                        &mut to_process,
                        &mut result,
                        &mut world_state,
                        &mut trial,
                    ) {
                        self.record_failure(plan_id, "conditions unsatisfiable, no history left");
                        return None;
                    }
                }
                Task::Compound(compound) => {
                    let methods = compound.methods();

                    // First method at or after the cursor whose conditions
                    // all hold.
                    while trial < methods.len()
                        && !methods[trial]
                            .conditions
                            .iter()
                            .all(|condition| condition.is_met(&world_state))
                    {
                        trial += 1;
                    }

                    if trial < methods.len() {
                        decompositions += 1;
                        if let Some(budget) = self.config.max_decompositions {
                            if decompositions > budget {
                                self.record_failure(plan_id, "decomposition budget exhausted");
                                return None;
                            }
                        }

                        history.push(Checkpoint {
                            decomposed: Arc::clone(&compound),
                            world_state: world_state.clone(),
                            plan: result.clone(),
                            to_process: to_process.clone(),
                            trial,
                        });
                        self.record(TelemetryEvent::MethodChosen {
                            plan_id,
                            task: compound.name().to_string(),
                            method: methods[trial].name.clone(),
                            trial,
                            timestamp: Instant::now(),
                        });

                        // Replace the compound task with its subtasks,
                        // reversed so they pop off in declared order.
                        to_process.pop();
                        for subtask in methods[trial].subtasks.iter().rev() {
                            to_process.push(subtask.clone());
                        }

                        trial = 0;
                    } else if !self.roll_back(
                        plan_id,
                        &mut history,
                        &mut to_process,
                        &mut result,
                        &mut world_state,
                        &mut trial,
                    ) {
                        self.record_failure(plan_id, "all methods exhausted, no history left");
                        return None;
                    }
                }
            }
        }

        let plan = Plan::with_id(plan_id, result);
        self.record(TelemetryEvent::PlanningSucceeded {
            plan_id,
            task_count: plan.len(),
            timestamp: Instant::now(),
        });
        Some(plan)
    }

    /// Restore the most recent checkpoint and aim the cursor at the next
    /// method alternative
    ///
    /// Returns false when no checkpoint remains; that is the search's only
    /// failure exit.
    fn roll_back<A, S: Clone>(
        &self,
        plan_id: Uuid,
        history: &mut Vec<Checkpoint<A, S>>,
        to_process: &mut Vec<Task<A, S>>,
        result: &mut Vec<PrimitiveRef<A, S>>,
        world_state: &mut S,
        trial: &mut usize,
    ) -> bool {
        let Some(checkpoint) = history.pop() else {
            return false;
        };

        self.record(TelemetryEvent::RolledBack {
            plan_id,
            task: checkpoint.decomposed.name().to_string(),
            timestamp: Instant::now(),
        });

        *to_process = checkpoint.to_process;
        *result = checkpoint.plan;
        *world_state = checkpoint.world_state;
        *trial = checkpoint.trial + 1;

        true
    }

    fn record(&self, event: TelemetryEvent) {
        if let Some(telemetry) = &self.telemetry {
            telemetry.record(event);
        }
    }

    fn record_failure(&self, plan_id: Uuid, reason: &str) {
        self.record(TelemetryEvent::PlanningFailed {
            plan_id,
            reason: reason.to_string(),
            timestamp: Instant::now(),
        });
    }
}

impl Default for HtnPlanner {
    fn default() -> Self {
        Self::new()
    }
}
