//! Plan execution state machine
//!
//! Owns the current plan and drives the active primitive task against the
//! controlled agent, one tick per call. Execution is pull-based: the caller
//! invokes [`PlanExecutor::act_on_plan`] from its own loop at whatever
//! cadence it wants; there is no hidden scheduling.

use crate::execution::progress::PlanProgress;
use crate::planning::{HtnPlanner, Plan, PlanReport};
use crate::task::{OperationResult, Task};
use crate::telemetry::{TelemetryCollector, TelemetryEvent};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Result of one execution tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionResult {
    /// A task is active and not finished yet
    Running,

    /// The last task of the plan just finished successfully
    AllFinishedSuccessfully,

    /// The active task failed; the plan is discarded and the engine never
    /// auto-replans; the caller must start a new root task
    Failed,

    /// No plan is active
    NoPlan,
}

/// Drives a planned task sequence against an agent
///
/// State machine: Idle (no active plan) → Running (one task active) → back
/// to Idle on completion or failure. Planning happens transiently inside
/// [`start_root_task`](PlanExecutor::start_root_task). Single-owner: not
/// safe for concurrent access without external synchronization.
pub struct PlanExecutor<A, S: Clone> {
    planner: HtnPlanner,
    plan: Option<Plan<A, S>>,
    is_running_plan: bool,
    progress: PlanProgress,
    telemetry: Option<TelemetryCollector>,
}

impl<A, S: Clone> PlanExecutor<A, S> {
    /// Create an executor with a default planner
    pub fn new() -> Self {
        Self::with_planner(HtnPlanner::new())
    }

    /// Create an executor around a configured planner
    pub fn with_planner(planner: HtnPlanner) -> Self {
        Self {
            planner,
            plan: None,
            is_running_plan: false,
            progress: PlanProgress::default(),
            telemetry: None,
        }
    }

    /// Attach a telemetry collector for execution events
    pub fn with_telemetry(mut self, telemetry: TelemetryCollector) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Whether a plan is currently running
    pub fn is_running_plan(&self) -> bool {
        self.is_running_plan
    }

    /// Progress through the active plan
    pub fn progress(&self) -> PlanProgress {
        self.progress
    }

    /// Name of the active task, if a plan is running
    pub fn active_task_name(&self) -> Option<&str> {
        if !self.is_running_plan {
            return None;
        }
        self.plan.as_ref().and_then(|plan| plan.front()).map(|task| task.name())
    }

    /// Report for the active plan, if any
    pub fn plan_report(&self) -> Option<PlanReport> {
        self.plan.as_ref().map(Plan::report)
    }

    /// Plan towards the root task's goal and start executing
    ///
    /// If a plan is currently running, its active task's interruption hook
    /// is invoked exactly once before the plan is discarded; there is no
    /// merge or queueing of plans. Returns true if a non-empty plan was
    /// found and its first task initialized, false otherwise (the executor
    /// is then idle).
    pub fn start_root_task(&mut self, agent: &mut A, root: &Task<A, S>, world_state: S) -> bool {
        if self.is_running_plan {
            if let Some(active) = self.plan.as_ref().and_then(|plan| plan.front()) {
                active.on_interrupted();
                self.record(TelemetryEvent::PlanInterrupted {
                    task: active.name().to_string(),
                    timestamp: Instant::now(),
                });
            }
        }

        match self.planner.plan(root, world_state) {
            Some(plan) if !plan.is_empty() => {
                self.progress = PlanProgress::new(plan.len());
                self.plan = Some(plan);
                self.is_running_plan = true;
                if let Some(first) = self.plan.as_ref().and_then(|plan| plan.front()) {
                    first.initialize(agent);
                    self.record(TelemetryEvent::TaskInitialized {
                        task: first.name().to_string(),
                        timestamp: Instant::now(),
                    });
                }
                true
            }
            _ => {
                self.plan = None;
                self.is_running_plan = false;
                self.progress = PlanProgress::default();
                false
            }
        }
    }

    /// Control the agent according to the plan: exactly one tick
    pub fn act_on_plan(&mut self, agent: &mut A) -> ActionResult {
        if !self.is_running_plan {
            return ActionResult::NoPlan;
        }

        // Running implies a non-empty plan; the machine only enters Running
        // with at least one task and leaves it before the plan drains.
        debug_assert!(
            self.plan.as_ref().is_some_and(|plan| !plan.is_empty()),
            "running plan with no active task"
        );
        let Some(active) = self.plan.as_ref().and_then(|plan| plan.front().cloned()) else {
            return ActionResult::NoPlan;
        };

        match active.operate(agent) {
            OperationResult::Success => {
                if let Some(plan) = self.plan.as_mut() {
                    plan.pop_front();
                }
                self.progress.advance();
                self.record(TelemetryEvent::TaskCompleted {
                    task: active.name().to_string(),
                    success: true,
                    timestamp: Instant::now(),
                });

                match self.plan.as_ref().and_then(|plan| plan.front().cloned()) {
                    Some(next) => {
                        next.initialize(agent);
                        self.record(TelemetryEvent::TaskInitialized {
                            task: next.name().to_string(),
                            timestamp: Instant::now(),
                        });
                        ActionResult::Running
                    }
                    None => {
                        self.plan = None;
                        self.is_running_plan = false;
                        ActionResult::AllFinishedSuccessfully
                    }
                }
            }
            OperationResult::Running => ActionResult::Running,
            OperationResult::Failure => {
                self.record(TelemetryEvent::TaskCompleted {
                    task: active.name().to_string(),
                    success: false,
                    timestamp: Instant::now(),
                });
                self.plan = None;
                self.is_running_plan = false;
                ActionResult::Failed
            }
        }
    }

    fn record(&self, event: TelemetryEvent) {
        if let Some(telemetry) = &self.telemetry {
            telemetry.record(event);
        }
    }
}

impl<A, S: Clone> Default for PlanExecutor<A, S> {
    fn default() -> Self {
        Self::new()
    }
}
