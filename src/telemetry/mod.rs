//! Telemetry system for planning and execution
//!
//! Provides event collection and aggregate statistics for the decomposition
//! search and the plan-execution state machine.

use std::sync::{Arc, Mutex};
use std::time::Instant;
use uuid::Uuid;

/// Telemetry event types
#[derive(Debug, Clone)]
pub enum TelemetryEvent {
    // Planning events
    PlanningStarted {
        plan_id: Uuid,
        root_task: String,
        timestamp: Instant,
    },
    MethodChosen {
        plan_id: Uuid,
        task: String,
        method: String,
        trial: usize,
        timestamp: Instant,
    },
    PrimitiveAccepted {
        plan_id: Uuid,
        task: String,
        timestamp: Instant,
    },
    RolledBack {
        plan_id: Uuid,
        task: String,
        timestamp: Instant,
    },
    PlanningSucceeded {
        plan_id: Uuid,
        task_count: usize,
        timestamp: Instant,
    },
    PlanningFailed {
        plan_id: Uuid,
        reason: String,
        timestamp: Instant,
    },

    // Execution events
    TaskInitialized {
        task: String,
        timestamp: Instant,
    },
    TaskCompleted {
        task: String,
        success: bool,
        timestamp: Instant,
    },
    PlanInterrupted {
        task: String,
        timestamp: Instant,
    },
}

/// Telemetry statistics
#[derive(Debug, Clone, Default)]
pub struct TelemetryStats {
    pub plans_attempted: usize,
    pub plans_found: usize,
    pub plans_failed: usize,
    pub decompositions: usize,
    pub primitives_accepted: usize,
    pub rollbacks: usize,
    pub tasks_initialized: usize,
    pub tasks_succeeded: usize,
    pub tasks_failed: usize,
    pub interruptions: usize,
}

/// Telemetry collector
#[derive(Clone)]
pub struct TelemetryCollector {
    events: Arc<Mutex<Vec<TelemetryEvent>>>,
    stats: Arc<Mutex<TelemetryStats>>,
    start_time: Instant,
}

impl TelemetryCollector {
    /// Create a new telemetry collector
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            stats: Arc::new(Mutex::new(TelemetryStats::default())),
            start_time: Instant::now(),
        }
    }

    /// Record an event
    pub fn record(&self, event: TelemetryEvent) {
        // Update stats
        {
            let mut stats = self.stats.lock().unwrap();
            match &event {
                TelemetryEvent::PlanningStarted { .. } => {
                    stats.plans_attempted += 1;
                }
                TelemetryEvent::MethodChosen { .. } => {
                    stats.decompositions += 1;
                }
                TelemetryEvent::PrimitiveAccepted { .. } => {
                    stats.primitives_accepted += 1;
                }
                TelemetryEvent::RolledBack { .. } => {
                    stats.rollbacks += 1;
                }
                TelemetryEvent::PlanningSucceeded { .. } => {
                    stats.plans_found += 1;
                }
                TelemetryEvent::PlanningFailed { .. } => {
                    stats.plans_failed += 1;
                }
                TelemetryEvent::TaskInitialized { .. } => {
                    stats.tasks_initialized += 1;
                }
                TelemetryEvent::TaskCompleted { success, .. } => {
                    if *success {
                        stats.tasks_succeeded += 1;
                    } else {
                        stats.tasks_failed += 1;
                    }
                }
                TelemetryEvent::PlanInterrupted { .. } => {
                    stats.interruptions += 1;
                }
            }
        }

        // Store event
        let mut events = self.events.lock().unwrap();
        events.push(event);
    }

    /// Get current statistics
    pub fn get_stats(&self) -> TelemetryStats {
        self.stats.lock().unwrap().clone()
    }

    /// Get elapsed time since start
    pub fn elapsed(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Get event count
    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Get recent events (last n)
    pub fn recent_events(&self, n: usize) -> Vec<TelemetryEvent> {
        let events = self.events.lock().unwrap();
        let start = events.len().saturating_sub(n);
        events[start..].to_vec()
    }

    /// Calculate task success rate during execution
    pub fn task_success_rate(&self) -> f64 {
        let stats = self.stats.lock().unwrap();
        let total = stats.tasks_succeeded + stats.tasks_failed;
        if total == 0 {
            1.0
        } else {
            stats.tasks_succeeded as f64 / total as f64
        }
    }
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new()
    }
}
