//! Progress tracking for the active plan

use serde::{Deserialize, Serialize};

/// Progress through the active plan
///
/// Counts tasks completed so far against the plan's total. Diagnostic only;
/// the executor's control flow never consults it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanProgress {
    /// Tasks finished successfully so far
    pub completed: usize,

    /// Total tasks in the plan
    pub total: usize,
}

impl PlanProgress {
    pub(crate) fn new(total: usize) -> Self {
        Self { completed: 0, total }
    }

    pub(crate) fn advance(&mut self) {
        if self.completed < self.total {
            self.completed += 1;
        }
    }

    /// Tasks still to run
    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }

    /// Progress as a fraction (0.0 to 1.0)
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    /// Whether every task of a non-empty plan has completed
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
