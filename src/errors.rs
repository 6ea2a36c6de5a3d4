//! Error types for the HTN planner
//!
//! Planning failure ("no plan found") and execution failure (a task ticks
//! `Failure`) are normal outcomes, surfaced as return values rather than
//! errors. `HtnError` covers the genuine fault surfaces: plan replay against
//! a state the plan was not built for, and report serialization.

use thiserror::Error;

/// Main error type for the HTN planning system
#[derive(Error, Debug)]
pub enum HtnError {
    /// A replayed plan hit a condition that does not hold
    #[error("Condition {condition_index} of task '{task}' is unsatisfied during replay")]
    ConditionUnsatisfied {
        task: String,
        condition_index: usize,
    },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("Planner error: {0}")]
    Generic(String),
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, HtnError>;

/// Convert anyhow errors to HtnError
impl From<anyhow::Error> for HtnError {
    fn from(err: anyhow::Error) -> Self {
        HtnError::Generic(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_unsatisfied_display() {
        let err = HtnError::ConditionUnsatisfied {
            task: "chop_tree".to_string(),
            condition_index: 2,
        };
        assert!(err.to_string().contains("chop_tree"));
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: HtnError = anyhow::anyhow!("method table is empty").into();
        assert!(err.to_string().contains("method table is empty"));
    }
}
