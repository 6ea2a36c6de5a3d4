//! Task data model
//!
//! Tasks form a closed variant hierarchy: a task is either primitive
//! (directly executable) or compound (decomposed into one of several ordered
//! methods). The search dispatches on the variant and never needs any other
//! shape.

pub mod compound;
pub mod primitive;

// Re-export commonly used types
pub use compound::{CompoundTask, Method};
pub use primitive::{OperationResult, PrimitiveTask};

use std::fmt;
use std::sync::Arc;

/// Shared handle to a primitive task
pub type PrimitiveRef<A, S> = Arc<dyn PrimitiveTask<A, S>>;

/// Shared handle to a compound task
pub type CompoundRef<A, S> = Arc<dyn CompoundTask<A, S>>;

/// A node in the task network
///
/// Cloning is cheap: both variants hold shared handles, so the same task can
/// appear in several method subtask lists and on checkpointed copies of the
/// search stack.
pub enum Task<A, S: Clone> {
    /// Directly executable action
    Primitive(PrimitiveRef<A, S>),

    /// Goal decomposed into one of several ordered methods
    Compound(CompoundRef<A, S>),
}

impl<A, S: Clone> Task<A, S> {
    /// Wrap a primitive task implementation
    pub fn primitive(task: impl PrimitiveTask<A, S> + 'static) -> Self {
        Task::Primitive(Arc::new(task))
    }

    /// Wrap a compound task implementation
    pub fn compound(task: impl CompoundTask<A, S> + 'static) -> Self {
        Task::Compound(Arc::new(task))
    }

    /// Diagnostic name of the underlying task
    pub fn name(&self) -> &str {
        match self {
            Task::Primitive(task) => task.name(),
            Task::Compound(task) => task.name(),
        }
    }
}

impl<A, S: Clone> Clone for Task<A, S> {
    fn clone(&self) -> Self {
        match self {
            Task::Primitive(task) => Task::Primitive(Arc::clone(task)),
            Task::Compound(task) => Task::Compound(Arc::clone(task)),
        }
    }
}

impl<A, S: Clone> fmt::Debug for Task<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Task::Primitive(task) => write!(f, "Primitive({})", task.name()),
            Task::Compound(task) => write!(f, "Compound({})", task.name()),
        }
    }
}
