//! Decomposition checkpoints for search rollback

use crate::task::{CompoundRef, PrimitiveRef, Task};

/// Snapshot taken the instant a method is chosen for a compound task
///
/// Holds independently mutable copies of everything the search needs to
/// resume from this choice point and try the next method alternative. Exists
/// only transiently during one planning call.
pub(crate) struct Checkpoint<A, S: Clone> {
    /// Compound task that was decomposed here (diagnostic)
    pub decomposed: CompoundRef<A, S>,

    /// World state at the instant the method was chosen
    pub world_state: S,

    /// Partial plan assembled so far
    pub plan: Vec<PrimitiveRef<A, S>>,

    /// To-process stack, with the compound task still on top
    pub to_process: Vec<Task<A, S>>,

    /// Method index that was chosen; rollback resumes at `trial + 1`
    pub trial: usize,
}
