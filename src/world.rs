//! World state predicates and transforms
//!
//! A world state is any host-defined value type with clone semantics.
//! Conditions are pure predicates over a snapshot of it; effects are pure
//! transforms producing a new snapshot. Both receive a private copy, so the
//! caller's state is never mutated in place.

use std::sync::Arc;

/// Shared handle to a condition
pub type ConditionRef<S> = Arc<dyn Condition<S>>;

/// Shared handle to an effect
pub type EffectRef<S> = Arc<dyn Effect<S>>;

/// Pure predicate over a world state snapshot
///
/// Implementations supply [`Condition::validate`], which receives its own
/// copy of the state and must be free of observable side effects.
pub trait Condition<S: Clone> {
    /// Validate the condition against a private copy of the world state
    fn validate(&self, world_state: S) -> bool;

    /// Check whether the condition holds
    ///
    /// Clones the state before delegating, so the callee is isolated from
    /// the caller's value.
    fn is_met(&self, world_state: &S) -> bool {
        self.validate(world_state.clone())
    }
}

/// Pure world state transform
///
/// Implementations supply [`Effect::apply_effect`] against a private copy.
/// The caller must use the returned value; the input is never modified.
pub trait Effect<S: Clone> {
    /// Apply the effect to a private copy, returning the new state
    fn apply_effect(&self, world_state: S) -> S;

    /// Apply the effect; the original world state is not modified
    fn apply(&self, world_state: &S) -> S {
        self.apply_effect(world_state.clone())
    }
}

/// Condition backed by a plain closure
pub struct FnCondition<F> {
    predicate: F,
}

impl<F> FnCondition<F> {
    /// Wrap a predicate closure as a condition
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<S: Clone, F: Fn(&S) -> bool> Condition<S> for FnCondition<F> {
    fn validate(&self, world_state: S) -> bool {
        (self.predicate)(&world_state)
    }
}

/// Effect backed by a plain closure
pub struct FnEffect<F> {
    transform: F,
}

impl<F> FnEffect<F> {
    /// Wrap a transform closure as an effect
    pub fn new(transform: F) -> Self {
        Self { transform }
    }
}

impl<S: Clone, F: Fn(S) -> S> Effect<S> for FnEffect<F> {
    fn apply_effect(&self, world_state: S) -> S {
        (self.transform)(world_state)
    }
}
