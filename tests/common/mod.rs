//! Shared woodcutter domain for integration tests
//!
//! A small but complete host domain: a `Forest` world state, a `Woodsman`
//! agent that logs what it is told to do, scriptable primitive actions with
//! hook counters, and compound goals with prioritized methods.

#![allow(dead_code)]

use htn_planner::world::{ConditionRef, EffectRef};
use htn_planner::{CompoundTask, FnCondition, FnEffect, Method, OperationResult, PrimitiveTask, Task};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// World state: what the planner knows about the forest
#[derive(Clone, Debug, PartialEq)]
pub struct Forest {
    pub axe_in_shed: bool,
    pub has_axe: bool,
    pub wood: u32,
}

impl Forest {
    pub fn morning() -> Self {
        Self {
            axe_in_shed: true,
            has_axe: false,
            wood: 0,
        }
    }

    pub fn without_axe() -> Self {
        Self {
            axe_in_shed: false,
            has_axe: false,
            wood: 0,
        }
    }
}

/// The controlled agent; records every hook call it receives
#[derive(Default)]
pub struct Woodsman {
    pub log: Vec<String>,
}

/// Scriptable primitive action with hook counters
pub struct Action {
    name: String,
    conditions: Vec<ConditionRef<Forest>>,
    effects: Vec<EffectRef<Forest>>,
    script: Mutex<VecDeque<OperationResult>>,
    initialized: AtomicUsize,
    interrupted: AtomicUsize,
}

impl Action {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            conditions: Vec::new(),
            effects: Vec::new(),
            script: Mutex::new(VecDeque::new()),
            initialized: AtomicUsize::new(0),
            interrupted: AtomicUsize::new(0),
        }
    }

    /// Add a planning precondition
    pub fn when(mut self, predicate: impl Fn(&Forest) -> bool + 'static) -> Self {
        self.conditions.push(Arc::new(FnCondition::new(predicate)));
        self
    }

    /// Add a planning effect
    pub fn then(mut self, transform: impl Fn(Forest) -> Forest + 'static) -> Self {
        self.effects.push(Arc::new(FnEffect::new(transform)));
        self
    }

    /// Script the tick outcomes; once the script drains, ticks succeed
    pub fn script(self, results: Vec<OperationResult>) -> Self {
        *self.script.lock().unwrap() = results.into();
        self
    }

    pub fn build(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn initialized_count(&self) -> usize {
        self.initialized.load(Ordering::SeqCst)
    }

    pub fn interrupted_count(&self) -> usize {
        self.interrupted.load(Ordering::SeqCst)
    }
}

impl PrimitiveTask<Woodsman, Forest> for Action {
    fn name(&self) -> &str {
        &self.name
    }

    fn conditions(&self) -> &[ConditionRef<Forest>] {
        &self.conditions
    }

    fn effects(&self) -> &[EffectRef<Forest>] {
        &self.effects
    }

    fn initialize(&self, agent: &mut Woodsman) {
        self.initialized.fetch_add(1, Ordering::SeqCst);
        agent.log.push(format!("init:{}", self.name));
    }

    fn operate(&self, agent: &mut Woodsman) -> OperationResult {
        agent.log.push(format!("tick:{}", self.name));
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(OperationResult::Success)
    }

    fn on_interrupted(&self) {
        self.interrupted.fetch_add(1, Ordering::SeqCst);
    }
}

/// Compound goal with an ordered method table
pub struct Goal {
    name: String,
    methods: Vec<Method<Woodsman, Forest>>,
}

impl Goal {
    pub fn new(name: &str, methods: Vec<Method<Woodsman, Forest>>) -> Self {
        Self {
            name: name.to_string(),
            methods,
        }
    }

    pub fn task(name: &str, methods: Vec<Method<Woodsman, Forest>>) -> Task<Woodsman, Forest> {
        Task::compound(Self::new(name, methods))
    }
}

impl CompoundTask<Woodsman, Forest> for Goal {
    fn name(&self) -> &str {
        &self.name
    }

    fn methods(&self) -> &[Method<Woodsman, Forest>] {
        &self.methods
    }
}

/// Take the axe from the shed
pub fn grab_axe() -> Arc<Action> {
    Action::new("grab_axe")
        .when(|forest| forest.axe_in_shed && !forest.has_axe)
        .then(|mut forest| {
            forest.axe_in_shed = false;
            forest.has_axe = true;
            forest
        })
        .build()
}

/// Chop a tree with the axe; yields three wood
pub fn chop_tree() -> Arc<Action> {
    Action::new("chop_tree")
        .when(|forest| forest.has_axe)
        .then(|mut forest| {
            forest.wood += 3;
            forest
        })
        .build()
}

/// Bare-handed fallback; yields one wood
pub fn punch_tree() -> Arc<Action> {
    Action::new("punch_tree")
        .then(|mut forest| {
            forest.wood += 1;
            forest
        })
        .build()
}

/// "Get wood" goal: prefer the axe, fall back to bare hands
pub fn get_wood(
    grab: &Arc<Action>,
    chop: &Arc<Action>,
    punch: &Arc<Action>,
) -> Task<Woodsman, Forest> {
    Goal::task(
        "get_wood",
        vec![
            Method::new("with_axe")
                .with_condition(FnCondition::new(|forest: &Forest| forest.axe_in_shed))
                .with_subtask(Task::Primitive(grab.clone()))
                .with_subtask(Task::Primitive(chop.clone())),
            Method::new("bare_hands").with_subtask(Task::Primitive(punch.clone())),
        ],
    )
}
