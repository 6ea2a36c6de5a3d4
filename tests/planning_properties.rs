//! Property-based tests for the decomposition search
//!
//! Planning is a pure function of the root task and the initial world state:
//! repeated calls must agree, and any plan the search accepts must replay
//! cleanly from the state it was searched from.

mod common;

use common::{chop_tree, get_wood, grab_axe, punch_tree, Forest};
use htn_planner::HtnPlanner;
use quickcheck_macros::quickcheck;

fn forest(axe_in_shed: bool, has_axe: bool, wood: u32) -> Forest {
    Forest {
        axe_in_shed,
        has_axe,
        wood,
    }
}

#[quickcheck]
fn prop_identical_inputs_give_identical_plans(
    axe_in_shed: bool,
    has_axe: bool,
    wood: u32,
) -> bool {
    let planner = HtnPlanner::new();
    let root = get_wood(&grab_axe(), &chop_tree(), &punch_tree());
    let initial = forest(axe_in_shed, has_axe, wood.min(u32::MAX - 8));

    let first = planner.plan(&root, initial.clone()).map(|p| p.task_names());
    let second = planner.plan(&root, initial).map(|p| p.task_names());
    first == second
}

#[quickcheck]
fn prop_found_plans_replay_cleanly(axe_in_shed: bool, has_axe: bool, wood: u32) -> bool {
    let planner = HtnPlanner::new();
    let root = get_wood(&grab_axe(), &chop_tree(), &punch_tree());
    let initial = forest(axe_in_shed, has_axe, wood.min(u32::MAX - 8));

    match planner.plan(&root, initial.clone()) {
        Some(plan) => plan.replay(&initial).is_ok(),
        None => true,
    }
}

#[quickcheck]
fn prop_wood_never_decreases(axe_in_shed: bool, has_axe: bool, wood: u32) -> bool {
    let planner = HtnPlanner::new();
    let root = get_wood(&grab_axe(), &chop_tree(), &punch_tree());
    let initial = forest(axe_in_shed, has_axe, wood.min(u32::MAX - 8));

    match planner.plan(&root, initial.clone()) {
        Some(plan) => match plan.replay(&initial) {
            Ok(after) => after.wood >= initial.wood,
            Err(_) => false,
        },
        None => false, // "get wood" always has the bare-hands fallback
    }
}
