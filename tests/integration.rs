//! End-to-end scenarios against the full pipeline.

use ward_staffing_planner::backend::mip::MipBackend;
use ward_staffing_planner::models::{ShiftTemplate, TaskTemplate};
use ward_staffing_planner::solution_validator::{validate_solution, ValidationFailure};
use ward_staffing_planner::time_grid::TimeOfDay;
use ward_staffing_planner::{plan, plan_and_validate, PlannerError, RunConfig};

fn day_shift(max_assignees: u32) -> ShiftTemplate {
    ShiftTemplate::new(
        "day",
        TimeOfDay::new(7, 0),
        TimeOfDay::new(15, 0),
        max_assignees,
        1.0,
    )
    .with_active_days([0, 1, 2, 3, 4, 5, 6])
}

fn night_shift(max_assignees: u32) -> ShiftTemplate {
    ShiftTemplate::new(
        "night",
        TimeOfDay::new(23, 0),
        TimeOfDay::new(7, 0),
        max_assignees,
        1.2,
    )
    .with_active_days([0, 1, 2, 3, 4, 5, 6])
}

fn vitals_task(required: u32) -> TaskTemplate {
    TaskTemplate::new(
        "vitals",
        TimeOfDay::new(7, 0),
        TimeOfDay::new(9, 0),
        30,
        required,
    )
    .with_active_days([0, 1, 2, 3, 4, 5, 6])
}

/// E1: a single day shift and a single task inside its window.
#[test]
fn e1_single_shift_single_task() {
    let shifts = vec![day_shift(4)];
    let tasks = vec![vitals_task(2)];

    let (result, report) =
        plan_and_validate(&shifts, &tasks, &RunConfig::new(), MipBackend::new).unwrap();

    assert!(result.usage_for("day").unwrap() >= 2);
    assert!(report
        .failures
        .iter()
        .all(|f| !matches!(f, ValidationFailure::Cap { .. } | ValidationFailure::Window { .. })));
}

/// E2: a shift crossing midnight is correctly compiled and staffed.
#[test]
fn e2_midnight_crossing_shift() {
    let shifts = vec![night_shift(3)];
    let task = TaskTemplate::new(
        "overnight-check",
        TimeOfDay::new(23, 30),
        TimeOfDay::new(0, 30),
        15,
        1,
    )
    .with_active_days([0]);
    let tasks = vec![task];

    let (result, _) =
        plan_and_validate(&shifts, &tasks, &RunConfig::new(), MipBackend::new).unwrap();
    assert!(result.usage_for("night").unwrap() >= 1);
}

/// E3: a task window wrapping Sunday -> Monday still produces a feasible
/// solution whose chosen start respects the wrapped window.
#[test]
fn e3_sunday_to_monday_task_wrap() {
    let shifts = vec![night_shift(2)];
    let task = TaskTemplate::new(
        "late-round",
        TimeOfDay::new(23, 0),
        TimeOfDay::new(1, 0),
        15,
        1,
    )
    .with_active_days([6]); // Sunday, window wraps into Monday
    let tasks = vec![task];

    let (result, report) =
        plan_and_validate(&shifts, &tasks, &RunConfig::new(), MipBackend::new).unwrap();
    assert_eq!(result.task_solutions.len(), 1);
    assert!(report
        .failures
        .iter()
        .all(|f| !matches!(f, ValidationFailure::Window { .. })));
}

/// E4: no tasks at all, only a ward-wide presence floor.
#[test]
fn e4_global_floor_without_tasks() {
    let shifts = vec![day_shift(2), night_shift(2)];
    let tasks: Vec<TaskTemplate> = vec![];
    let config = RunConfig::new().with_min_always_present(1);

    let result = plan(&shifts, &tasks, &config, MipBackend::new).unwrap();
    let total_usage: u32 = result.shift_usages.iter().map(|u| u.usage).sum();
    assert!(total_usage >= 1);
}

/// E5: demand exceeds every template's combined capacity: must fail with
/// CapacityInfeasible before any solver call.
#[test]
fn e5_infeasible_capacity() {
    let shifts = vec![day_shift(1)];
    let tasks = vec![vitals_task(10)];

    let err = plan(&shifts, &tasks, &RunConfig::new(), MipBackend::new).unwrap_err();
    assert!(matches!(err, PlannerError::CapacityInfeasible { .. }));
}

/// E6: two shift templates both able to satisfy demand; the cheaper one
/// should be preferred by the objective.
#[test]
fn e6_prefers_cheaper_equivalent_shift() {
    let cheap = ShiftTemplate::new(
        "day-cheap",
        TimeOfDay::new(7, 0),
        TimeOfDay::new(15, 0),
        5,
        1.0,
    )
    .with_active_days([0]);
    let expensive = ShiftTemplate::new(
        "day-expensive",
        TimeOfDay::new(7, 0),
        TimeOfDay::new(15, 0),
        5,
        5.0,
    )
    .with_active_days([0]);
    let shifts = vec![cheap, expensive];
    let tasks = vec![TaskTemplate::new(
        "vitals",
        TimeOfDay::new(7, 0),
        TimeOfDay::new(9, 0),
        30,
        2,
    )
    .with_active_days([0])];

    let result = plan(&shifts, &tasks, &RunConfig::new(), MipBackend::new).unwrap();
    assert!(result.usage_for("day-cheap").unwrap() >= 2);
    assert_eq!(result.usage_for("day-expensive").unwrap(), 0);
}

/// Invariant: shift usage never exceeds its declared cap.
#[test]
fn invariant_cap_respected() {
    let shifts = vec![day_shift(3)];
    let tasks = vec![vitals_task(2)];
    let result = plan(&shifts, &tasks, &RunConfig::new(), MipBackend::new).unwrap();
    for usage in &result.shift_usages {
        assert!(usage.usage <= 3);
    }
}

/// Invariant: determinism across repeated runs with identical inputs.
#[test]
fn invariant_deterministic_objective() {
    let shifts = vec![day_shift(4)];
    let tasks = vec![vitals_task(2)];

    let r1 = plan(&shifts, &tasks, &RunConfig::new(), MipBackend::new).unwrap();
    let r2 = plan(&shifts, &tasks, &RunConfig::new(), MipBackend::new).unwrap();
    assert!((r1.total_cost - r2.total_cost).abs() < 1e-6);
}

/// Independent validation surfaces no coverage gaps for a solved,
/// fully-staffed week (day + night shifts covering all 672 blocks).
#[test]
fn invariant_full_week_coverage_has_no_gaps() {
    let shifts = vec![day_shift(2), night_shift(2)];
    let tasks: Vec<TaskTemplate> = vec![];
    let config = RunConfig::new().with_min_always_present(1);

    let (result, report) = plan_and_validate(&shifts, &tasks, &config, MipBackend::new).unwrap();
    let never_staffed = report
        .failures
        .iter()
        .filter(|f| matches!(f, ValidationFailure::NeverStaffed { .. }))
        .count();
    assert_eq!(never_staffed, 0, "plan: {result:?}");
}

/// The validator is independently callable against a hand-assembled plan.
#[test]
fn validator_runs_standalone() {
    let shifts = vec![day_shift(2)];
    let tasks = vec![vitals_task(1)];
    let result = plan(&shifts, &tasks, &RunConfig::new(), MipBackend::new).unwrap();
    let report = validate_solution(&shifts, &result);
    assert!(report
        .failures
        .iter()
        .all(|f| !matches!(f, ValidationFailure::Cap { .. })));
}
