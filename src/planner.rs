//! Top-level pipeline: validate → compile → expand → build → solve →
//! assemble → validate the result.

use crate::assembler::{assemble_task_solutions, assemble_usages, scaled_cost_to_decimal};
use crate::backend::{Backend, SolveStatus};
use crate::config::RunConfig;
use crate::coverage::compile_shift;
use crate::error::PlannerError;
use crate::expander::expand_all;
use crate::model::build_model;
use crate::models::{Incumbent, PlanResult, ShiftTemplate, TaskTemplate};
use crate::solution_validator::{validate_solution, ValidationReport};
use crate::validation::{validate_shifts, validate_tasks};
use std::time::Duration;

/// Runs the full pipeline for a given backend factory, returning the
/// solved plan. `new_backend` is called once, after input validation,
/// coverage compilation, and the capacity pre-check all succeed.
pub fn plan<B: Backend>(
    shifts: &[ShiftTemplate],
    tasks: &[TaskTemplate],
    config: &RunConfig,
    new_backend: impl FnOnce() -> B,
) -> Result<PlanResult, PlannerError> {
    validate_shifts(shifts)?;
    validate_tasks(tasks)?;

    let compiled: Vec<_> = shifts.iter().map(compile_shift).collect();
    let instances = expand_all(tasks);

    let mut built = build_model(new_backend(), &compiled, &instances, config)?;

    let mut incumbents = Vec::new();
    let deadline = Duration::from_secs_f64(config.max_solve_seconds.max(0.0));
    let status = built.backend.optimize(deadline, &mut |cost, elapsed| {
        incumbents.push(Incumbent {
            cost: scaled_cost_to_decimal(cost),
            wall_clock_seconds: elapsed.as_secs_f64(),
        });
    });

    match status {
        SolveStatus::Optimal | SolveStatus::Feasible => {}
        SolveStatus::Infeasible | SolveStatus::TimedOut => {
            return Err(PlannerError::NoSolution {
                seconds: config.max_solve_seconds,
            });
        }
    }

    let shift_usages = assemble_usages(shifts, &built);
    let task_solutions = assemble_task_solutions(tasks, &instances, &built);
    let total_cost = incumbents.last().map(|i| i.cost).unwrap_or(0.0);

    log::info!(
        "solved: status={:?}, cost={:.2}, {} shifts, {} task instances",
        status,
        total_cost,
        shift_usages.len(),
        task_solutions.len()
    );

    Ok(PlanResult {
        shift_usages,
        task_solutions,
        total_cost,
        incumbents,
    })
}

/// Convenience wrapper: runs [`plan`] and then independently validates
/// the result, returning both.
pub fn plan_and_validate<B: Backend>(
    shifts: &[ShiftTemplate],
    tasks: &[TaskTemplate],
    config: &RunConfig,
    new_backend: impl FnOnce() -> B,
) -> Result<(PlanResult, ValidationReport), PlannerError> {
    let result = plan(shifts, tasks, config, new_backend)?;
    let report = validate_solution(shifts, &result);
    Ok((result, report))
}
