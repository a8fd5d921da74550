//! Integer constraint model builder (C4): turns compiled shifts and task
//! instances into backend variables, reified per-block occupancy
//! booleans, handover logic, per-block coverage constraints, and the
//! cost objective.

use crate::backend::{Backend, Term, VarId};
use crate::config::RunConfig;
use crate::error::PlannerError;
use crate::models::{CompiledShift, TaskInstance};
use crate::time_grid::BLOCKS_PER_WEEK;

/// A fully built model: the backend holding every declared variable and
/// constraint, plus the handles needed to read a solution back out.
pub struct BuiltModel<B: Backend> {
    pub backend: B,
    /// `usage_vars[t]` is the assignee-count variable for shift `t`.
    pub usage_vars: Vec<VarId>,
    /// `start_vars[i]` is the start-block variable for task instance `i`.
    pub start_vars: Vec<VarId>,
}

/// Builds the model, performing the capacity pre-check before declaring
/// a single backend variable.
pub fn build_model<B: Backend>(
    mut backend: B,
    shifts: &[CompiledShift],
    instances: &[TaskInstance],
    config: &RunConfig,
) -> Result<BuiltModel<B>, PlannerError> {
    check_capacity_feasible(shifts, instances)?;

    let usage_vars: Vec<VarId> = shifts
        .iter()
        .map(|s| backend.new_int_var(0, s.max_assignees as i64))
        .collect();

    let start_vars: Vec<VarId> = instances
        .iter()
        .map(|inst| backend.new_int_var(inst.earliest_block as i64, inst.latest_block as i64))
        .collect();

    // Per-block occupancy booleans A[i, b] over each instance's extended
    // active range, reified against the instance's start variable.
    // Large enough to dominate any (S[i] - b) gap across a doubled week.
    let big_m: i64 = 2 * BLOCKS_PER_WEEK as i64;
    let mut active: Vec<Vec<(u32, VarId)>> = vec![Vec::new(); instances.len()];
    for (i, inst) in instances.iter().enumerate() {
        let s_var = start_vars[i];
        for b in inst.extended_active_range() {
            let a1 = backend.new_bool_var();
            let a2 = backend.new_bool_var();
            let a = backend.new_bool_var();

            // a1 <=> (S[i] <= b)
            reify_ge(&mut backend, a1, &[(-1, s_var)], -(b as i64), big_m);
            // a2 <=> (b < S[i] + duration) <=> (S[i] - b >= 1 - duration)
            let bound = b as i64 + 1 - inst.duration_blocks as i64;
            reify_ge(&mut backend, a2, &[(1, s_var)], bound, big_m);

            backend.and_reify(a, &[a1, a2]);
            active[i].push((b % BLOCKS_PER_WEEK, a));
        }
    }

    // startsAt[b] is a linear combination of usage vars; no new variable
    // needed except where it participates in the handover coupling.
    let mut starts_at_terms: Vec<Vec<Term>> = vec![Vec::new(); BLOCKS_PER_WEEK as usize];
    let mut starts_at_bound: Vec<i64> = vec![0; BLOCKS_PER_WEEK as usize];
    for (t, shift) in shifts.iter().enumerate() {
        for &b in &shift.start_blocks {
            starts_at_terms[b as usize].push((1, usage_vars[t]));
            starts_at_bound[b as usize] += shift.max_assignees as i64;
        }
    }

    let handover_vars: Vec<VarId> = (0..BLOCKS_PER_WEEK)
        .map(|_| backend.new_bool_var())
        .collect();
    for b in 0..BLOCKS_PER_WEEK as usize {
        if starts_at_terms[b].is_empty() {
            backend.linear_eq(&[(1, handover_vars[b])], 0);
            continue;
        }
        let m_b = starts_at_bound[b];
        let mut le_terms = starts_at_terms[b].clone();
        le_terms.push((-m_b, handover_vars[b]));
        backend.linear_le(&le_terms, 0);

        let mut ge_terms = starts_at_terms[b].clone();
        ge_terms.push((-1, handover_vars[b]));
        backend.linear_ge(&ge_terms, 0);
    }

    // Per-block coverage: supply - startsAt - H >= demand, and >= floor.
    let mut demand_by_block: Vec<Vec<Term>> = vec![Vec::new(); BLOCKS_PER_WEEK as usize];
    for (i, inst) in instances.iter().enumerate() {
        for &(b, a_var) in &active[i] {
            demand_by_block[b as usize].push((inst.required_workers as i64, a_var));
        }
    }

    for b in 0..BLOCKS_PER_WEEK as usize {
        let mut supply_terms: Vec<Term> = shifts
            .iter()
            .enumerate()
            .filter(|(_, s)| s.covers(b as u32))
            .map(|(t, _)| (1, usage_vars[t]))
            .collect();
        supply_terms.extend(starts_at_terms[b].iter().map(|&(c, v)| (-c, v)));
        supply_terms.push((-1, handover_vars[b]));

        let mut coverage_ge_demand = supply_terms.clone();
        for &(c, v) in &demand_by_block[b] {
            coverage_ge_demand.push((-c, v));
        }
        backend.linear_ge(&coverage_ge_demand, 0);

        backend.linear_ge(&supply_terms, config.min_always_present as i64);
    }

    // Objective: usage[t] * length_blocks[t] * weight_scaled[t].
    let objective: Vec<Term> = shifts
        .iter()
        .enumerate()
        .map(|(t, s)| {
            (
                (s.length_blocks as i64) * s.weight_scaled,
                usage_vars[t],
            )
        })
        .collect();
    backend.minimize(&objective);

    log::debug!(
        "built model: {} shifts, {} task instances, {} blocks",
        shifts.len(),
        instances.len(),
        BLOCKS_PER_WEEK
    );

    Ok(BuiltModel {
        backend,
        usage_vars,
        start_vars,
    })
}

/// Reifies `r <=> (sum(terms) >= bound)` over integer-valued terms, given
/// a `big_m` that dominates the largest possible gap between
/// `sum(terms)` and `bound`. Standard two-sided big-M linearization:
/// `r=1` forces the inequality to hold; `r=0` forces its strict opposite.
fn reify_ge<B: Backend>(backend: &mut B, r: VarId, terms: &[Term], bound: i64, big_m: i64) {
    let mut ge_terms = terms.to_vec();
    ge_terms.push((-big_m, r));
    backend.linear_ge(&ge_terms, bound - big_m);

    let mut le_terms = terms.to_vec();
    le_terms.push((-big_m, r));
    backend.linear_le(&le_terms, bound - 1);
}

/// Fails fast if, for any block, the summed `max_assignees` of templates
/// covering it falls short of the summed `required_workers` of every
/// instance that would still be occupying that block if placed at its
/// earliest feasible start — a single placement's footprint
/// (`duration_blocks` wide), not the full span an instance's start could
/// range over.
fn check_capacity_feasible(
    shifts: &[CompiledShift],
    instances: &[TaskInstance],
) -> Result<(), PlannerError> {
    let mut capacity = vec![0u32; BLOCKS_PER_WEEK as usize];
    for s in shifts {
        for b in 0..BLOCKS_PER_WEEK {
            if s.covers(b) {
                capacity[b as usize] += s.max_assignees;
            }
        }
    }

    let mut demand = vec![0u32; BLOCKS_PER_WEEK as usize];
    for inst in instances {
        for b in inst.earliest_block..(inst.earliest_block + inst.duration_blocks) {
            demand[(b % BLOCKS_PER_WEEK) as usize] += inst.required_workers;
        }
    }

    for b in 0..BLOCKS_PER_WEEK as usize {
        if capacity[b] < demand[b] {
            return Err(PlannerError::CapacityInfeasible {
                block: b as u32,
                capacity: capacity[b],
                demand: demand[b],
            });
        }
    }
    Ok(())
}
