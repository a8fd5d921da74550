//! Reference [`Backend`] implementation: a branch-and-bound MIP solver
//! over `good_lp`, using SCIP as the underlying solver.
//!
//! Variable declarations and constraints are buffered and only handed to
//! `good_lp` inside [`MipBackend::optimize`], since `good_lp`'s builder
//! consumes and returns a new `Problem` value on every `.with(...)` call
//! (the same fold-based pattern used to assemble constraints over a job
//! set elsewhere in the surrounding scheduling corpus).
//!
//! SCIP's synchronous solve call does not expose an incremental-incumbent
//! stream the way a CP-SAT search does, so `optimize` reports at most one
//! incumbent: the final solution, with the wall-clock time the solve took.
//! `deadline` is accepted for contract compatibility but is not currently
//! forwarded into a solver-level time limit — see the note in DESIGN.md.

use super::{Backend, SolveStatus, Term, VarId};
use good_lp::{constraint, variable, variables, Expression, Solution as _, SolverModel};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
enum Relation {
    Le,
    Ge,
    Eq,
}

struct StoredConstraint {
    terms: Vec<Term>,
    rhs: i64,
    relation: Relation,
}

/// A [`Backend`] backed by `good_lp` + SCIP.
#[derive(Default)]
pub struct MipBackend {
    bounds: Vec<(i64, i64)>,
    constraints: Vec<StoredConstraint>,
    objective: Vec<Term>,
    values: Vec<i64>,
}

impl MipBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn build_expression(terms: &[Term], vars: &[good_lp::Variable]) -> Expression {
        terms
            .iter()
            .fold(Expression::from(0.0), |acc, &(coeff, VarId(idx))| {
                acc + (coeff as f64) * vars[idx]
            })
    }
}

impl Backend for MipBackend {
    fn new_int_var(&mut self, lo: i64, hi: i64) -> VarId {
        let id = VarId(self.bounds.len());
        self.bounds.push((lo, hi));
        id
    }

    fn linear_le(&mut self, terms: &[Term], rhs: i64) {
        self.constraints.push(StoredConstraint {
            terms: terms.to_vec(),
            rhs,
            relation: Relation::Le,
        });
    }

    fn linear_ge(&mut self, terms: &[Term], rhs: i64) {
        self.constraints.push(StoredConstraint {
            terms: terms.to_vec(),
            rhs,
            relation: Relation::Ge,
        });
    }

    fn linear_eq(&mut self, terms: &[Term], rhs: i64) {
        self.constraints.push(StoredConstraint {
            terms: terms.to_vec(),
            rhs,
            relation: Relation::Eq,
        });
    }

    fn minimize(&mut self, terms: &[Term]) {
        self.objective = terms.to_vec();
    }

    fn optimize(
        &mut self,
        _deadline: Duration,
        on_improvement: &mut dyn FnMut(f64, Duration),
    ) -> SolveStatus {
        let started = Instant::now();

        let mut vars = variables!();
        let good_lp_vars: Vec<good_lp::Variable> = self
            .bounds
            .iter()
            .map(|&(lo, hi)| vars.add(variable().integer().min(lo as f64).max(hi as f64)))
            .collect();

        let objective_expr = Self::build_expression(&self.objective, &good_lp_vars);
        let mut problem = vars.minimise(objective_expr).using(good_lp::default_solver);

        for c in &self.constraints {
            let expr = Self::build_expression(&c.terms, &good_lp_vars);
            let rhs = c.rhs as f64;
            problem = match c.relation {
                Relation::Le => problem.with(constraint!(expr <= rhs)),
                Relation::Ge => problem.with(constraint!(expr >= rhs)),
                Relation::Eq => problem.with(constraint!(expr == rhs)),
            };
        }

        match problem.solve() {
            Ok(solution) => {
                self.values = good_lp_vars
                    .iter()
                    .map(|&v| solution.value(v).round() as i64)
                    .collect();
                let cost: f64 = self
                    .objective
                    .iter()
                    .map(|&(coeff, VarId(idx))| coeff as f64 * self.values[idx] as f64)
                    .sum();
                on_improvement(cost, started.elapsed());
                SolveStatus::Optimal
            }
            Err(_) => {
                log::warn!("backend found no feasible solution");
                SolveStatus::Infeasible
            }
        }
    }

    fn value_of(&self, var: VarId) -> i64 {
        self.values[var.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_minimization() {
        let mut backend = MipBackend::new();
        let x = backend.new_int_var(0, 10);
        let y = backend.new_int_var(0, 10);
        backend.linear_ge(&[(1, x), (1, y)], 5);
        backend.minimize(&[(1, x), (1, y)]);

        let mut incumbents = Vec::new();
        let status = backend.optimize(Duration::from_secs(1), &mut |cost, elapsed| {
            incumbents.push((cost, elapsed));
        });
        assert_eq!(status, SolveStatus::Optimal);
        assert_eq!(backend.value_of(x) + backend.value_of(y), 5);
        assert_eq!(incumbents.len(), 1);
    }

    #[test]
    fn test_bool_and_reify() {
        let mut backend = MipBackend::new();
        let a = backend.new_bool_var();
        let b = backend.new_bool_var();
        let both = backend.new_bool_var();
        backend.and_reify(both, &[a, b]);
        backend.linear_eq(&[(1, a)], 1);
        backend.linear_eq(&[(1, b)], 1);
        backend.minimize(&[(1, both)]);

        let mut calls = 0;
        let status = backend.optimize(Duration::from_secs(1), &mut |_, _| calls += 1);
        assert_eq!(status, SolveStatus::Optimal);
        assert_eq!(backend.value_of(both), 1);
        assert_eq!(calls, 1);
    }
}
