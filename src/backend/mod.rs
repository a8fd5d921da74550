//! Abstract backend contract for the integer constraint model.
//!
//! [`Backend`] is deliberately small: only the primitives a MIP solver
//! gives you directly (bounded integer/boolean variables, linear
//! (in)equalities, a linear objective, and a synchronous solve call).
//! The reification helpers the model builder actually calls —
//! [`Backend::and_reify`], [`Backend::or_reify`], [`Backend::conditional_le`],
//! [`Backend::conditional_ge`] — are derived, provided methods expressed
//! as big-M linearizations over those primitives, so any backend that
//! implements the primitives gets them for free. A CP-native backend
//! could override the provided methods with true indicator constraints;
//! this crate ships only the MIP adapter in [`mip`].

pub mod mip;

use std::time::Duration;

/// Opaque handle to a decision variable inside a backend instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarId(pub usize);

/// Outcome of a bounded-time [`Backend::optimize`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Provably optimal within the deadline.
    Optimal,
    /// Feasible but not proven optimal when the deadline elapsed.
    Feasible,
    /// No feasible solution exists.
    Infeasible,
    /// The deadline elapsed before any feasible solution was found.
    TimedOut,
}

/// A linear term: `coefficient * variable`.
pub type Term = (i64, VarId);

/// Integer-linear backend contract used by the model builder.
///
/// All variable bounds and constraint coefficients are integers, matching
/// the block-count scale of the coverage model (nothing here needs
/// fractional precision).
pub trait Backend {
    /// Big-M bound used by the provided reification helpers. The model
    /// never needs a bound larger than one week's worth of blocks.
    const BIG_M: i64 = 672;

    /// Declares an integer variable with inclusive bounds `[lo, hi]`.
    fn new_int_var(&mut self, lo: i64, hi: i64) -> VarId;

    /// Declares a `{0,1}` variable.
    fn new_bool_var(&mut self) -> VarId {
        self.new_int_var(0, 1)
    }

    /// Adds `sum(coeff * var) <= rhs`.
    fn linear_le(&mut self, terms: &[Term], rhs: i64);

    /// Adds `sum(coeff * var) >= rhs`.
    fn linear_ge(&mut self, terms: &[Term], rhs: i64);

    /// Adds `sum(coeff * var) == rhs`.
    fn linear_eq(&mut self, terms: &[Term], rhs: i64);

    /// Sets the (minimized) objective. Overwrites any previous objective.
    fn minimize(&mut self, terms: &[Term]);

    /// Solves under a wall-clock `deadline`, invoking `on_improvement`
    /// each time a new incumbent is found with its `(objective, elapsed)`.
    /// A backend whose solve call is fully synchronous may call it once,
    /// with the final incumbent, or not at all if none was found.
    fn optimize(
        &mut self,
        deadline: Duration,
        on_improvement: &mut dyn FnMut(f64, Duration),
    ) -> SolveStatus;

    /// Reads the solved value of `var`. Only meaningful after `optimize`
    /// returned [`SolveStatus::Optimal`] or [`SolveStatus::Feasible`].
    fn value_of(&self, var: VarId) -> i64;

    /// Reifies `lhs <=> (term[0] AND term[1] AND ...)` for 0/1 variables,
    /// via the standard linearization: `lhs <= term_i` for every i, and
    /// `lhs >= sum(terms) - (n - 1)`.
    fn and_reify(&mut self, lhs: VarId, terms: &[VarId]) {
        for &t in terms {
            self.linear_le(&[(1, lhs), (-1, t)], 0);
        }
        let n = terms.len() as i64;
        let mut sum_terms: Vec<Term> = terms.iter().map(|&t| (1, t)).collect();
        sum_terms.push((-1, lhs));
        self.linear_le(&sum_terms, n - 1);
    }

    /// Reifies `lhs <=> (term[0] OR term[1] OR ...)` for 0/1 variables:
    /// `lhs >= term_i` for every i, and `lhs <= sum(terms)`.
    fn or_reify(&mut self, lhs: VarId, terms: &[VarId]) {
        for &t in terms {
            self.linear_ge(&[(1, lhs), (-1, t)], 0);
        }
        let mut sum_terms: Vec<Term> = terms.iter().map(|&t| (1, t)).collect();
        sum_terms.push((-1, lhs));
        self.linear_le(&sum_terms, 0);
    }

    /// Enforces `sum(terms) <= rhs` only when `cond == 1`, via
    /// `sum(terms) + BIG_M * cond <= rhs + BIG_M`.
    fn conditional_le(&mut self, cond: VarId, terms: &[Term], rhs: i64) {
        let mut t = terms.to_vec();
        t.push((Self::BIG_M, cond));
        self.linear_le(&t, rhs + Self::BIG_M);
    }

    /// Enforces `sum(terms) >= rhs` only when `cond == 1`, via
    /// `sum(terms) - BIG_M * cond >= rhs - BIG_M`.
    fn conditional_ge(&mut self, cond: VarId, terms: &[Term], rhs: i64) {
        let mut t = terms.to_vec();
        t.push((-Self::BIG_M, cond));
        self.linear_ge(&t, rhs - Self::BIG_M);
    }
}
