//! Planner-wide error type.
//!
//! Every fallible operation in the pipeline (input validation, coverage
//! compilation, model building, solving) returns `Result<_, PlannerError>`.
//! `BreakOutsideShift` is deliberately not a variant here: per the design
//! notes it is downgraded to a `log::warn!` rather than surfaced as an `Err`.

use thiserror::Error;

/// Errors produced anywhere in the staffing pipeline.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// A time-of-day field did not parse as `HH:MM` on a 15-minute boundary.
    #[error("malformed time field on {entity} \"{name}\": {detail}")]
    MalformedTime {
        entity: &'static str,
        name: String,
        detail: String,
    },

    /// A task duration was not a multiple of the block size.
    #[error("task \"{name}\" has duration {minutes} minutes, not a multiple of {block_minutes}")]
    NonAlignedDuration {
        name: String,
        minutes: u32,
        block_minutes: u32,
    },

    /// A shift or task template was marked active on zero weekdays.
    #[error("{entity} \"{name}\" has no active days")]
    EmptyActiveDays { entity: &'static str, name: String },

    /// The maximum assignees available across all templates covering some
    /// block fall short of demand at that block, detected before a single
    /// backend variable is declared.
    #[error("block {block} cannot be staffed: capacity {capacity} < demand {demand}")]
    CapacityInfeasible {
        block: u32,
        capacity: u32,
        demand: u32,
    },

    /// The backend returned neither an optimal nor a feasible solution
    /// before the deadline.
    #[error("no feasible solution found within {seconds:.1}s")]
    NoSolution { seconds: f64 },

    /// The backend violated its own contract (e.g. a variable read outside
    /// its declared bounds). Not expected to be recoverable by the caller.
    #[error("backend returned an inconsistent result: {0}")]
    BackendFault(String),
}
