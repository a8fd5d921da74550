//! Ward staffing domain models.
//!
//! Provides the core data types for the staffing planner: shift templates
//! and their compiled coverage, task templates and their expanded
//! per-day instances, and the solved plan they produce.

mod shift;
mod solution;
mod task;

pub use shift::{CompiledShift, ShiftTemplate};
pub use solution::{Incumbent, PlanResult, ShiftUsage, TaskSolution};
pub use task::{TaskInstance, TaskTemplate};
