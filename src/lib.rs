//! Minimum-cost weekly staffing planner for a nursing ward.
//!
//! Given recurring shift templates and recurring task demand, computes
//! how many workers to assign to each shift and when each day's task
//! instances should start, so that every 15-minute block of the week has
//! enough workers present (net of handover overhead) to cover both task
//! demand and a configurable ward-wide floor, at minimum cost.
//!
//! # Pipeline
//!
//! - [`validation`]: structural checks on raw templates (block-aligned
//!   times, non-empty active days, aligned durations)
//! - [`time_grid`]: the weekly 15-minute block grid and its wrap-aware
//!   bitmap arithmetic
//! - [`coverage`]: compiles shift templates into per-block coverage
//! - [`expander`]: expands task templates into per-day instances
//! - [`model`]: builds the integer constraint model
//! - [`backend`]: the abstract solver contract and a `good_lp`/SCIP
//!   reference implementation
//! - [`assembler`]: reads a solved model back into output tables
//! - [`solution_validator`]: independently re-checks a solved plan
//! - [`planner`]: wires the whole pipeline together
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod assembler;
pub mod backend;
pub mod config;
pub mod coverage;
pub mod error;
pub mod expander;
pub mod model;
pub mod models;
pub mod planner;
pub mod solution_validator;
pub mod time_grid;
pub mod validation;

pub use config::RunConfig;
pub use error::PlannerError;
pub use planner::{plan, plan_and_validate};
