//! Structural input validation for shift and task templates.
//!
//! Runs before coverage compilation. Checks duplicate names, misaligned
//! times and durations, and empty active-day sets — everything that can
//! be caught without reasoning about coverage or capacity.

use crate::error::PlannerError;
use crate::models::{ShiftTemplate, TaskTemplate};
use crate::time_grid::BLOCK_MINUTES;
use std::collections::HashSet;

fn check_time(entity: &'static str, name: &str, field: &str, minutes: u32) -> Result<(), PlannerError> {
    if minutes % BLOCK_MINUTES != 0 {
        return Err(PlannerError::MalformedTime {
            entity,
            name: name.to_string(),
            detail: format!("{field} is not aligned to a {BLOCK_MINUTES}-minute block"),
        });
    }
    Ok(())
}

/// Validates every shift template: block-aligned times, non-empty
/// active days. Duplicate names across the whole set are reported once.
pub fn validate_shifts(shifts: &[ShiftTemplate]) -> Result<(), PlannerError> {
    let mut seen = HashSet::new();
    for s in shifts {
        if !seen.insert(s.name.as_str()) {
            return Err(PlannerError::MalformedTime {
                entity: "shift",
                name: s.name.clone(),
                detail: "duplicate shift name".to_string(),
            });
        }
        check_time("shift", &s.name, "start", s.start.minutes())?;
        check_time("shift", &s.name, "end", s.end.minutes())?;
        check_time("shift", &s.name, "break_start", s.break_start.minutes())?;
        if s.break_duration_minutes % BLOCK_MINUTES != 0 {
            return Err(PlannerError::MalformedTime {
                entity: "shift",
                name: s.name.clone(),
                detail: "break duration is not aligned to a block".to_string(),
            });
        }
        if s.active_days.is_empty() {
            return Err(PlannerError::EmptyActiveDays {
                entity: "shift",
                name: s.name.clone(),
            });
        }
    }
    Ok(())
}

/// Validates every task template: block-aligned window and duration,
/// non-empty active days.
pub fn validate_tasks(tasks: &[TaskTemplate]) -> Result<(), PlannerError> {
    let mut seen = HashSet::new();
    for t in tasks {
        if !seen.insert(t.name.as_str()) {
            return Err(PlannerError::MalformedTime {
                entity: "task",
                name: t.name.clone(),
                detail: "duplicate task name".to_string(),
            });
        }
        check_time("task", &t.name, "window_start", t.window_start.minutes())?;
        check_time("task", &t.name, "window_end", t.window_end.minutes())?;
        if t.duration_minutes == 0 || t.duration_minutes % BLOCK_MINUTES != 0 {
            return Err(PlannerError::NonAlignedDuration {
                name: t.name.clone(),
                minutes: t.duration_minutes,
                block_minutes: BLOCK_MINUTES,
            });
        }
        if t.active_days.is_empty() {
            return Err(PlannerError::EmptyActiveDays {
                entity: "task",
                name: t.name.clone(),
            });
        }
    }
    Ok(())
}
