//! Shift template and its compiled per-block coverage.

use crate::time_grid::{TimeOfDay, BLOCKS_PER_WEEK};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A recurring shift pattern: start/end/break times, the weekdays it runs
/// on, how many assignees it can carry, and its per-assignee cost weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftTemplate {
    pub name: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub break_start: TimeOfDay,
    pub break_duration_minutes: u32,
    /// 0 = Monday .. 6 = Sunday.
    pub active_days: BTreeSet<u8>,
    pub max_assignees: u32,
    /// Cost per active block per assignee. Stored as a float on the
    /// template; compilation scales it into an exact integer.
    pub weight: f64,
}

impl ShiftTemplate {
    pub fn new(
        name: impl Into<String>,
        start: TimeOfDay,
        end: TimeOfDay,
        max_assignees: u32,
        weight: f64,
    ) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            break_start: start,
            break_duration_minutes: 0,
            active_days: BTreeSet::new(),
            max_assignees,
            weight,
        }
    }

    pub fn with_break(mut self, break_start: TimeOfDay, break_duration_minutes: u32) -> Self {
        self.break_start = break_start;
        self.break_duration_minutes = break_duration_minutes;
        self
    }

    pub fn with_active_days(mut self, days: impl IntoIterator<Item = u8>) -> Self {
        self.active_days = days.into_iter().collect();
        self
    }

    /// `weight` scaled to an exact integer so the objective can stay
    /// integer-valued: `round(weight * 100)`.
    pub fn weight_scaled(&self) -> i64 {
        (self.weight * 100.0).round() as i64
    }

    /// Whether this shift's `[start, end)` crosses midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.end.minutes() <= self.start.minutes()
    }
}

/// The output of coverage compilation for one [`ShiftTemplate`]: a
/// per-block bitmap of "an assignee is actively on duty here" plus the
/// derived scalars the model builder and assembler need.
#[derive(Debug, Clone)]
pub struct CompiledShift {
    pub name: String,
    pub coverage: Box<[bool; BLOCKS_PER_WEEK as usize]>,
    /// Blocks at which an assignee begins work, one per active day
    /// (duplicates possible only if two active days land on the same
    /// block, which cannot happen on a single week but is kept as a
    /// `Vec` for uniformity with multi-day templates).
    pub start_blocks: Vec<u32>,
    pub length_blocks: u32,
    pub weight_scaled: i64,
    pub max_assignees: u32,
}

impl CompiledShift {
    pub fn covers(&self, block: u32) -> bool {
        self.coverage[(block % BLOCKS_PER_WEEK) as usize]
    }
}
