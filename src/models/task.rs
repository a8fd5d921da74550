//! Task template and its per-day expanded instances.

use crate::time_grid::TimeOfDay;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A recurring demand for workers during a feasible start window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub name: String,
    pub window_start: TimeOfDay,
    pub window_end: TimeOfDay,
    pub duration_minutes: u32,
    pub required_workers: u32,
    pub active_days: BTreeSet<u8>,
}

impl TaskTemplate {
    pub fn new(
        name: impl Into<String>,
        window_start: TimeOfDay,
        window_end: TimeOfDay,
        duration_minutes: u32,
        required_workers: u32,
    ) -> Self {
        Self {
            name: name.into(),
            window_start,
            window_end,
            duration_minutes,
            required_workers,
            active_days: BTreeSet::new(),
        }
    }

    pub fn with_active_days(mut self, days: impl IntoIterator<Item = u8>) -> Self {
        self.active_days = days.into_iter().collect();
        self
    }

    /// Whether `[window_start, window_end)` crosses midnight.
    pub fn window_wraps(&self) -> bool {
        self.window_end.minutes() < self.window_start.minutes()
    }
}

/// One (task, active day) instance with a concrete, linear (unreduced)
/// block range in which it may start. `latest_block` may exceed
/// `BLOCKS_PER_WEEK - 1` when the window wraps from Sunday into Monday;
/// callers that index a per-block structure must take it modulo
/// `BLOCKS_PER_WEEK`.
#[derive(Debug, Clone)]
pub struct TaskInstance {
    pub task_index: usize,
    pub day_index: u8,
    pub name: String,
    pub earliest_block: u32,
    pub latest_block: u32,
    pub duration_blocks: u32,
    pub required_workers: u32,
}

impl TaskInstance {
    /// Every block a started instance could ever be running in, as a
    /// linear (unreduced) range.
    pub fn extended_active_range(&self) -> std::ops::Range<u32> {
        self.earliest_block..(self.latest_block + self.duration_blocks)
    }
}
