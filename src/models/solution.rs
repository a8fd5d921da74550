//! Output types: a solved plan and its streamed incumbents.

use serde::{Deserialize, Serialize};

/// Resolved assignee count for one shift template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShiftUsage {
    pub shift_name: String,
    pub usage: u32,
}

/// Resolved start time for one task instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskSolution {
    pub task_index: usize,
    pub day_index: u8,
    pub task_name: String,
    /// Minutes since midnight on `day_index`, block-aligned.
    pub window_start_minute: u32,
    pub window_end_minute: u32,
    pub solution_start_minute: u32,
    pub duration_minutes: u32,
    pub required_workers: u32,
}

/// A feasible-or-better incumbent reported during the solve, with the
/// wall-clock offset at which it was found.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Incumbent {
    pub cost: f64,
    pub wall_clock_seconds: f64,
}

/// The full result of one planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResult {
    pub shift_usages: Vec<ShiftUsage>,
    pub task_solutions: Vec<TaskSolution>,
    pub total_cost: f64,
    pub incumbents: Vec<Incumbent>,
}

impl PlanResult {
    pub fn usage_for(&self, shift_name: &str) -> Option<u32> {
        self.shift_usages
            .iter()
            .find(|u| u.shift_name == shift_name)
            .map(|u| u.usage)
    }
}
