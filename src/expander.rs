//! Task expander: lowers [`TaskTemplate`]s into per-day [`TaskInstance`]s.

use crate::models::{TaskInstance, TaskTemplate};
use crate::time_grid::{minute_to_block, BLOCKS_PER_WEEK};

const DAY_MINUTES: u32 = 1440;

/// Expands every active day of `template` into one [`TaskInstance`].
///
/// `latest_block` is kept as a linear (unreduced) value: when the window
/// wraps from Sunday into Monday it may exceed `BLOCKS_PER_WEEK - 1`, and
/// the model builder keys its per-block booleans by `block % BLOCKS_PER_WEEK`
/// rather than reducing the range up front. This is the single place
/// Sunday→Monday wrap is handled for tasks.
pub fn expand_task(task_index: usize, template: &TaskTemplate) -> Vec<TaskInstance> {
    let duration_blocks = template.duration_minutes / 15;

    template
        .active_days
        .iter()
        .map(|&day| {
            let day_offset = day as u32 * DAY_MINUTES;
            let start_min = day_offset + template.window_start.minutes();
            let mut end_min = day_offset + template.window_end.minutes();
            if end_min < start_min {
                end_min += DAY_MINUTES;
            }

            let earliest_block = minute_to_block(start_min);
            let mut latest_block = minute_to_block(end_min);
            if latest_block < earliest_block {
                latest_block += BLOCKS_PER_WEEK;
            }

            TaskInstance {
                task_index,
                day_index: day,
                name: template.name.clone(),
                earliest_block,
                latest_block,
                duration_blocks,
                required_workers: template.required_workers,
            }
        })
        .collect()
}

/// Expands every task template, in input order, into its day instances.
pub fn expand_all(templates: &[TaskTemplate]) -> Vec<TaskInstance> {
    templates
        .iter()
        .enumerate()
        .flat_map(|(i, t)| expand_task(i, t))
        .collect()
}
