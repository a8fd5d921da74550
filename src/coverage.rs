//! Coverage compiler: lowers [`ShiftTemplate`]s into [`CompiledShift`]s.

use crate::models::{CompiledShift, ShiftTemplate};
use crate::time_grid::{add_coverage, minute_to_block, remove_coverage, BLOCKS_PER_WEEK};

const DAY_MINUTES: u32 = 1440;

/// Compiles one shift template into its weekly coverage bitmap.
///
/// For each active day, resolves the day-local start/end/break into
/// absolute weekly minutes (adding 24h where a midnight-crossing shift or
/// a break nominally preceding `start` requires it), paints coverage,
/// then cuts the break back out. A break that, after clamping, has
/// become empty or falls outside `[start, end]` is treated as a no-op
/// and logged rather than failed — coverage for the rest of the shift is
/// still correct.
pub fn compile_shift(template: &ShiftTemplate) -> CompiledShift {
    let mut coverage = Box::new([false; BLOCKS_PER_WEEK as usize]);
    let mut start_blocks = Vec::new();

    for &day in &template.active_days {
        let day_offset = day as u32 * DAY_MINUTES;
        let start_min = day_offset + template.start.minutes();
        let mut end_min = day_offset + template.end.minutes();
        if end_min <= start_min {
            end_min += DAY_MINUTES;
        }

        let mut break_start = day_offset + template.break_start.minutes();
        if break_start < start_min {
            break_start += DAY_MINUTES;
        }
        let break_end = break_start + template.break_duration_minutes;

        add_coverage(&mut coverage, start_min, end_min);

        let (clamped_start, clamped_end) = (break_start.max(start_min), break_end.min(end_min));
        if clamped_end > clamped_start {
            remove_coverage(&mut coverage, clamped_start, clamped_end);
        } else if template.break_duration_minutes > 0 {
            log::warn!(
                "shift \"{}\": break on day {} falls outside the shift and was ignored",
                template.name,
                day
            );
        }

        start_blocks.push(minute_to_block(start_min) % BLOCKS_PER_WEEK);
    }

    let length_blocks = coverage.iter().filter(|&&b| b).count() as u32;

    CompiledShift {
        name: template.name.clone(),
        coverage,
        start_blocks,
        length_blocks,
        weight_scaled: template.weight_scaled(),
        max_assignees: template.max_assignees,
    }
}
