//! Critical Path Method schedule calculator.
//!
//! Validates a task snapshot, orders it topologically, then runs the forward
//! pass (early times), the backward pass (late times) and derives float and
//! the critical path. Results are produced fresh on every call; the input
//! tasks are never modified.

mod calculation;
mod dates;
mod graph;
mod types;

pub use calculation::calculate_schedule;
pub use dates::{offset_to_date, task_dates, TaskDates};
pub use types::{ScheduleError, ScheduleResult, TaskTiming};

use crate::config::ScheduleConfig;
use crate::models::{ComputedSchedule, ScheduledTask, Task};

/// Compute the schedule and annotate the input tasks with it.
///
/// Tasks keep their input order. Dates are filled in when `config.start_date` is set.
pub fn compute_schedule(
    tasks: &[Task],
    config: &ScheduleConfig,
) -> Result<ComputedSchedule, ScheduleError> {
    let result = calculate_schedule(tasks, config.verbosity)?;

    // Validation rejects duplicate ids, so every task has exactly one timing
    debug_assert_eq!(result.task_timings.len(), tasks.len());

    let mut scheduled = Vec::with_capacity(tasks.len());
    for task in tasks {
        let Some(timing) = result.timing(task.id) else {
            continue;
        };
        let dates = config
            .start_date
            .map(|start| task_dates(start, timing, task.id))
            .transpose()?;

        scheduled.push(ScheduledTask {
            id: task.id,
            name: task.name.clone(),
            duration: task.duration,
            dependencies: task.dependencies.clone(),
            early_start: timing.early_start,
            early_finish: timing.early_finish,
            late_start: timing.late_start,
            late_finish: timing.late_finish,
            float: timing.float,
            is_critical: timing.is_critical(),
            early_start_date: dates.map(|d| d.early_start),
            early_finish_date: dates.map(|d| d.early_finish),
            late_start_date: dates.map(|d| d.late_start),
            late_finish_date: dates.map(|d| d.late_finish),
        });
    }

    // The project ends with some task's early finish, whose date is already known
    let project_finish_date = config.start_date.map(|start| {
        scheduled
            .iter()
            .filter_map(|t| t.early_finish_date)
            .max()
            .unwrap_or(start)
    });

    Ok(ComputedSchedule {
        tasks: scheduled,
        project_duration: result.project_duration,
        critical_path: result.critical_path,
        project_finish_date,
    })
}
