//! Mapping of day offsets onto dates.
//!
//! Offset `n` is `start + n` days. Every day counts; there is no working
//! calendar. A finish offset maps to the day after the last working day, the
//! same exclusive end the offsets use.

use chrono::{Days, NaiveDate};

use crate::models::TaskId;

use super::types::{ScheduleError, TaskTiming};

/// Dates for the four computed instants of one task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskDates {
    pub early_start: NaiveDate,
    pub early_finish: NaiveDate,
    pub late_start: NaiveDate,
    pub late_finish: NaiveDate,
}

/// Date of `offset` days after `start`.
pub fn offset_to_date(
    start: NaiveDate,
    offset: i64,
    task_id: TaskId,
) -> Result<NaiveDate, ScheduleError> {
    let out_of_range = ScheduleError::DateOutOfRange { task_id, offset };
    let days = u64::try_from(offset).map_err(|_| out_of_range.clone())?;
    start.checked_add_days(Days::new(days)).ok_or(out_of_range)
}

/// Anchor a task's timing at `start`.
pub fn task_dates(
    start: NaiveDate,
    timing: &TaskTiming,
    task_id: TaskId,
) -> Result<TaskDates, ScheduleError> {
    Ok(TaskDates {
        early_start: offset_to_date(start, timing.early_start, task_id)?,
        early_finish: offset_to_date(start, timing.early_finish, task_id)?,
        late_start: offset_to_date(start, timing.late_start, task_id)?,
        late_finish: offset_to_date(start, timing.late_finish, task_id)?,
    })
}
