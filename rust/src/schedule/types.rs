//! Types shared by the schedule passes.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::models::TaskId;

/// Structural problems in the input that make a schedule uncomputable.
///
/// No partial schedule accompanies any of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Cyclic dependency detected among tasks {task_ids:?}")]
    CyclicDependency { task_ids: Vec<TaskId> },
    #[error("Task {task_id} depends on unknown task {dependency_id}")]
    DanglingDependency {
        task_id: TaskId,
        dependency_id: TaskId,
    },
    #[error("Task {task_id} has negative duration {duration}")]
    InvalidDuration { task_id: TaskId, duration: i64 },
    #[error("Task id {0} appears more than once")]
    DuplicateTaskId(TaskId),
    #[error("Task id {0} is not a positive integer")]
    InvalidTaskId(TaskId),
    #[error("Offset {offset} of task {task_id} is outside the representable date range")]
    DateOutOfRange { task_id: TaskId, offset: i64 },
    #[error("Early finish of task {task_id} exceeds the largest representable time")]
    DurationOverflow { task_id: TaskId },
}

/// Per-task timing from the forward and backward passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskTiming {
    pub early_start: i64,
    pub early_finish: i64,
    pub late_start: i64,
    pub late_finish: i64,
    /// late_start - early_start.
    pub float: i64,
}

impl TaskTiming {
    pub fn is_critical(&self) -> bool {
        self.float == 0
    }
}

/// Output of the calculator, keyed by task id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleResult {
    pub task_timings: FxHashMap<TaskId, TaskTiming>,
    /// The topological order the passes ran in.
    pub topo_order: Vec<TaskId>,
    /// max(early_finish), 0 for an empty schedule.
    pub project_duration: i64,
    /// Zero-float tasks ordered by (early_start, topological rank).
    pub critical_path: Vec<TaskId>,
}

impl ScheduleResult {
    pub fn timing(&self, id: TaskId) -> Option<&TaskTiming> {
        self.task_timings.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_timing_critical() {
        let timing = TaskTiming {
            early_start: 0,
            early_finish: 5,
            late_start: 0,
            late_finish: 5,
            float: 0,
        };
        assert!(timing.is_critical());

        let timing_with_float = TaskTiming {
            early_start: 0,
            early_finish: 5,
            late_start: 2,
            late_finish: 7,
            float: 2,
        };
        assert!(!timing_with_float.is_critical());
    }

    #[test]
    fn test_error_messages() {
        let err = ScheduleError::DanglingDependency {
            task_id: 3,
            dependency_id: 9,
        };
        assert_eq!(err.to_string(), "Task 3 depends on unknown task 9");

        let err = ScheduleError::CyclicDependency {
            task_ids: vec![1, 2],
        };
        assert_eq!(
            err.to_string(),
            "Cyclic dependency detected among tasks [1, 2]"
        );
    }
}
