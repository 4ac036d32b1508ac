//! Core data types for the schedule calculator.

use chrono::NaiveDate;
use pyo3::prelude::*;

/// Caller-chosen task identifier. Must be positive and unique within a schedule.
pub type TaskId = u32;

/// A unit of schedulable work as edited by the caller.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    #[pyo3(get, set)]
    pub id: TaskId,
    #[pyo3(get, set)]
    pub name: String,
    /// Duration in whole time units (days). Zero marks a milestone.
    #[pyo3(get, set)]
    pub duration: i64,
    /// Ids of tasks that must finish before this one starts.
    #[pyo3(get, set)]
    pub dependencies: Vec<TaskId>,
}

#[pymethods]
impl Task {
    #[new]
    #[pyo3(signature = (id, name, duration, dependencies=Vec::new()))]
    pub fn new(id: TaskId, name: String, duration: i64, dependencies: Vec<TaskId>) -> Self {
        Self {
            id,
            name,
            duration,
            dependencies,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Task(id={}, name={:?}, duration={}, deps={:?})",
            self.id, self.name, self.duration, self.dependencies
        )
    }
}

/// A task annotated with its computed schedule.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    #[pyo3(get)]
    pub id: TaskId,
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub duration: i64,
    #[pyo3(get)]
    pub dependencies: Vec<TaskId>,
    #[pyo3(get)]
    pub early_start: i64,
    #[pyo3(get)]
    pub early_finish: i64,
    #[pyo3(get)]
    pub late_start: i64,
    #[pyo3(get)]
    pub late_finish: i64,
    #[pyo3(get)]
    pub float: i64,
    #[pyo3(get)]
    pub is_critical: bool,
    /// Dates are only filled in when the config carries a start date.
    #[pyo3(get)]
    pub early_start_date: Option<NaiveDate>,
    #[pyo3(get)]
    pub early_finish_date: Option<NaiveDate>,
    #[pyo3(get)]
    pub late_start_date: Option<NaiveDate>,
    #[pyo3(get)]
    pub late_finish_date: Option<NaiveDate>,
}

#[pymethods]
impl ScheduledTask {
    fn __repr__(&self) -> String {
        format!(
            "ScheduledTask(id={}, es={}, ef={}, ls={}, lf={}, float={}, critical={})",
            self.id,
            self.early_start,
            self.early_finish,
            self.late_start,
            self.late_finish,
            self.float,
            self.is_critical
        )
    }
}

/// Full output of a schedule computation, tasks in input order.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComputedSchedule {
    #[pyo3(get)]
    pub tasks: Vec<ScheduledTask>,
    #[pyo3(get)]
    pub project_duration: i64,
    /// Critical task ids, ordered so that every task follows its dependencies.
    #[pyo3(get)]
    pub critical_path: Vec<TaskId>,
    #[pyo3(get)]
    pub project_finish_date: Option<NaiveDate>,
}

impl ComputedSchedule {
    pub fn task(&self, id: TaskId) -> Option<&ScheduledTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Critical tasks in critical path order.
    pub fn critical_tasks(&self) -> Vec<&ScheduledTask> {
        self.critical_path
            .iter()
            .filter_map(|&id| self.task(id))
            .collect()
    }
}

#[pymethods]
impl ComputedSchedule {
    /// Names of the critical tasks in critical path order.
    pub fn critical_path_names(&self) -> Vec<String> {
        self.critical_tasks()
            .into_iter()
            .map(|t| t.name.clone())
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "ComputedSchedule(tasks={}, project_duration={}, critical={})",
            self.tasks.len(),
            self.project_duration,
            self.critical_path.len()
        )
    }
}
