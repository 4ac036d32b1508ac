//! Critical Path Method (CPM) schedule engine.
//!
//! Computes early/late start and finish times, float and the critical path for
//! a set of tasks with durations and dependencies. Usable as a Rust library or
//! as a Python extension module.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod config;
pub mod dependencies;
mod interner;
pub mod logging;
mod models;
pub mod risk;
pub mod schedule;

pub use config::ScheduleConfig;
pub use dependencies::{format_dependencies, parse_dependencies, DependencyParseError};
pub use models::{ComputedSchedule, ScheduledTask, Task, TaskId};
pub use risk::{
    analyze_schedule_risks, Language, RiskAnalysisError, RiskAnalyzer, RiskRequest, ScheduleRisk,
};
pub use schedule::{
    calculate_schedule, compute_schedule, ScheduleError, ScheduleResult, TaskTiming,
};

/// Input errors surface in Python as `ValueError` carrying the error's message.
fn value_error(err: impl std::fmt::Display) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

/// Compute the CPM schedule for a list of tasks.
///
/// # Arguments
/// * `tasks` - Tasks with ids, durations and dependency ids
/// * `config` - Optional configuration (verbosity, project start date)
///
/// # Returns
/// * ComputedSchedule with every task annotated, in input order
///
/// # Raises
/// * ValueError on a cyclic or dangling dependency, negative duration, bad id,
///   or a chain too long to represent
#[pyfunction]
#[pyo3(name = "compute_schedule", signature = (tasks, config=None))]
fn py_compute_schedule(
    tasks: Vec<Task>,
    config: Option<ScheduleConfig>,
) -> PyResult<ComputedSchedule> {
    let config = config.unwrap_or_default();
    compute_schedule(&tasks, &config).map_err(value_error)
}

/// Parse a comma-separated dependency string such as "1,2" into task ids.
///
/// # Raises
/// * ValueError if an entry is not a positive integer
#[pyfunction]
#[pyo3(name = "parse_dependencies")]
fn py_parse_dependencies(text: &str) -> PyResult<Vec<TaskId>> {
    parse_dependencies(text).map_err(value_error)
}

/// Format task ids as a comma-separated dependency string.
#[pyfunction]
#[pyo3(name = "format_dependencies")]
fn py_format_dependencies(ids: Vec<TaskId>) -> String {
    format_dependencies(&ids)
}

/// The sitecpm.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Task>()?;
    m.add_class::<ScheduledTask>()?;
    m.add_class::<ComputedSchedule>()?;

    // Config types
    m.add_class::<ScheduleConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_compute_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(py_parse_dependencies, m)?)?;
    m.add_function(wrap_pyfunction!(py_format_dependencies, m)?)?;

    Ok(())
}
