//! Configuration for the schedule calculator.

use chrono::NaiveDate;
use pyo3::prelude::*;

use crate::logging::VERBOSITY_SILENT;

/// Options that affect logging and output, never the computed offsets.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
    /// Day zero of the project. When set, every offset is also reported as a date.
    #[pyo3(get, set)]
    pub start_date: Option<NaiveDate>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            verbosity: VERBOSITY_SILENT,
            start_date: None,
        }
    }
}

impl ScheduleConfig {
    /// Config anchored at `start_date`, otherwise default.
    pub fn starting_on(start_date: NaiveDate) -> Self {
        Self {
            start_date: Some(start_date),
            ..Self::default()
        }
    }
}

#[pymethods]
impl ScheduleConfig {
    #[new]
    #[pyo3(signature = (verbosity=None, start_date=None))]
    fn new(verbosity: Option<u8>, start_date: Option<NaiveDate>) -> Self {
        let defaults = Self::default();
        Self {
            verbosity: verbosity.unwrap_or(defaults.verbosity),
            start_date: start_date.or(defaults.start_date),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ScheduleConfig(verbosity={}, start_date={:?})",
            self.verbosity, self.start_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ScheduleConfig::default();
        assert_eq!(config.verbosity, 0);
        assert!(config.start_date.is_none());
    }

    #[test]
    fn test_starting_on() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let config = ScheduleConfig::starting_on(start);
        assert_eq!(config.start_date, Some(start));
        assert_eq!(config.verbosity, VERBOSITY_SILENT);
    }
}
