//! Conversion between the comma-separated dependency text users edit and id lists.

use thiserror::Error;

use crate::models::TaskId;

/// Errors from parsing a dependency string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyParseError {
    #[error("Invalid dependency reference {0:?}: expected a positive task id")]
    InvalidReference(String),
}

/// Parse text such as `"1, 2,,3"` into `[1, 2, 3]`.
///
/// Whitespace around entries and empty entries are ignored. Repeated ids are
/// kept once, at their first position.
pub fn parse_dependencies(text: &str) -> Result<Vec<TaskId>, DependencyParseError> {
    let mut ids: Vec<TaskId> = Vec::new();

    for part in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let id = part
            .parse::<TaskId>()
            .ok()
            .filter(|&id| id > 0)
            .ok_or_else(|| DependencyParseError::InvalidReference(part.to_string()))?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    Ok(ids)
}

/// Format ids back into the editable form, e.g. `"4,5"`.
pub fn format_dependencies(ids: &[TaskId]) -> String {
    ids.iter()
        .map(TaskId::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
