//! Risk analysis of a computed schedule through an injected analyzer.
//!
//! The calculator only prepares the request (critical path and project
//! duration) and checks the shape of the answer. Who answers, and how, is up
//! to the `RiskAnalyzer` implementation the caller supplies.

use std::fmt;

use thiserror::Error;

use crate::models::ComputedSchedule;

/// Language the analyzer should answer in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Hi,
    Bn,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Bn => "bn",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "bn" => Some(Language::Bn),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Bn => "Bengali",
        };
        f.write_str(name)
    }
}

/// What an analyzer is told about the schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RiskRequest {
    pub project_duration: i64,
    /// Critical task names in critical path order.
    pub critical_path: Vec<String>,
    /// Site location, e.g. a city name.
    pub location: String,
    pub language: Language,
}

impl RiskRequest {
    pub fn from_schedule(
        schedule: &ComputedSchedule,
        location: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            project_duration: schedule.project_duration,
            critical_path: schedule.critical_path_names(),
            location: location.into(),
            language,
        }
    }

    /// Critical path as a single line, e.g. `"Clear -> Found -> Frame"`.
    pub fn critical_path_summary(&self) -> String {
        self.critical_path.join(" -> ")
    }
}

/// One identified risk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleRisk {
    pub risk: String,
    pub impact: String,
    pub mitigation: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskAnalysisError {
    #[error("Schedule has no critical path to analyze")]
    EmptySchedule,
    #[error("Risk analyzer failed: {0}")]
    Analyzer(String),
    #[error("Risk analyzer returned a malformed response: {0}")]
    MalformedResponse(String),
}

/// A capability that turns a schedule summary into risks.
pub trait RiskAnalyzer {
    fn analyze(&self, request: &RiskRequest) -> Result<Vec<ScheduleRisk>, RiskAnalysisError>;
}

impl<F> RiskAnalyzer for F
where
    F: Fn(&RiskRequest) -> Result<Vec<ScheduleRisk>, RiskAnalysisError>,
{
    fn analyze(&self, request: &RiskRequest) -> Result<Vec<ScheduleRisk>, RiskAnalysisError> {
        self(request)
    }
}

/// Ask `analyzer` for the risks of `schedule`.
///
/// Entries without a risk description are rejected as malformed.
pub fn analyze_schedule_risks<A: RiskAnalyzer + ?Sized>(
    schedule: &ComputedSchedule,
    location: &str,
    language: Language,
    analyzer: &A,
) -> Result<Vec<ScheduleRisk>, RiskAnalysisError> {
    if schedule.critical_path.is_empty() {
        return Err(RiskAnalysisError::EmptySchedule);
    }

    let request = RiskRequest::from_schedule(schedule, location, language);
    let risks = analyzer.analyze(&request)?;

    if let Some(position) = risks.iter().position(|r| r.risk.trim().is_empty()) {
        return Err(RiskAnalysisError::MalformedResponse(format!(
            "entry {} has an empty risk",
            position
        )));
    }

    Ok(risks)
}
