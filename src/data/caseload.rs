//! Caseload composition datasets: case types, overall outcomes, and the
//! court-wide yearly trend series.

use serde::{Deserialize, Serialize};

use crate::data::loader::{DataError, DataRoot};
use crate::data::metrics;

pub const CASE_TYPES_FILE: &str = "case-types.json";
pub const OUTCOMES_FILE: &str = "outcomes.json";
pub const YEARLY_TRENDS_FILE: &str = "yearly-trends.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseTypesTable {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    pub rows: Vec<CaseTypeRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseTypeRow {
    pub case_type: String,
    pub cases: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomesTable {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    pub rows: Vec<OutcomeRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRow {
    pub outcome: String,
    pub cases: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyTrendsTable {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    pub rows: Vec<TrendRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRow {
    pub fiscal_year: u16,
    pub new_cases: u64,
    pub completed_cases: u64,
    pub pending_end: u64,
}

impl TrendRow {
    /// Completions as a share of new filings in the same year.
    pub fn clearance_rate(&self) -> Option<f64> {
        metrics::percentage(self.completed_cases, self.new_cases)
    }
}

pub fn load_case_types(root: &DataRoot) -> Result<Option<CaseTypesTable>, DataError> {
    root.read_optional(CASE_TYPES_FILE)
}

pub fn load_outcomes(root: &DataRoot) -> Result<Option<OutcomesTable>, DataError> {
    root.read_optional(OUTCOMES_FILE)
}

pub fn load_yearly_trends(root: &DataRoot) -> Result<Option<YearlyTrendsTable>, DataError> {
    root.read_optional(YEARLY_TRENDS_FILE)
}
