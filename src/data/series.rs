//! Small row types shared by the entity detail files.

use serde::{Deserialize, Serialize};

/// One point of a per-entity yearly caseload series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyCases {
    pub fiscal_year: u16,
    pub cases: u64,
}

/// One point of a judge's yearly decision series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyDecisions {
    pub fiscal_year: u16,
    pub decisions: u64,
    pub granted: u64,
    pub denied: u64,
}

/// Top-N related entity reference; `code` joins against an entity index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedCount {
    pub code: String,
    pub cases: u64,
}

/// Outcome-by-category breakdown row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeCount {
    pub outcome: String,
    pub cases: u64,
}
