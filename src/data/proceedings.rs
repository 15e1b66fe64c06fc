//! Court-keyed proceedings datasets: bond decisions, pending wait times,
//! and custody status. Bond and wait-time rows join against the court
//! index by code.

use serde::{Deserialize, Serialize};

use crate::data::loader::{DataError, DataRoot};
use crate::data::metrics;

pub const BONDS_FILE: &str = "bonds.json";
pub const WAIT_TIMES_FILE: &str = "wait-times.json";
pub const CUSTODY_FILE: &str = "custody.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondsTable {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    pub rows: Vec<BondRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondRow {
    pub court_code: String,
    pub bonds_granted: u64,
    pub bonds_denied: u64,
    pub median_amount: f64,
}

impl BondRow {
    pub fn grant_rate(&self) -> Option<f64> {
        metrics::percentage(self.bonds_granted, self.bonds_granted + self.bonds_denied)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitTimesTable {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    pub rows: Vec<WaitTimeRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitTimeRow {
    pub court_code: String,
    pub pending_cases: u64,
    pub median_days: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustodyTable {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    pub rows: Vec<CustodyRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustodyRow {
    pub custody: String,
    pub cases: u64,
}

pub fn load_bonds(root: &DataRoot) -> Result<Option<BondsTable>, DataError> {
    root.read_optional(BONDS_FILE)
}

pub fn load_wait_times(root: &DataRoot) -> Result<Option<WaitTimesTable>, DataError> {
    root.read_optional(WAIT_TIMES_FILE)
}

pub fn load_custody(root: &DataRoot) -> Result<Option<CustodyTable>, DataError> {
    root.read_optional(CUSTODY_FILE)
}
