//! Border datasets: southwest border encounters by nationality and fiscal
//! year, and drug seizures by drug type. Encounter rows join against the
//! nationality index by code.

use serde::{Deserialize, Serialize};

use crate::data::loader::{DataError, DataRoot};

pub const BORDER_ENCOUNTERS_FILE: &str = "border-encounters.json";
pub const DRUG_SEIZURES_FILE: &str = "drug-seizures.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderEncountersTable {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    pub rows: Vec<EncounterRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterRow {
    pub fiscal_year: u16,
    pub nationality_code: String,
    pub encounters: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugSeizuresTable {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    pub rows: Vec<SeizureRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeizureRow {
    pub fiscal_year: u16,
    pub drug: String,
    pub seizures: u64,
    pub pounds_seized: f64,
}

pub fn load_border_encounters(
    root: &DataRoot,
) -> Result<Option<BorderEncountersTable>, DataError> {
    root.read_optional(BORDER_ENCOUNTERS_FILE)
}

pub fn load_drug_seizures(root: &DataRoot) -> Result<Option<DrugSeizuresTable>, DataError> {
    root.read_optional(DRUG_SEIZURES_FILE)
}
