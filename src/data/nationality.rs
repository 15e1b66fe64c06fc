//! Nationality datasets: the compact index used for listing and lookup, and
//! the per-slug detail record loaded on demand for a nationality page.

use serde::{Deserialize, Serialize};

use crate::data::loader::{valid_slug, DataError, DataRoot};
use crate::data::metrics;
use crate::data::series::{OutcomeCount, RelatedCount, YearlyCases};

pub const NATIONALITY_INDEX_FILE: &str = "nationality-index.json";
pub const NATIONALITY_DETAIL_DIR: &str = "nationalities";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalityIndex {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    pub nationalities: Vec<NationalityIndexEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalityIndexEntry {
    pub code: String,
    pub slug: String,
    pub name: String,
    pub total_cases: u64,
    pub pending_cases: u64,
    pub asylum_granted: u64,
    pub asylum_denied: u64,
}

impl NationalityIndexEntry {
    pub fn asylum_decided(&self) -> u64 {
        self.asylum_granted + self.asylum_denied
    }

    pub fn grant_rate(&self) -> Option<f64> {
        metrics::percentage(self.asylum_granted, self.asylum_decided())
    }
}

/// Extended record behind a nationality page. Missing file = no page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalityRecord {
    pub code: String,
    pub slug: String,
    pub name: String,
    pub total_cases: u64,
    pub pending_cases: u64,
    pub asylum_granted: u64,
    pub asylum_denied: u64,
    #[serde(default)]
    pub removal_orders: u64,
    #[serde(default)]
    pub yearly: Vec<YearlyCases>,
    #[serde(default)]
    pub top_courts: Vec<RelatedCount>,
    #[serde(default)]
    pub outcomes: Vec<OutcomeCount>,
}

impl NationalityRecord {
    pub fn asylum_decided(&self) -> u64 {
        self.asylum_granted + self.asylum_denied
    }

    pub fn grant_rate(&self) -> Option<f64> {
        metrics::percentage(self.asylum_granted, self.asylum_decided())
    }
}

pub fn load_nationality_index(root: &DataRoot) -> Result<NationalityIndex, DataError> {
    root.read_required(NATIONALITY_INDEX_FILE)
}

/// Load one nationality detail record. `Ok(None)` when no page exists for
/// the slug (including slugs that are not plain identifiers).
pub fn load_nationality_record(
    root: &DataRoot,
    slug: &str,
) -> Result<Option<NationalityRecord>, DataError> {
    if !valid_slug(slug) {
        return Ok(None);
    }
    root.read_optional(&format!("{NATIONALITY_DETAIL_DIR}/{slug}.json"))
}
