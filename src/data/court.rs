//! Immigration court datasets: index for listing/lookup plus per-slug
//! detail records for court pages.

use serde::{Deserialize, Serialize};

use crate::data::loader::{valid_slug, DataError, DataRoot};
use crate::data::metrics;
use crate::data::series::{OutcomeCount, RelatedCount, YearlyCases};

pub const COURT_INDEX_FILE: &str = "court-index.json";
pub const COURT_DETAIL_DIR: &str = "courts";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtIndex {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    pub courts: Vec<CourtIndexEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtIndexEntry {
    pub code: String,
    pub slug: String,
    pub name: String,
    pub state: String,
    pub total_cases: u64,
    pub pending_cases: u64,
    pub asylum_granted: u64,
    pub asylum_denied: u64,
}

impl CourtIndexEntry {
    pub fn asylum_decided(&self) -> u64 {
        self.asylum_granted + self.asylum_denied
    }

    pub fn grant_rate(&self) -> Option<f64> {
        metrics::percentage(self.asylum_granted, self.asylum_decided())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtRecord {
    pub code: String,
    pub slug: String,
    pub name: String,
    pub state: String,
    pub total_cases: u64,
    pub pending_cases: u64,
    pub asylum_granted: u64,
    pub asylum_denied: u64,
    /// Median days from filing to completion for this court, when known.
    #[serde(default)]
    pub median_wait_days: Option<f64>,
    #[serde(default)]
    pub yearly: Vec<YearlyCases>,
    #[serde(default)]
    pub top_nationalities: Vec<RelatedCount>,
    #[serde(default)]
    pub outcomes: Vec<OutcomeCount>,
}

impl CourtRecord {
    pub fn asylum_decided(&self) -> u64 {
        self.asylum_granted + self.asylum_denied
    }

    pub fn grant_rate(&self) -> Option<f64> {
        metrics::percentage(self.asylum_granted, self.asylum_decided())
    }
}

pub fn load_court_index(root: &DataRoot) -> Result<CourtIndex, DataError> {
    root.read_required(COURT_INDEX_FILE)
}

pub fn load_court_record(root: &DataRoot, slug: &str) -> Result<Option<CourtRecord>, DataError> {
    if !valid_slug(slug) {
        return Ok(None);
    }
    root.read_optional(&format!("{COURT_DETAIL_DIR}/{slug}.json"))
}
