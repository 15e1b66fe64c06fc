//! Immigration judge datasets: index for listing/ranking plus per-slug
//! detail records. Judges join to courts by `courtCode`.

use serde::{Deserialize, Serialize};

use crate::data::loader::{valid_slug, DataError, DataRoot};
use crate::data::metrics;
use crate::data::series::{RelatedCount, YearlyDecisions};

pub const JUDGE_INDEX_FILE: &str = "judge-index.json";
pub const JUDGE_DETAIL_DIR: &str = "judges";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeIndex {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    pub judges: Vec<JudgeIndexEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeIndexEntry {
    pub slug: String,
    pub name: String,
    pub court_code: String,
    pub decisions: u64,
    pub asylum_granted: u64,
    pub asylum_denied: u64,
}

impl JudgeIndexEntry {
    pub fn grant_rate(&self) -> Option<f64> {
        metrics::percentage(self.asylum_granted, self.asylum_granted + self.asylum_denied)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeRecord {
    pub slug: String,
    pub name: String,
    pub court_code: String,
    pub decisions: u64,
    pub asylum_granted: u64,
    pub asylum_denied: u64,
    #[serde(default)]
    pub yearly: Vec<YearlyDecisions>,
    #[serde(default)]
    pub top_nationalities: Vec<RelatedCount>,
}

impl JudgeRecord {
    pub fn grant_rate(&self) -> Option<f64> {
        metrics::percentage(self.asylum_granted, self.asylum_granted + self.asylum_denied)
    }
}

pub fn load_judge_index(root: &DataRoot) -> Result<JudgeIndex, DataError> {
    root.read_required(JUDGE_INDEX_FILE)
}

pub fn load_judge_record(root: &DataRoot, slug: &str) -> Result<Option<JudgeRecord>, DataError> {
    if !valid_slug(slug) {
        return Ok(None);
    }
    root.read_optional(&format!("{JUDGE_DETAIL_DIR}/{slug}.json"))
}
