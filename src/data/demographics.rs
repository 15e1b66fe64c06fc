//! Demographic breakdowns: gender and language of record across all cases.

use serde::{Deserialize, Serialize};

use crate::data::loader::{DataError, DataRoot};

pub const GENDER_FILE: &str = "gender.json";
pub const LANGUAGES_FILE: &str = "languages.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderTable {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    pub rows: Vec<GenderRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderRow {
    pub gender: String,
    pub cases: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesTable {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    pub rows: Vec<LanguageRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageRow {
    pub language: String,
    pub cases: u64,
}

pub fn load_gender(root: &DataRoot) -> Result<Option<GenderTable>, DataError> {
    root.read_optional(GENDER_FILE)
}

pub fn load_languages(root: &DataRoot) -> Result<Option<LanguagesTable>, DataError> {
    root.read_optional(LANGUAGES_FILE)
}
