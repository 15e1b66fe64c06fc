//! Appeals outcomes by nationality. Rows join against the nationality
//! index by code for display names and page links.

use serde::{Deserialize, Serialize};

use crate::data::loader::{DataError, DataRoot};
use crate::data::metrics;

pub const APPEALS_FILE: &str = "appeals.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealsTable {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    pub rows: Vec<AppealRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealRow {
    pub nationality_code: String,
    pub filed: u64,
    pub sustained: u64,
    pub dismissed: u64,
}

impl AppealRow {
    /// Share of decided appeals that were sustained.
    pub fn sustain_rate(&self) -> Option<f64> {
        metrics::percentage(self.sustained, self.sustained + self.dismissed)
    }
}

pub fn load_appeals(root: &DataRoot) -> Result<Option<AppealsTable>, DataError> {
    root.read_optional(APPEALS_FILE)
}

#[cfg(test)]
mod tests {
    use super::AppealRow;
    use crate::data::metrics::format_percent;

    #[test]
    fn sustain_rate_guards_undecided_rows() {
        let decided = AppealRow {
            nationality_code: "GT".to_string(),
            filed: 100,
            sustained: 25,
            dismissed: 75,
        };
        assert_eq!(format_percent(decided.sustain_rate()), "25.0%");

        let undecided = AppealRow {
            nationality_code: "HN".to_string(),
            filed: 10,
            sustained: 0,
            dismissed: 0,
        };
        assert_eq!(undecided.sustain_rate(), None);
    }
}
