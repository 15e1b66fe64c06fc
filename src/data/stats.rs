//! Aggregate stats summary shown on the overview page. Written by the
//! upstream pipeline; every count here is pre-computed and read-only.

use serde::{Deserialize, Serialize};

use crate::data::loader::{DataError, DataRoot};
use crate::data::metrics;

pub const STATS_FILE: &str = "stats.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub source_note: Option<String>,
    pub total_cases: u64,
    pub pending_cases: u64,
    pub asylum_granted: u64,
    pub asylum_denied: u64,
    pub removal_orders: u64,
    pub judges: u64,
    pub courts: u64,
    pub nationalities: u64,
    pub represented_cases: u64,
}

impl StatsSummary {
    /// Asylum cases with a decision on record.
    pub fn asylum_decided(&self) -> u64 {
        self.asylum_granted + self.asylum_denied
    }

    pub fn grant_rate(&self) -> Option<f64> {
        metrics::percentage(self.asylum_granted, self.asylum_decided())
    }

    pub fn denial_rate(&self) -> Option<f64> {
        metrics::percentage(self.asylum_denied, self.asylum_decided())
    }

    pub fn representation_rate(&self) -> Option<f64> {
        metrics::percentage(self.represented_cases, self.total_cases)
    }
}

pub fn load_stats(root: &DataRoot) -> Result<StatsSummary, DataError> {
    root.read_required(STATS_FILE)
}

#[cfg(test)]
mod tests {
    use super::StatsSummary;
    use crate::data::metrics::format_percent;

    fn summary(granted: u64, denied: u64) -> StatsSummary {
        StatsSummary {
            data_version: None,
            source_note: None,
            total_cases: 3_500_000,
            pending_cases: 1_500_000,
            asylum_granted: granted,
            asylum_denied: denied,
            removal_orders: 1_200_000,
            judges: 600,
            courts: 68,
            nationalities: 120,
            represented_cases: 2_100_000,
        }
    }

    #[test]
    fn grant_rate_renders_one_decimal() {
        let stats = summary(918_787, 2_081_213);
        assert_eq!(stats.asylum_decided(), 3_000_000);
        assert_eq!(format_percent(stats.grant_rate()), "30.6%");
        assert_eq!(format_percent(stats.representation_rate()), "60.0%");
    }

    #[test]
    fn rates_are_unavailable_with_no_decisions() {
        let stats = summary(0, 0);
        assert_eq!(stats.grant_rate(), None);
        assert_eq!(stats.denial_rate(), None);
    }
}
