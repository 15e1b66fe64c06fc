//! On-disk fixture data roots for integration tests. Numbers are chosen so
//! derived rates come out to known one-decimal values.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::json;

pub fn unique_temp_dir(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("docket-{name}-{stamp}"));
    fs::create_dir_all(&dir).expect("temp dir should be created");
    dir
}

pub fn write_json(path: PathBuf, value: serde_json::Value) {
    let payload = serde_json::to_string_pretty(&value).expect("fixture should serialize");
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("fixture dir should be created");
    }
    fs::write(path, payload).expect("fixture should be written");
}

/// Build a complete fixture data root. Notable properties:
/// - stats grant rate is exactly 918,787 / 3,000,000 decided = 30.6%
/// - `mexico` is indexed but has no detail file (not-found case)
/// - judges `amy-adams` and `bruce-baker` share a 50.0% grant rate
/// - appeals contains one row with a code unknown to the index (`XX`)
pub fn fixture_root(name: &str) -> PathBuf {
    let root = unique_temp_dir(name);

    write_json(
        root.join("stats.json"),
        json!({
            "dataVersion": "2025-07",
            "sourceNote": "EOIR case tables, fixture subset",
            "totalCases": 3_500_000_u64,
            "pendingCases": 1_500_000_u64,
            "asylumGranted": 918_787_u64,
            "asylumDenied": 2_081_213_u64,
            "removalOrders": 1_200_000_u64,
            "judges": 4,
            "courts": 2,
            "nationalities": 3,
            "representedCases": 2_100_000_u64
        }),
    );

    write_json(
        root.join("nationality-index.json"),
        json!({
            "dataVersion": "2025-07",
            "nationalities": [
                {
                    "code": "GT", "slug": "guatemala", "name": "Guatemala",
                    "totalCases": 420_000_u64, "pendingCases": 180_000_u64,
                    "asylumGranted": 30_000_u64, "asylumDenied": 90_000_u64
                },
                {
                    "code": "HN", "slug": "honduras", "name": "Honduras",
                    "totalCases": 380_000_u64, "pendingCases": 150_000_u64,
                    "asylumGranted": 24_000_u64, "asylumDenied": 72_000_u64
                },
                {
                    "code": "MX", "slug": "mexico", "name": "Mexico",
                    "totalCases": 610_000_u64, "pendingCases": 200_000_u64,
                    "asylumGranted": 18_000_u64, "asylumDenied": 108_000_u64
                }
            ]
        }),
    );

    write_json(
        root.join("nationalities/guatemala.json"),
        json!({
            "code": "GT", "slug": "guatemala", "name": "Guatemala",
            "totalCases": 420_000_u64, "pendingCases": 180_000_u64,
            "asylumGranted": 30_000_u64, "asylumDenied": 90_000_u64,
            "removalOrders": 140_000_u64,
            "yearly": [
                { "fiscalYear": 2022, "cases": 90_000_u64 },
                { "fiscalYear": 2023, "cases": 150_000_u64 },
                { "fiscalYear": 2024, "cases": 180_000_u64 }
            ],
            "topCourts": [
                { "code": "NYC", "cases": 105_000_u64 },
                { "code": "MIA", "cases": 63_000_u64 }
            ],
            "outcomes": [
                { "outcome": "Removal ordered", "cases": 140_000_u64 },
                { "outcome": "Relief granted", "cases": 30_000_u64 }
            ]
        }),
    );

    write_json(
        root.join("nationalities/honduras.json"),
        json!({
            "code": "HN", "slug": "honduras", "name": "Honduras",
            "totalCases": 380_000_u64, "pendingCases": 150_000_u64,
            "asylumGranted": 24_000_u64, "asylumDenied": 72_000_u64,
            "removalOrders": 120_000_u64,
            "yearly": [
                { "fiscalYear": 2023, "cases": 170_000_u64 },
                { "fiscalYear": 2024, "cases": 210_000_u64 }
            ],
            "topCourts": [ { "code": "MIA", "cases": 88_000_u64 } ],
            "outcomes": []
        }),
    );

    write_json(
        root.join("court-index.json"),
        json!({
            "dataVersion": "2025-07",
            "courts": [
                {
                    "code": "NYC", "slug": "new-york", "name": "New York", "state": "NY",
                    "totalCases": 520_000_u64, "pendingCases": 260_000_u64,
                    "asylumGranted": 60_000_u64, "asylumDenied": 90_000_u64
                },
                {
                    "code": "MIA", "slug": "miami", "name": "Miami", "state": "FL",
                    "totalCases": 410_000_u64, "pendingCases": 210_000_u64,
                    "asylumGranted": 20_000_u64, "asylumDenied": 80_000_u64
                }
            ]
        }),
    );

    write_json(
        root.join("courts/new-york.json"),
        json!({
            "code": "NYC", "slug": "new-york", "name": "New York", "state": "NY",
            "totalCases": 520_000_u64, "pendingCases": 260_000_u64,
            "asylumGranted": 60_000_u64, "asylumDenied": 90_000_u64,
            "medianWaitDays": 602.5,
            "yearly": [
                { "fiscalYear": 2023, "cases": 240_000_u64 },
                { "fiscalYear": 2024, "cases": 280_000_u64 }
            ],
            "topNationalities": [
                { "code": "GT", "cases": 105_000_u64 },
                { "code": "MX", "cases": 98_000_u64 }
            ],
            "outcomes": []
        }),
    );

    write_json(
        root.join("judge-index.json"),
        json!({
            "dataVersion": "2025-07",
            "judges": [
                {
                    "slug": "amy-adams", "name": "Amy Adams", "courtCode": "NYC",
                    "decisions": 200, "asylumGranted": 100, "asylumDenied": 100
                },
                {
                    "slug": "bruce-baker", "name": "Bruce Baker", "courtCode": "NYC",
                    "decisions": 300, "asylumGranted": 150, "asylumDenied": 150
                },
                {
                    "slug": "carla-cruz", "name": "Carla Cruz", "courtCode": "MIA",
                    "decisions": 400, "asylumGranted": 300, "asylumDenied": 100
                },
                {
                    "slug": "dan-ford", "name": "Dan Ford", "courtCode": "MIA",
                    "decisions": 50, "asylumGranted": 0, "asylumDenied": 0
                }
            ]
        }),
    );

    write_json(
        root.join("judges/amy-adams.json"),
        json!({
            "slug": "amy-adams", "name": "Amy Adams", "courtCode": "NYC",
            "decisions": 200, "asylumGranted": 100, "asylumDenied": 100,
            "yearly": [
                { "fiscalYear": 2023, "decisions": 90, "granted": 40, "denied": 50 },
                { "fiscalYear": 2024, "decisions": 110, "granted": 60, "denied": 50 }
            ],
            "topNationalities": [ { "code": "GT", "cases": 70 } ]
        }),
    );

    write_json(
        root.join("appeals.json"),
        json!({
            "dataVersion": "2025-07",
            "rows": [
                { "nationalityCode": "GT", "filed": 1_000, "sustained": 250, "dismissed": 750 },
                { "nationalityCode": "HN", "filed": 800, "sustained": 120, "dismissed": 680 },
                { "nationalityCode": "XX", "filed": 40, "sustained": 0, "dismissed": 40 }
            ]
        }),
    );

    write_json(
        root.join("border-encounters.json"),
        json!({
            "dataVersion": "2025-07",
            "rows": [
                { "fiscalYear": 2023, "nationalityCode": "GT", "encounters": 220_000_u64 },
                { "fiscalYear": 2024, "nationalityCode": "GT", "encounters": 180_000_u64 },
                { "fiscalYear": 2024, "nationalityCode": "HN", "encounters": 160_000_u64 }
            ]
        }),
    );

    write_json(
        root.join("drug-seizures.json"),
        json!({
            "rows": [
                { "fiscalYear": 2024, "drug": "Fentanyl", "seizures": 21_000_u64, "poundsSeized": 27_000.5 },
                { "fiscalYear": 2024, "drug": "Methamphetamine", "seizures": 14_000_u64, "poundsSeized": 140_000.0 }
            ]
        }),
    );

    write_json(
        root.join("bonds.json"),
        json!({
            "rows": [
                { "courtCode": "NYC", "bondsGranted": 3_200, "bondsDenied": 4_800, "medianAmount": 7_500.0 },
                { "courtCode": "MIA", "bondsGranted": 1_500, "bondsDenied": 3_500, "medianAmount": 9_000.0 }
            ]
        }),
    );

    write_json(
        root.join("wait-times.json"),
        json!({
            "rows": [
                { "courtCode": "MIA", "pendingCases": 210_000_u64, "medianDays": 420.0 },
                { "courtCode": "NYC", "pendingCases": 260_000_u64, "medianDays": 602.5 }
            ]
        }),
    );

    write_json(
        root.join("custody.json"),
        json!({
            "rows": [
                { "custody": "Detained", "cases": 400_000_u64 },
                { "custody": "Released", "cases": 900_000_u64 },
                { "custody": "Never detained", "cases": 2_200_000_u64 }
            ]
        }),
    );

    write_json(
        root.join("gender.json"),
        json!({
            "rows": [
                { "gender": "Female", "cases": 1_400_000_u64 },
                { "gender": "Male", "cases": 2_100_000_u64 }
            ]
        }),
    );

    write_json(
        root.join("languages.json"),
        json!({
            "rows": [
                { "language": "Spanish", "cases": 2_450_000_u64 },
                { "language": "Mam", "cases": 105_000_u64 },
                { "language": "English", "cases": 350_000_u64 }
            ]
        }),
    );

    write_json(
        root.join("case-types.json"),
        json!({
            "rows": [
                { "caseType": "Removal", "cases": 3_150_000_u64 },
                { "caseType": "Credible fear review", "cases": 245_000_u64 },
                { "caseType": "Other", "cases": 105_000_u64 }
            ]
        }),
    );

    write_json(
        root.join("outcomes.json"),
        json!({
            "rows": [
                { "outcome": "Removal ordered", "cases": 1_200_000_u64 },
                { "outcome": "Relief granted", "cases": 918_787_u64 },
                { "outcome": "Terminated", "cases": 560_000_u64 }
            ]
        }),
    );

    write_json(
        root.join("yearly-trends.json"),
        json!({
            "rows": [
                { "fiscalYear": 2022, "newCases": 700_000_u64, "completedCases": 420_000_u64, "pendingEnd": 1_100_000_u64 },
                { "fiscalYear": 2023, "newCases": 840_000_u64, "completedCases": 510_000_u64, "pendingEnd": 1_300_000_u64 },
                { "fiscalYear": 2024, "newCases": 910_000_u64, "completedCases": 640_000_u64, "pendingEnd": 1_500_000_u64 }
            ]
        }),
    );

    root
}

pub fn cleanup(root: &PathBuf) {
    let _ = fs::remove_dir_all(root);
}
