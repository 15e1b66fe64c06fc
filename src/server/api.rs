//! JSON payload builders, one per analysis page of the site. Each is a pure
//! function of the registry plus whatever topical file its page reads.
//! Payloads carry raw counts, one-decimal numeric rates, and display strings
//! from the shared formatters so every page renders a statistic the same way.

use std::fmt;
use std::time::UNIX_EPOCH;

use chrono::TimeZone;
use serde_json::json;

use crate::data::appeals::load_appeals;
use crate::data::caseload::{load_case_types, load_outcomes, load_yearly_trends};
use crate::data::demographics::{load_gender, load_languages};
use crate::data::encounters::{load_border_encounters, load_drug_seizures};
use crate::data::loader::DataError;
use crate::data::metrics::{format_count, format_percent, percentage, round1};
use crate::data::proceedings::{load_bonds, load_custody, load_wait_times};
use crate::data::rank::{top_n_by_count, top_n_by_rate};
use crate::data::registry::DataRegistry;
use crate::data::stats::STATS_FILE;

pub const DEFAULT_TOP_N: usize = 20;
pub const MAX_TOP_N: usize = 500;

#[derive(Debug)]
pub enum ApiError {
    NotFound(&'static str),
    Data(DataError),
    Json(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(what) => write!(f, "{what}"),
            Self::Data(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        Self::Data(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// One-decimal rate as a JSON number, or null when unavailable.
fn rate_json(rate: Option<f64>) -> serde_json::Value {
    match rate {
        Some(v) => json!(round1(v)),
        None => serde_json::Value::Null,
    }
}

pub fn health_payload() -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(&json!({
        "status": "ok",
        "service": "docket-api",
        "version": env!("CARGO_PKG_VERSION")
    }))?)
}

/// Overview page: the stats summary plus its derived display rates.
pub fn stats_payload(registry: &DataRegistry) -> Result<String, ApiError> {
    let stats = &registry.stats;
    Ok(serde_json::to_string_pretty(&json!({
        "stats": stats,
        "derived": {
            "asylumDecided": stats.asylum_decided(),
            "grantRate": rate_json(stats.grant_rate()),
            "grantRateDisplay": format_percent(stats.grant_rate()),
            "denialRateDisplay": format_percent(stats.denial_rate()),
            "representationRateDisplay": format_percent(stats.representation_rate()),
            "totalCasesDisplay": format_count(stats.total_cases),
            "pendingCasesDisplay": format_count(stats.pending_cases),
            "removalOrdersDisplay": format_count(stats.removal_orders),
        }
    }))?)
}

/// Per-dataset provenance plus the stats file's last-modified time.
pub fn data_version_payload(registry: &DataRegistry) -> Result<String, ApiError> {
    let last_modified_iso: Option<String> = std::fs::metadata(registry.root().join(STATS_FILE))
        .ok()
        .and_then(|m| m.modified().ok())
        .and_then(|t| {
            t.duration_since(UNIX_EPOCH).ok().and_then(|d| {
                chrono::Utc
                    .timestamp_opt(d.as_secs() as i64, d.subsec_nanos())
                    .single()
                    .map(|dt| dt.to_rfc3339())
            })
        });

    Ok(serde_json::to_string_pretty(&json!({
        "stats": {
            "dataVersion": registry.stats.data_version,
            "sourceNote": registry.stats.source_note,
        },
        "nationalityIndex": { "dataVersion": registry.nationality_index.data_version },
        "courtIndex": { "dataVersion": registry.court_index.data_version },
        "judgeIndex": { "dataVersion": registry.judge_index.data_version },
        "statsLastModifiedIso": last_modified_iso,
    }))?)
}

pub fn nationalities_payload(registry: &DataRegistry) -> Result<String, ApiError> {
    let list: Vec<serde_json::Value> = registry
        .nationality_index
        .nationalities
        .iter()
        .map(|entry| {
            json!({
                "code": entry.code,
                "slug": entry.slug,
                "name": entry.name,
                "totalCases": entry.total_cases,
                "totalCasesDisplay": format_count(entry.total_cases),
                "pendingCases": entry.pending_cases,
                "grantRate": rate_json(entry.grant_rate()),
                "grantRateDisplay": format_percent(entry.grant_rate()),
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(
        &json!({ "nationalities": list }),
    )?)
}

pub fn courts_payload(registry: &DataRegistry) -> Result<String, ApiError> {
    let list: Vec<serde_json::Value> = registry
        .court_index
        .courts
        .iter()
        .map(|entry| {
            json!({
                "code": entry.code,
                "slug": entry.slug,
                "name": entry.name,
                "state": entry.state,
                "totalCases": entry.total_cases,
                "totalCasesDisplay": format_count(entry.total_cases),
                "pendingCases": entry.pending_cases,
                "grantRate": rate_json(entry.grant_rate()),
                "grantRateDisplay": format_percent(entry.grant_rate()),
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&json!({ "courts": list }))?)
}

pub fn judges_payload(registry: &DataRegistry) -> Result<String, ApiError> {
    let list: Vec<serde_json::Value> = registry
        .judge_index
        .judges
        .iter()
        .map(|entry| {
            let court = registry.court_by_code(&entry.court_code);
            json!({
                "slug": entry.slug,
                "name": entry.name,
                "courtCode": entry.court_code,
                "court": court.map(|c| c.name.as_str()).unwrap_or(entry.court_code.as_str()),
                "decisions": entry.decisions,
                "grantRate": rate_json(entry.grant_rate()),
                "grantRateDisplay": format_percent(entry.grant_rate()),
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&json!({ "judges": list }))?)
}

pub fn nationality_detail_payload(
    registry: &DataRegistry,
    slug: &str,
) -> Result<String, ApiError> {
    let record = registry
        .resolve_nationality(slug)?
        .ok_or(ApiError::NotFound("Nationality not found"))?;

    let top_courts: Vec<serde_json::Value> = record
        .top_courts
        .iter()
        .map(|related| {
            let court = registry.court_by_code(&related.code);
            json!({
                "code": related.code,
                "name": court.map(|c| c.name.as_str()).unwrap_or(related.code.as_str()),
                "slug": court.map(|c| c.slug.as_str()),
                "cases": related.cases,
                "share": rate_json(percentage(related.cases, record.total_cases)),
            })
        })
        .collect();

    let outcomes: Vec<serde_json::Value> = record
        .outcomes
        .iter()
        .map(|outcome| {
            json!({
                "outcome": outcome.outcome,
                "cases": outcome.cases,
                "share": rate_json(percentage(outcome.cases, record.total_cases)),
                "shareDisplay": format_percent(percentage(outcome.cases, record.total_cases)),
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&json!({
        "nationality": record,
        "derived": {
            "grantRate": rate_json(record.grant_rate()),
            "grantRateDisplay": format_percent(record.grant_rate()),
            "totalCasesDisplay": format_count(record.total_cases),
            "topCourts": top_courts,
            "outcomes": outcomes,
        }
    }))?)
}

pub fn court_detail_payload(registry: &DataRegistry, slug: &str) -> Result<String, ApiError> {
    let record = registry
        .resolve_court(slug)?
        .ok_or(ApiError::NotFound("Court not found"))?;

    let top_nationalities: Vec<serde_json::Value> = record
        .top_nationalities
        .iter()
        .map(|related| {
            let nationality = registry.nationality_by_code(&related.code);
            json!({
                "code": related.code,
                "name": nationality.map(|n| n.name.as_str()).unwrap_or(related.code.as_str()),
                "slug": nationality.map(|n| n.slug.as_str()),
                "cases": related.cases,
                "share": rate_json(percentage(related.cases, record.total_cases)),
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&json!({
        "court": record,
        "derived": {
            "grantRate": rate_json(record.grant_rate()),
            "grantRateDisplay": format_percent(record.grant_rate()),
            "totalCasesDisplay": format_count(record.total_cases),
            "topNationalities": top_nationalities,
        }
    }))?)
}

pub fn judge_detail_payload(registry: &DataRegistry, slug: &str) -> Result<String, ApiError> {
    let record = registry
        .resolve_judge(slug)?
        .ok_or(ApiError::NotFound("Judge not found"))?;

    let court = registry.court_by_code(&record.court_code);
    let yearly: Vec<serde_json::Value> = record
        .yearly
        .iter()
        .map(|year| {
            let rate = percentage(year.granted, year.granted + year.denied);
            json!({
                "fiscalYear": year.fiscal_year,
                "decisions": year.decisions,
                "granted": year.granted,
                "denied": year.denied,
                "grantRate": rate_json(rate),
                "grantRateDisplay": format_percent(rate),
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&json!({
        "judge": record,
        "derived": {
            "court": court.map(|c| c.name.as_str()).unwrap_or(record.court_code.as_str()),
            "courtSlug": court.map(|c| c.slug.as_str()),
            "grantRate": rate_json(record.grant_rate()),
            "grantRateDisplay": format_percent(record.grant_rate()),
            "yearly": yearly,
        }
    }))?)
}

/// Top-N ranking endpoint. Nationalities and courts rank by caseload;
/// judges rank by grant rate (ties keep index order).
pub fn top_payload(registry: &DataRegistry, category: &str, n: usize) -> Result<String, ApiError> {
    let n = n.clamp(1, MAX_TOP_N);
    let rows: Vec<serde_json::Value> = match category {
        "nationalities" => {
            top_n_by_count(&registry.nationality_index.nationalities, n, |e| {
                e.total_cases
            })
            .into_iter()
            .map(|entry| {
                json!({
                    "code": entry.code,
                    "slug": entry.slug,
                    "name": entry.name,
                    "totalCases": entry.total_cases,
                    "totalCasesDisplay": format_count(entry.total_cases),
                })
            })
            .collect()
        }
        "courts" => top_n_by_count(&registry.court_index.courts, n, |e| e.total_cases)
            .into_iter()
            .map(|entry| {
                json!({
                    "code": entry.code,
                    "slug": entry.slug,
                    "name": entry.name,
                    "state": entry.state,
                    "totalCases": entry.total_cases,
                    "totalCasesDisplay": format_count(entry.total_cases),
                })
            })
            .collect(),
        "judges" => top_n_by_rate(&registry.judge_index.judges, n, |e| e.grant_rate())
            .into_iter()
            .map(|entry| {
                json!({
                    "slug": entry.slug,
                    "name": entry.name,
                    "courtCode": entry.court_code,
                    "decisions": entry.decisions,
                    "grantRate": rate_json(entry.grant_rate()),
                    "grantRateDisplay": format_percent(entry.grant_rate()),
                })
            })
            .collect(),
        _ => return Err(ApiError::NotFound("Unknown top category")),
    };

    Ok(serde_json::to_string_pretty(&json!({
        "category": category,
        "n": n,
        "rows": rows,
    }))?)
}

pub fn appeals_payload(registry: &DataRegistry) -> Result<String, ApiError> {
    let table =
        load_appeals(registry.root())?.ok_or(ApiError::NotFound("Appeals data not available"))?;

    let total_filed: u64 = table.rows.iter().map(|r| r.filed).sum();
    let total_sustained: u64 = table.rows.iter().map(|r| r.sustained).sum();
    let total_dismissed: u64 = table.rows.iter().map(|r| r.dismissed).sum();
    let overall_rate = percentage(total_sustained, total_sustained + total_dismissed);

    let rows: Vec<serde_json::Value> = table
        .rows
        .iter()
        .map(|row| {
            let nationality = registry.nationality_by_code(&row.nationality_code);
            json!({
                "nationalityCode": row.nationality_code,
                "nationality": nationality.map(|n| n.name.as_str()).unwrap_or(row.nationality_code.as_str()),
                "slug": nationality.map(|n| n.slug.as_str()),
                "filed": row.filed,
                "sustained": row.sustained,
                "dismissed": row.dismissed,
                "sustainRate": rate_json(row.sustain_rate()),
                "sustainRateDisplay": format_percent(row.sustain_rate()),
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&json!({
        "dataVersion": table.data_version,
        "rows": rows,
        "totals": {
            "filed": total_filed,
            "filedDisplay": format_count(total_filed),
            "sustained": total_sustained,
            "dismissed": total_dismissed,
            "sustainRateDisplay": format_percent(overall_rate),
        }
    }))?)
}

pub fn border_encounters_payload(registry: &DataRegistry) -> Result<String, ApiError> {
    let table = load_border_encounters(registry.root())?
        .ok_or(ApiError::NotFound("Border encounters data not available"))?;

    let total: u64 = table.rows.iter().map(|r| r.encounters).sum();
    let rows: Vec<serde_json::Value> = table
        .rows
        .iter()
        .map(|row| {
            let nationality = registry.nationality_by_code(&row.nationality_code);
            json!({
                "fiscalYear": row.fiscal_year,
                "nationalityCode": row.nationality_code,
                "nationality": nationality.map(|n| n.name.as_str()).unwrap_or(row.nationality_code.as_str()),
                "slug": nationality.map(|n| n.slug.as_str()),
                "encounters": row.encounters,
                "encountersDisplay": format_count(row.encounters),
                "share": rate_json(percentage(row.encounters, total)),
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&json!({
        "dataVersion": table.data_version,
        "rows": rows,
        "totals": { "encounters": total, "encountersDisplay": format_count(total) }
    }))?)
}

pub fn drug_seizures_payload(registry: &DataRegistry) -> Result<String, ApiError> {
    let table = load_drug_seizures(registry.root())?
        .ok_or(ApiError::NotFound("Drug seizures data not available"))?;

    let total_seizures: u64 = table.rows.iter().map(|r| r.seizures).sum();
    let rows: Vec<serde_json::Value> = table
        .rows
        .iter()
        .map(|row| {
            json!({
                "fiscalYear": row.fiscal_year,
                "drug": row.drug,
                "seizures": row.seizures,
                "poundsSeized": row.pounds_seized,
                "share": rate_json(percentage(row.seizures, total_seizures)),
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&json!({
        "dataVersion": table.data_version,
        "rows": rows,
        "totals": { "seizures": total_seizures, "seizuresDisplay": format_count(total_seizures) }
    }))?)
}

pub fn bonds_payload(registry: &DataRegistry) -> Result<String, ApiError> {
    let table =
        load_bonds(registry.root())?.ok_or(ApiError::NotFound("Bond data not available"))?;

    let rows: Vec<serde_json::Value> = table
        .rows
        .iter()
        .map(|row| {
            let court = registry.court_by_code(&row.court_code);
            json!({
                "courtCode": row.court_code,
                "court": court.map(|c| c.name.as_str()).unwrap_or(row.court_code.as_str()),
                "slug": court.map(|c| c.slug.as_str()),
                "bondsGranted": row.bonds_granted,
                "bondsDenied": row.bonds_denied,
                "grantRate": rate_json(row.grant_rate()),
                "grantRateDisplay": format_percent(row.grant_rate()),
                "medianAmount": row.median_amount,
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&json!({
        "dataVersion": table.data_version,
        "rows": rows,
    }))?)
}

/// Wait-times page lists every court, longest median wait first.
pub fn wait_times_payload(registry: &DataRegistry) -> Result<String, ApiError> {
    let table = load_wait_times(registry.root())?
        .ok_or(ApiError::NotFound("Wait time data not available"))?;

    let ranked = top_n_by_rate(&table.rows, table.rows.len(), |row| Some(row.median_days));
    let rows: Vec<serde_json::Value> = ranked
        .into_iter()
        .map(|row| {
            let court = registry.court_by_code(&row.court_code);
            json!({
                "courtCode": row.court_code,
                "court": court.map(|c| c.name.as_str()).unwrap_or(row.court_code.as_str()),
                "slug": court.map(|c| c.slug.as_str()),
                "pendingCases": row.pending_cases,
                "pendingCasesDisplay": format_count(row.pending_cases),
                "medianDays": round1(row.median_days),
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&json!({
        "dataVersion": table.data_version,
        "rows": rows,
    }))?)
}

/// Shared shape for the category-share pages (custody, gender, languages,
/// case types, outcomes): rows plus each row's share of the total.
fn category_share_payload(
    data_version: Option<String>,
    rows: Vec<(String, u64)>,
) -> Result<String, ApiError> {
    let total: u64 = rows.iter().map(|(_, cases)| cases).sum();
    let rows: Vec<serde_json::Value> = rows
        .into_iter()
        .map(|(label, cases)| {
            json!({
                "label": label,
                "cases": cases,
                "casesDisplay": format_count(cases),
                "share": rate_json(percentage(cases, total)),
                "shareDisplay": format_percent(percentage(cases, total)),
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&json!({
        "dataVersion": data_version,
        "rows": rows,
        "totals": { "cases": total, "casesDisplay": format_count(total) }
    }))?)
}

pub fn custody_payload(registry: &DataRegistry) -> Result<String, ApiError> {
    let table =
        load_custody(registry.root())?.ok_or(ApiError::NotFound("Custody data not available"))?;
    category_share_payload(
        table.data_version.clone(),
        table
            .rows
            .into_iter()
            .map(|row| (row.custody, row.cases))
            .collect(),
    )
}

pub fn gender_payload(registry: &DataRegistry) -> Result<String, ApiError> {
    let table =
        load_gender(registry.root())?.ok_or(ApiError::NotFound("Gender data not available"))?;
    category_share_payload(
        table.data_version.clone(),
        table
            .rows
            .into_iter()
            .map(|row| (row.gender, row.cases))
            .collect(),
    )
}

pub fn languages_payload(registry: &DataRegistry) -> Result<String, ApiError> {
    let table = load_languages(registry.root())?
        .ok_or(ApiError::NotFound("Language data not available"))?;
    category_share_payload(
        table.data_version.clone(),
        table
            .rows
            .into_iter()
            .map(|row| (row.language, row.cases))
            .collect(),
    )
}

pub fn case_types_payload(registry: &DataRegistry) -> Result<String, ApiError> {
    let table = load_case_types(registry.root())?
        .ok_or(ApiError::NotFound("Case type data not available"))?;
    category_share_payload(
        table.data_version.clone(),
        table
            .rows
            .into_iter()
            .map(|row| (row.case_type, row.cases))
            .collect(),
    )
}

pub fn outcomes_payload(registry: &DataRegistry) -> Result<String, ApiError> {
    let table =
        load_outcomes(registry.root())?.ok_or(ApiError::NotFound("Outcome data not available"))?;
    category_share_payload(
        table.data_version.clone(),
        table
            .rows
            .into_iter()
            .map(|row| (row.outcome, row.cases))
            .collect(),
    )
}

pub fn yearly_trends_payload(registry: &DataRegistry) -> Result<String, ApiError> {
    let table = load_yearly_trends(registry.root())?
        .ok_or(ApiError::NotFound("Yearly trend data not available"))?;

    let rows: Vec<serde_json::Value> = table
        .rows
        .iter()
        .map(|row| {
            json!({
                "fiscalYear": row.fiscal_year,
                "newCases": row.new_cases,
                "newCasesDisplay": format_count(row.new_cases),
                "completedCases": row.completed_cases,
                "pendingEnd": row.pending_end,
                "pendingEndDisplay": format_count(row.pending_end),
                "clearanceRate": rate_json(row.clearance_rate()),
                "clearanceRateDisplay": format_percent(row.clearance_rate()),
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&json!({
        "dataVersion": table.data_version,
        "rows": rows,
    }))?)
}
