//! CSV rendering of the index and topical tables, backing the site's
//! "download the data" links and the `export` subcommand.
//!
//! Derived rate columns carry the one-decimal numeric value; unavailable
//! rates are left as empty cells rather than a sentinel string.

use std::fmt;

use csv::Writer;

use crate::data::appeals::load_appeals;
use crate::data::encounters::load_border_encounters;
use crate::data::loader::DataError;
use crate::data::metrics;
use crate::data::proceedings::load_wait_times;
use crate::data::registry::DataRegistry;

/// Tables accepted by `export_table`.
pub const EXPORT_TABLES: &[&str] = &[
    "nationalities",
    "courts",
    "judges",
    "appeals",
    "border-encounters",
    "wait-times",
];

#[derive(Debug)]
pub enum ExportError {
    UnknownTable(String),
    NotAvailable(&'static str),
    Data(DataError),
    Csv(csv::Error),
    Utf8(std::string::FromUtf8Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTable(name) => write!(f, "unknown export table '{name}'"),
            Self::NotAvailable(name) => write!(f, "dataset '{name}' not available"),
            Self::Data(err) => write!(f, "{err}"),
            Self::Csv(err) => write!(f, "csv error: {err}"),
            Self::Utf8(err) => write!(f, "csv output was not utf-8: {err}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<DataError> for ExportError {
    fn from(err: DataError) -> Self {
        Self::Data(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

fn rate_cell(rate: Option<f64>) -> String {
    match rate {
        Some(v) => format!("{:.1}", metrics::round1(v)),
        None => String::new(),
    }
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Csv(err.into_error().into()))?;
    String::from_utf8(bytes).map_err(ExportError::Utf8)
}

/// Render one named table as CSV.
pub fn export_table(registry: &DataRegistry, table: &str) -> Result<String, ExportError> {
    match table {
        "nationalities" => nationalities_csv(registry),
        "courts" => courts_csv(registry),
        "judges" => judges_csv(registry),
        "appeals" => appeals_csv(registry),
        "border-encounters" => border_encounters_csv(registry),
        "wait-times" => wait_times_csv(registry),
        other => Err(ExportError::UnknownTable(other.to_string())),
    }
}

fn nationalities_csv(registry: &DataRegistry) -> Result<String, ExportError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record([
        "code",
        "slug",
        "name",
        "totalCases",
        "pendingCases",
        "asylumGranted",
        "asylumDenied",
        "grantRate",
    ])?;
    for entry in &registry.nationality_index.nationalities {
        writer.write_record([
            entry.code.clone(),
            entry.slug.clone(),
            entry.name.clone(),
            entry.total_cases.to_string(),
            entry.pending_cases.to_string(),
            entry.asylum_granted.to_string(),
            entry.asylum_denied.to_string(),
            rate_cell(entry.grant_rate()),
        ])?;
    }
    finish(writer)
}

fn courts_csv(registry: &DataRegistry) -> Result<String, ExportError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record([
        "code",
        "slug",
        "name",
        "state",
        "totalCases",
        "pendingCases",
        "asylumGranted",
        "asylumDenied",
        "grantRate",
    ])?;
    for entry in &registry.court_index.courts {
        writer.write_record([
            entry.code.clone(),
            entry.slug.clone(),
            entry.name.clone(),
            entry.state.clone(),
            entry.total_cases.to_string(),
            entry.pending_cases.to_string(),
            entry.asylum_granted.to_string(),
            entry.asylum_denied.to_string(),
            rate_cell(entry.grant_rate()),
        ])?;
    }
    finish(writer)
}

fn judges_csv(registry: &DataRegistry) -> Result<String, ExportError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record([
        "slug",
        "name",
        "courtCode",
        "decisions",
        "asylumGranted",
        "asylumDenied",
        "grantRate",
    ])?;
    for entry in &registry.judge_index.judges {
        writer.write_record([
            entry.slug.clone(),
            entry.name.clone(),
            entry.court_code.clone(),
            entry.decisions.to_string(),
            entry.asylum_granted.to_string(),
            entry.asylum_denied.to_string(),
            rate_cell(entry.grant_rate()),
        ])?;
    }
    finish(writer)
}

fn appeals_csv(registry: &DataRegistry) -> Result<String, ExportError> {
    let table = load_appeals(registry.root())?.ok_or(ExportError::NotAvailable("appeals"))?;
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record([
        "nationalityCode",
        "nationality",
        "filed",
        "sustained",
        "dismissed",
        "sustainRate",
    ])?;
    for row in &table.rows {
        let name = registry
            .nationality_by_code(&row.nationality_code)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| row.nationality_code.clone());
        writer.write_record([
            row.nationality_code.clone(),
            name,
            row.filed.to_string(),
            row.sustained.to_string(),
            row.dismissed.to_string(),
            rate_cell(row.sustain_rate()),
        ])?;
    }
    finish(writer)
}

fn border_encounters_csv(registry: &DataRegistry) -> Result<String, ExportError> {
    let table = load_border_encounters(registry.root())?
        .ok_or(ExportError::NotAvailable("border-encounters"))?;
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(["fiscalYear", "nationalityCode", "nationality", "encounters"])?;
    for row in &table.rows {
        let name = registry
            .nationality_by_code(&row.nationality_code)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| row.nationality_code.clone());
        writer.write_record([
            row.fiscal_year.to_string(),
            row.nationality_code.clone(),
            name,
            row.encounters.to_string(),
        ])?;
    }
    finish(writer)
}

fn wait_times_csv(registry: &DataRegistry) -> Result<String, ExportError> {
    let table =
        load_wait_times(registry.root())?.ok_or(ExportError::NotAvailable("wait-times"))?;
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(["courtCode", "court", "pendingCases", "medianDays"])?;
    for row in &table.rows {
        let name = registry
            .court_by_code(&row.court_code)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| row.court_code.clone());
        writer.write_record([
            row.court_code.clone(),
            name,
            row.pending_cases.to_string(),
            format!("{:.1}", row.median_days),
        ])?;
    }
    finish(writer)
}
