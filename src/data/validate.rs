//! Validate a data root against the file contract: required files parse,
//! codes and slugs are unique, detail records agree with their index
//! entries, and topical rows reference codes the indexes know about.

use std::collections::HashSet;
use std::fmt;

use rayon::prelude::*;

use crate::data::appeals::load_appeals;
use crate::data::caseload::load_yearly_trends;
use crate::data::court::{load_court_index, load_court_record, CourtIndex};
use crate::data::encounters::load_border_encounters;
use crate::data::judge::{load_judge_index, load_judge_record, JudgeIndex};
use crate::data::loader::{DataError, DataRoot};
use crate::data::nationality::{
    load_nationality_index, load_nationality_record, NationalityIndex,
};
use crate::data::proceedings::{load_bonds, load_wait_times};
use crate::data::stats::load_stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn extend(&mut self, other: ValidationReport) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }
}

const FISCAL_YEAR_RANGE: std::ops::RangeInclusive<u16> = 1980..=2100;

/// Validate everything under the root. Load failures become diagnostics
/// rather than early returns so one broken file doesn't hide the rest.
pub fn validate_data_root(root: &DataRoot) -> ValidationReport {
    let mut report = ValidationReport::default();

    validate_stats(root, &mut report);

    let nationality_index = load_index(
        load_nationality_index(root),
        "nationality-index",
        &mut report,
    );
    let court_index = load_index(load_court_index(root), "court-index", &mut report);
    let judge_index = load_index(load_judge_index(root), "judge-index", &mut report);

    if let Some(index) = &nationality_index {
        validate_nationality_index(index, &mut report);
        report.extend(validate_nationality_details(root, index));
    }
    if let Some(index) = &court_index {
        validate_court_index(index, &mut report);
        report.extend(validate_court_details(root, index));
    }
    if let Some(index) = &judge_index {
        validate_judge_index(index, court_index.as_ref(), &mut report);
        report.extend(validate_judge_details(root, index));
    }

    validate_topical_tables(
        root,
        nationality_index.as_ref(),
        court_index.as_ref(),
        &mut report,
    );

    report
}

fn load_index<T>(
    result: Result<T, DataError>,
    context: &str,
    report: &mut ValidationReport,
) -> Option<T> {
    match result {
        Ok(index) => Some(index),
        Err(err) => {
            report.push(ValidationSeverity::Error, context, err.to_string());
            None
        }
    }
}

fn validate_stats(root: &DataRoot, report: &mut ValidationReport) {
    let stats = match load_stats(root) {
        Ok(stats) => stats,
        Err(err) => {
            report.push(ValidationSeverity::Error, "stats", err.to_string());
            return;
        }
    };

    if stats.pending_cases > stats.total_cases {
        report.push(
            ValidationSeverity::Warning,
            "stats.pendingCases",
            format!(
                "pending ({}) exceeds total cases ({})",
                stats.pending_cases, stats.total_cases
            ),
        );
    }
    if stats.asylum_decided() > stats.total_cases {
        report.push(
            ValidationSeverity::Warning,
            "stats.asylumGranted",
            "asylum decisions exceed total cases",
        );
    }
    if stats.represented_cases > stats.total_cases {
        report.push(
            ValidationSeverity::Warning,
            "stats.representedCases",
            "represented cases exceed total cases",
        );
    }
}

fn check_key(
    report: &mut ValidationReport,
    seen: &mut HashSet<String>,
    context: String,
    label: &str,
    value: &str,
) {
    if value.trim().is_empty() {
        report.push(
            ValidationSeverity::Error,
            context,
            format!("missing non-empty '{label}'"),
        );
        return;
    }
    if !seen.insert(value.to_string()) {
        report.push(
            ValidationSeverity::Error,
            context,
            format!("duplicate {label} '{value}'"),
        );
    }
}

fn validate_nationality_index(index: &NationalityIndex, report: &mut ValidationReport) {
    let mut seen_codes = HashSet::new();
    let mut seen_slugs = HashSet::new();
    for (i, entry) in index.nationalities.iter().enumerate() {
        let context = format!("nationality-index[{i}]");
        check_key(report, &mut seen_codes, format!("{context}.code"), "code", &entry.code);
        check_key(report, &mut seen_slugs, format!("{context}.slug"), "slug", &entry.slug);
        if entry.name.trim().is_empty() {
            report.push(
                ValidationSeverity::Error,
                format!("{context}.name"),
                "missing non-empty 'name'",
            );
        }
        if entry.asylum_decided() > entry.total_cases {
            report.push(
                ValidationSeverity::Warning,
                context,
                "asylum decisions exceed total cases",
            );
        }
    }
}

fn validate_court_index(index: &CourtIndex, report: &mut ValidationReport) {
    let mut seen_codes = HashSet::new();
    let mut seen_slugs = HashSet::new();
    for (i, entry) in index.courts.iter().enumerate() {
        let context = format!("court-index[{i}]");
        check_key(report, &mut seen_codes, format!("{context}.code"), "code", &entry.code);
        check_key(report, &mut seen_slugs, format!("{context}.slug"), "slug", &entry.slug);
        if entry.name.trim().is_empty() {
            report.push(
                ValidationSeverity::Error,
                format!("{context}.name"),
                "missing non-empty 'name'",
            );
        }
    }
}

fn validate_judge_index(
    index: &JudgeIndex,
    courts: Option<&CourtIndex>,
    report: &mut ValidationReport,
) {
    let known_courts: Option<HashSet<&str>> =
        courts.map(|c| c.courts.iter().map(|e| e.code.as_str()).collect());

    let mut seen_slugs = HashSet::new();
    for (i, entry) in index.judges.iter().enumerate() {
        let context = format!("judge-index[{i}]");
        check_key(report, &mut seen_slugs, format!("{context}.slug"), "slug", &entry.slug);
        if entry.name.trim().is_empty() {
            report.push(
                ValidationSeverity::Error,
                format!("{context}.name"),
                "missing non-empty 'name'",
            );
        }
        if let Some(known) = &known_courts {
            if !known.contains(entry.court_code.as_str()) {
                report.push(
                    ValidationSeverity::Warning,
                    format!("{context}.courtCode"),
                    format!("unknown court code '{}'", entry.court_code),
                );
            }
        }
        if entry.asylum_granted + entry.asylum_denied > entry.decisions {
            report.push(
                ValidationSeverity::Warning,
                context,
                "asylum decisions exceed total decisions",
            );
        }
    }
}

fn check_fiscal_years(
    report: &mut ValidationReport,
    context: &str,
    years: impl Iterator<Item = u16>,
) {
    for year in years {
        if !FISCAL_YEAR_RANGE.contains(&year) {
            report.push(
                ValidationSeverity::Warning,
                context.to_string(),
                format!("implausible fiscal year {year}"),
            );
        }
    }
}

/// Detail files are independent, so they are checked in parallel and the
/// per-entity reports merged afterwards.
fn validate_nationality_details(root: &DataRoot, index: &NationalityIndex) -> ValidationReport {
    let mut merged = ValidationReport::default();
    let reports: Vec<ValidationReport> = index
        .nationalities
        .par_iter()
        .map(|entry| {
            let mut report = ValidationReport::default();
            let context = format!("nationalities/{}", entry.slug);
            match load_nationality_record(root, &entry.slug) {
                Ok(Some(record)) => {
                    if record.code != entry.code {
                        report.push(
                            ValidationSeverity::Error,
                            context.clone(),
                            format!(
                                "detail code '{}' disagrees with index code '{}'",
                                record.code, entry.code
                            ),
                        );
                    }
                    if record.slug != entry.slug {
                        report.push(
                            ValidationSeverity::Error,
                            context.clone(),
                            format!("detail slug '{}' disagrees with file slug", record.slug),
                        );
                    }
                    check_fiscal_years(
                        &mut report,
                        &context,
                        record.yearly.iter().map(|y| y.fiscal_year),
                    );
                }
                Ok(None) => {
                    report.push(
                        ValidationSeverity::Info,
                        context,
                        "no detail file (entity has no page)",
                    );
                }
                Err(err) => {
                    report.push(ValidationSeverity::Error, context, err.to_string());
                }
            }
            report
        })
        .collect();
    for report in reports {
        merged.extend(report);
    }
    merged
}

fn validate_court_details(root: &DataRoot, index: &CourtIndex) -> ValidationReport {
    let mut merged = ValidationReport::default();
    let reports: Vec<ValidationReport> = index
        .courts
        .par_iter()
        .map(|entry| {
            let mut report = ValidationReport::default();
            let context = format!("courts/{}", entry.slug);
            match load_court_record(root, &entry.slug) {
                Ok(Some(record)) => {
                    if record.code != entry.code {
                        report.push(
                            ValidationSeverity::Error,
                            context.clone(),
                            format!(
                                "detail code '{}' disagrees with index code '{}'",
                                record.code, entry.code
                            ),
                        );
                    }
                    check_fiscal_years(
                        &mut report,
                        &context,
                        record.yearly.iter().map(|y| y.fiscal_year),
                    );
                }
                Ok(None) => {
                    report.push(
                        ValidationSeverity::Info,
                        context,
                        "no detail file (entity has no page)",
                    );
                }
                Err(err) => {
                    report.push(ValidationSeverity::Error, context, err.to_string());
                }
            }
            report
        })
        .collect();
    for report in reports {
        merged.extend(report);
    }
    merged
}

fn validate_judge_details(root: &DataRoot, index: &JudgeIndex) -> ValidationReport {
    let mut merged = ValidationReport::default();
    let reports: Vec<ValidationReport> = index
        .judges
        .par_iter()
        .map(|entry| {
            let mut report = ValidationReport::default();
            let context = format!("judges/{}", entry.slug);
            match load_judge_record(root, &entry.slug) {
                Ok(Some(record)) => {
                    if record.slug != entry.slug {
                        report.push(
                            ValidationSeverity::Error,
                            context.clone(),
                            format!("detail slug '{}' disagrees with file slug", record.slug),
                        );
                    }
                    check_fiscal_years(
                        &mut report,
                        &context,
                        record.yearly.iter().map(|y| y.fiscal_year),
                    );
                }
                Ok(None) => {
                    report.push(
                        ValidationSeverity::Info,
                        context,
                        "no detail file (entity has no page)",
                    );
                }
                Err(err) => {
                    report.push(ValidationSeverity::Error, context, err.to_string());
                }
            }
            report
        })
        .collect();
    for report in reports {
        merged.extend(report);
    }
    merged
}

fn validate_topical_tables(
    root: &DataRoot,
    nationalities: Option<&NationalityIndex>,
    courts: Option<&CourtIndex>,
    report: &mut ValidationReport,
) {
    let known_nationalities: Option<HashSet<&str>> =
        nationalities.map(|n| n.nationalities.iter().map(|e| e.code.as_str()).collect());
    let known_courts: Option<HashSet<&str>> =
        courts.map(|c| c.courts.iter().map(|e| e.code.as_str()).collect());

    match load_appeals(root) {
        Ok(Some(table)) => {
            for (i, row) in table.rows.iter().enumerate() {
                check_code_reference(
                    report,
                    format!("appeals[{i}].nationalityCode"),
                    &row.nationality_code,
                    known_nationalities.as_ref(),
                );
            }
        }
        Ok(None) => {}
        Err(err) => report.push(ValidationSeverity::Error, "appeals", err.to_string()),
    }

    match load_border_encounters(root) {
        Ok(Some(table)) => {
            for (i, row) in table.rows.iter().enumerate() {
                let context = format!("border-encounters[{i}]");
                check_code_reference(
                    report,
                    format!("{context}.nationalityCode"),
                    &row.nationality_code,
                    known_nationalities.as_ref(),
                );
                check_fiscal_years(report, &context, std::iter::once(row.fiscal_year));
            }
        }
        Ok(None) => {}
        Err(err) => report.push(
            ValidationSeverity::Error,
            "border-encounters",
            err.to_string(),
        ),
    }

    match load_bonds(root) {
        Ok(Some(table)) => {
            for (i, row) in table.rows.iter().enumerate() {
                check_code_reference(
                    report,
                    format!("bonds[{i}].courtCode"),
                    &row.court_code,
                    known_courts.as_ref(),
                );
            }
        }
        Ok(None) => {}
        Err(err) => report.push(ValidationSeverity::Error, "bonds", err.to_string()),
    }

    match load_wait_times(root) {
        Ok(Some(table)) => {
            for (i, row) in table.rows.iter().enumerate() {
                check_code_reference(
                    report,
                    format!("wait-times[{i}].courtCode"),
                    &row.court_code,
                    known_courts.as_ref(),
                );
            }
        }
        Ok(None) => {}
        Err(err) => report.push(ValidationSeverity::Error, "wait-times", err.to_string()),
    }

    match load_yearly_trends(root) {
        Ok(Some(table)) => {
            let context = "yearly-trends";
            check_fiscal_years(report, context, table.rows.iter().map(|r| r.fiscal_year));
        }
        Ok(None) => {}
        Err(err) => report.push(ValidationSeverity::Error, "yearly-trends", err.to_string()),
    }
}

fn check_code_reference(
    report: &mut ValidationReport,
    context: String,
    code: &str,
    known: Option<&HashSet<&str>>,
) {
    if code.trim().is_empty() {
        report.push(ValidationSeverity::Error, context, "missing non-empty code");
        return;
    }
    if let Some(known) = known {
        if !known.contains(code) {
            report.push(
                ValidationSeverity::Warning,
                context,
                format!("code '{code}' not present in index (rendered without a link)"),
            );
        }
    }
}
