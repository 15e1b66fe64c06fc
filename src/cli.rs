use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::data::export_csv::{export_table, EXPORT_TABLES};
use crate::data::loader::DataRoot;
use crate::data::metrics::{format_count, format_percent};
use crate::data::rank::{top_n_by_count, top_n_by_rate};
use crate::data::registry::DataRegistry;
use crate::data::validate::{validate_data_root, ValidationSeverity};
use crate::server;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Validate,
    Stats,
    Top,
    Export,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("validate") => Some(Command::Validate),
        Some("stats") => Some(Command::Stats),
        Some("top") => Some(Command::Top),
        Some("export") => Some(Command::Export),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Validate) => handle_validate(args),
        Some(Command::Stats) => handle_stats(args),
        Some(Command::Top) => handle_top(args),
        Some(Command::Export) => handle_export(args),
        None => {
            eprintln!("usage: docket <serve|validate|stats|top|export>");
            2
        }
    }
}

/// Data root precedence: explicit CLI argument, then DOCKET_DATA_ROOT /
/// docket.yaml, then the built-in default.
fn resolve_root(explicit: Option<&String>) -> Result<DataRoot, i32> {
    if let Some(path) = explicit {
        return Ok(DataRoot::new(PathBuf::from(path)));
    }
    match SiteConfig::load() {
        Ok(config) => Ok(DataRoot::new(config.data_root)),
        Err(err) => {
            eprintln!("config error: {err}");
            Err(1)
        }
    }
}

fn handle_serve() -> i32 {
    let config = match SiteConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return 1;
        }
    };

    let registry = match DataRegistry::load(DataRoot::new(config.data_root.clone())) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("failed to load data: {err}");
            return 1;
        }
    };

    match server::run_server(&config.bind, registry) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let root = match resolve_root(args.get(2)) {
        Ok(root) => root,
        Err(code) => return code,
    };

    let report = validate_data_root(&root);
    for diagnostic in &report.diagnostics {
        match diagnostic.severity {
            ValidationSeverity::Error => eprintln!("{diagnostic}"),
            _ => println!("{diagnostic}"),
        }
    }

    let errors = report.count(ValidationSeverity::Error);
    let warnings = report.count(ValidationSeverity::Warning);
    if errors > 0 {
        eprintln!("validation failed: {errors} error(s), {warnings} warning(s)");
        1
    } else {
        println!(
            "validation passed: {warnings} warning(s), {} info",
            report.count(ValidationSeverity::Info)
        );
        0
    }
}

fn handle_stats(args: &[String]) -> i32 {
    let root = match resolve_root(args.get(2)) {
        Ok(root) => root,
        Err(code) => return code,
    };

    let registry = match DataRegistry::load(root) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("failed to load data: {err}");
            return 1;
        }
    };

    let stats = &registry.stats;
    println!("Total cases:          {}", format_count(stats.total_cases));
    println!("Pending cases:        {}", format_count(stats.pending_cases));
    println!("Removal orders:       {}", format_count(stats.removal_orders));
    println!("Asylum decided:       {}", format_count(stats.asylum_decided()));
    println!("Asylum grant rate:    {}", format_percent(stats.grant_rate()));
    println!(
        "Representation rate:  {}",
        format_percent(stats.representation_rate())
    );
    println!(
        "Coverage:             {} nationalities, {} courts, {} judges",
        stats.nationalities, stats.courts, stats.judges
    );
    0
}

fn handle_top(args: &[String]) -> i32 {
    let Some(category) = args.get(2).map(String::as_str) else {
        eprintln!("usage: docket top <nationalities|courts|judges> [n] [data-root]");
        return 2;
    };
    let config = match SiteConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return 1;
        }
    };
    let n = parse_usize_arg(args.get(3), "n", config.top_n);
    let root = match args.get(4) {
        Some(path) => DataRoot::new(PathBuf::from(path)),
        None => DataRoot::new(config.data_root),
    };

    let registry = match DataRegistry::load(root) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("failed to load data: {err}");
            return 1;
        }
    };

    match category {
        "nationalities" => {
            println!("rank\tcode\tname\ttotal_cases");
            let top = top_n_by_count(&registry.nationality_index.nationalities, n, |e| {
                e.total_cases
            });
            for (i, entry) in top.iter().enumerate() {
                println!(
                    "{}\t{}\t{}\t{}",
                    i + 1,
                    entry.code,
                    entry.name,
                    entry.total_cases
                );
            }
            0
        }
        "courts" => {
            println!("rank\tcode\tname\tstate\ttotal_cases");
            let top = top_n_by_count(&registry.court_index.courts, n, |e| e.total_cases);
            for (i, entry) in top.iter().enumerate() {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    i + 1,
                    entry.code,
                    entry.name,
                    entry.state,
                    entry.total_cases
                );
            }
            0
        }
        "judges" => {
            println!("rank\tname\tcourt\tdecisions\tgrant_rate");
            let top = top_n_by_rate(&registry.judge_index.judges, n, |e| e.grant_rate());
            for (i, entry) in top.iter().enumerate() {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    i + 1,
                    entry.name,
                    entry.court_code,
                    entry.decisions,
                    format_percent(entry.grant_rate())
                );
            }
            0
        }
        other => {
            eprintln!("unknown top category '{other}' (expected nationalities, courts, or judges)");
            2
        }
    }
}

fn handle_export(args: &[String]) -> i32 {
    let Some(table) = args.get(2) else {
        eprintln!("usage: docket export <{}> [data-root]", EXPORT_TABLES.join("|"));
        return 2;
    };
    let root = match resolve_root(args.get(3)) {
        Ok(root) => root,
        Err(code) => return code,
    };

    let registry = match DataRegistry::load(root) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("failed to load data: {err}");
            return 1;
        }
    };

    match export_table(&registry, table) {
        Ok(csv) => {
            print!("{csv}");
            0
        }
        Err(err) => {
            eprintln!("export failed: {err}");
            1
        }
    }
}

fn parse_usize_arg(raw: Option<&String>, name: &str, default: usize) -> usize {
    raw.and_then(|value| value.parse::<usize>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}
