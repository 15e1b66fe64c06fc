//! Validate a data directory against the dataset contract.
//! Run: cargo run --bin validate_data [data-root]

use std::env;
use std::path::Path;

use docket::data::loader::DataRoot;
use docket::data::validate::{validate_data_root, ValidationSeverity};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let root_arg = args.get(1).map(String::as_str).unwrap_or("data");
    let root_path = Path::new(root_arg);

    if !root_path.exists() {
        eprintln!("data root not found: {}", root_path.display());
        std::process::exit(1);
    }

    let report = validate_data_root(&DataRoot::new(root_path));
    for diagnostic in &report.diagnostics {
        match diagnostic.severity {
            ValidationSeverity::Error => eprintln!("{diagnostic}"),
            _ => println!("{diagnostic}"),
        }
    }

    let errors = report.count(ValidationSeverity::Error);
    let warnings = report.count(ValidationSeverity::Warning);
    println!(
        "checked {}: {} error(s), {} warning(s), {} info",
        root_path.display(),
        errors,
        warnings,
        report.count(ValidationSeverity::Info)
    );
    if errors > 0 {
        std::process::exit(1);
    }
}
