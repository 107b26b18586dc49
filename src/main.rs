use anyhow::Context;
use std::fs;

mod domain;
mod services;

use domain::constants::{default_path, locale_path, report_path, LOCALES};
use domain::models::LocaleReport;
use services::parser::parse_resource;
use services::reconcile::reconcile;
use services::report::build_report;

fn main() -> anyhow::Result<()> {
    let default_file = default_path();
    let default_text = fs::read_to_string(&default_file)
        .with_context(|| format!("read default resource file {}", default_file.display()))?;
    let default = parse_resource(&default_text);
    println!("Default keys: {}", default.key_count());

    let mut locale_reports = Vec::new();
    for locale in LOCALES {
        let path = locale_path(locale);
        let locale_text = fs::read_to_string(&path)
            .with_context(|| format!("read locale resource file {}", path.display()))?;
        let parsed = parse_resource(&locale_text);
        println!();
        println!("{locale}: {} keys before fix", parsed.key_count());

        let (new_text, result) = reconcile(&default, &parsed);
        fs::write(&path, &new_text)
            .with_context(|| format!("write locale resource file {}", path.display()))?;

        println!("  +{} missing added", result.missing_added.len());
        println!("  -{} orphaned removed", result.orphaned_removed.len());
        println!("  ={} identical to default", result.identical_values.len());
        println!(
            "  !{} placeholder mismatches",
            result.placeholder_mismatches.len()
        );
        println!("  Final: {} keys", result.final_key_count);

        locale_reports.push(LocaleReport {
            locale: locale.to_string(),
            path,
            result,
        });
    }

    let report = build_report(&default_file, &default, &locale_reports);
    let report_file = report_path();
    fs::write(&report_file, report)
        .with_context(|| format!("write report {}", report_file.display()))?;
    println!();
    println!("Report written to {}", report_file.display());
    Ok(())
}
