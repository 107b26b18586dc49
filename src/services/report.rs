use crate::domain::models::{LocaleReport, ResourceFile};
use crate::services::placeholders::placeholder_sig;
use chrono::Utc;
use std::path::Path;

/// Assemble the markdown audit report: scope, per-locale metric tables with
/// itemized findings, and a cross-locale totals table.
pub fn build_report(
    default_path: &Path,
    default: &ResourceFile,
    locales: &[LocaleReport],
) -> String {
    let now = Utc::now().format("%Y-%m-%d %H:%M:%SZ");
    let mut lines: Vec<String> = Vec::new();

    lines.push("# i18n Audit Report".to_string());
    lines.push(String::new());
    lines.push(format!("Generated: {now}"));
    lines.push(String::new());
    lines.push("## Scope".to_string());
    lines.push(String::new());
    lines.push(format!("- Default file: `{}`", default_path.display()));
    for entry in locales {
        lines.push(format!(
            "- Locale `{}`: `{}`",
            entry.locale,
            entry.path.display()
        ));
    }
    lines.push(String::new());
    lines.push("## Default Key Summary".to_string());
    lines.push(String::new());
    lines.push(format!("- Total default keys: **{}**", default.key_count()));
    lines.push(String::new());

    let mut total_missing = 0;
    let mut total_orphaned = 0;
    let mut total_identical = 0;
    let mut total_mismatched = 0;

    for entry in locales {
        let r = &entry.result;
        total_missing += r.missing_added.len();
        total_orphaned += r.orphaned_removed.len();
        total_identical += r.identical_values.len();
        total_mismatched += r.placeholder_mismatches.len();

        lines.push(format!("## Locale: `{}`", entry.locale));
        lines.push(String::new());
        lines.push("| Metric | Count |".to_string());
        lines.push("|--------|-------|".to_string());
        lines.push(format!(
            "| Missing keys added | **{}** |",
            r.missing_added.len()
        ));
        lines.push(format!(
            "| Orphaned keys removed | **{}** |",
            r.orphaned_removed.len()
        ));
        lines.push(format!(
            "| Identical to default (possible untranslated) | **{}** |",
            r.identical_values.len()
        ));
        lines.push(format!(
            "| Placeholder mismatches | **{}** |",
            r.placeholder_mismatches.len()
        ));
        lines.push(format!("| Final key count | **{}** |", r.final_key_count));
        lines.push(String::new());

        if !r.missing_added.is_empty() {
            lines.push("### Missing keys added (default-language placeholder)".to_string());
            lines.push(String::new());
            for key in &r.missing_added {
                lines.push(format!("- `{key}`"));
            }
            lines.push(String::new());
        }

        if !r.orphaned_removed.is_empty() {
            lines.push("### Orphaned keys removed".to_string());
            lines.push(String::new());
            for key in &r.orphaned_removed {
                lines.push(format!("- `{key}`"));
            }
            lines.push(String::new());
        }

        if !r.identical_values.is_empty() {
            lines.push("### Possibly untranslated (value identical to default)".to_string());
            lines.push(String::new());
            for key in &r.identical_values {
                lines.push(format!("- `{key}`"));
            }
            lines.push(String::new());
        }

        if !r.placeholder_mismatches.is_empty() {
            lines.push("### Placeholder mismatches".to_string());
            lines.push(String::new());
            for key in &r.placeholder_mismatches {
                let sig = default
                    .records
                    .get(key)
                    .map(|record| placeholder_sig(&record.value))
                    .unwrap_or_default();
                lines.push(format!("- `{key}`: default has `{sig:?}`, locale differs"));
            }
            lines.push(String::new());
        }
    }

    lines.push("## Summary".to_string());
    lines.push(String::new());
    lines.push("| Metric | Total across all locales |".to_string());
    lines.push("|--------|------------------------|".to_string());
    lines.push(format!("| Missing keys added | **{total_missing}** |"));
    lines.push(format!("| Orphaned keys removed | **{total_orphaned}** |"));
    lines.push(format!("| Identical to default | **{total_identical}** |"));
    lines.push(format!("| Placeholder mismatches | **{total_mismatched}** |"));
    lines.push(String::new());

    lines.join("\n") + "\n"
}
