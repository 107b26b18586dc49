use crate::domain::models::{Reconciliation, ResourceFile};
use crate::services::parser::DATA_LINE_RE;
use crate::services::placeholders::placeholder_sig;
use std::collections::BTreeSet;

/// Rewrite a locale file against the default template and collect statistics.
///
/// The rewrite is a merge/reorder, not a regeneration: locale prefix verbatim,
/// then the default's record span line by line (a key record emits the
/// locale's raw line when the locale has the key, the default's raw line when
/// it does not; interleaved comment/blank lines emit verbatim from the
/// default), then locale suffix verbatim. Orphaned locale keys are dropped, so
/// the output's key set and order always equal the default's.
///
/// Re-running on the rewritten output against the same default yields zero
/// missing, zero orphaned and byte-identical text.
pub fn reconcile(default: &ResourceFile, locale: &ResourceFile) -> (String, Reconciliation) {
    let default_keys: BTreeSet<&str> = default.records.keys().map(String::as_str).collect();
    let locale_keys: BTreeSet<&str> = locale.records.keys().map(String::as_str).collect();

    // BTreeSet difference iterates in sorted order.
    let missing_added: Vec<String> = default_keys
        .difference(&locale_keys)
        .map(|k| k.to_string())
        .collect();
    let orphaned_removed: Vec<String> = locale_keys
        .difference(&default_keys)
        .map(|k| k.to_string())
        .collect();

    let mut identical_values = Vec::new();
    let mut placeholder_mismatches = Vec::new();
    for (key, default_record) in &default.records {
        let Some(locale_record) = locale.records.get(key) else {
            continue;
        };
        // An empty string on both sides is never flagged as untranslated.
        if default_record.value == locale_record.value && !default_record.value.is_empty() {
            identical_values.push(key.clone());
        }
        // Checked independently of the identity check on every shared key.
        if placeholder_sig(&default_record.value) != placeholder_sig(&locale_record.value) {
            placeholder_mismatches.push(key.clone());
        }
    }

    let mut out_lines: Vec<&str> = locale.prefix_lines().iter().map(String::as_str).collect();
    for line in default.template_lines() {
        match DATA_LINE_RE.captures(line) {
            Some(caps) => {
                let key = &caps[1];
                match locale.records.get(key) {
                    // Keep the existing translation exactly as found.
                    Some(locale_record) => out_lines.push(&locale_record.raw),
                    // Missing key: fill in with the default-language record.
                    None => out_lines.push(&default.records[key].raw),
                }
            }
            None => out_lines.push(line),
        }
    }
    out_lines.extend(locale.suffix_lines().iter().map(String::as_str));

    // Output keeps the locale's original line-ending style and trailing
    // terminator.
    let newline = if locale.text.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    };
    let mut new_text = out_lines.join(newline);
    if (locale.text.ends_with('\n') || locale.text.ends_with('\r')) && !new_text.ends_with(newline)
    {
        new_text.push_str(newline);
    }

    let result = Reconciliation {
        missing_added,
        orphaned_removed,
        identical_values,
        placeholder_mismatches,
        final_key_count: default.key_count(),
    };
    (new_text, result)
}
