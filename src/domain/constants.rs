//! Fixed run configuration. The audit is a maintainer batch tool: no flags, no
//! environment variables, all paths resolved relative to the working directory.

use std::path::PathBuf;

/// Directory holding the shared resource files.
pub const RESOURCE_ROOT: &str = "resources";

/// Base name of the resource family; the default-language file is
/// `SharedResource.resx`, locale files are `SharedResource.<locale>.resx`.
pub const RESOURCE_BASENAME: &str = "SharedResource";

/// Locales audited and rewritten, in processing order.
pub const LOCALES: [&str; 4] = ["es", "de", "fr", "it"];

/// Markdown report output path, overwritten on every run.
pub const REPORT_FILE: &str = "i18n-audit-report.md";

pub fn default_path() -> PathBuf {
    PathBuf::from(RESOURCE_ROOT).join(format!("{RESOURCE_BASENAME}.resx"))
}

pub fn locale_path(locale: &str) -> PathBuf {
    PathBuf::from(RESOURCE_ROOT).join(format!("{RESOURCE_BASENAME}.{locale}.resx"))
}

pub fn report_path() -> PathBuf {
    PathBuf::from(REPORT_FILE)
}
