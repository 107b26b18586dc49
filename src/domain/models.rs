use indexmap::IndexMap;
use std::path::PathBuf;

/// One parsed `<data>` entry: value, optional trailing comment, and the raw
/// physical line it came from (trailing `\r` stripped).
#[derive(Debug, Clone)]
pub struct Record {
    pub value: String,
    pub comment: Option<String>,
    pub raw: String,
}

/// A resource file split into key records and opaque structure.
///
/// `records` preserves first-occurrence key order; a key seen twice keeps its
/// original position while value/comment/raw reflect the latest occurrence.
/// `first_record_idx`/`last_record_idx` bound the contiguous template span;
/// both are `None` for a file with no recognizable record, which is a valid
/// degenerate state (the whole file is prefix).
#[derive(Debug, Clone)]
pub struct ResourceFile {
    pub text: String,
    pub lines: Vec<String>,
    pub records: IndexMap<String, Record>,
    pub first_record_idx: Option<usize>,
    pub last_record_idx: Option<usize>,
}

impl ResourceFile {
    pub fn key_count(&self) -> usize {
        self.records.len()
    }

    /// Lines strictly before the first key record (the whole file when there
    /// is no record).
    pub fn prefix_lines(&self) -> &[String] {
        match self.first_record_idx {
            Some(first) => &self.lines[..first],
            None => &self.lines,
        }
    }

    /// Lines strictly after the last key record (empty when there is no
    /// record).
    pub fn suffix_lines(&self) -> &[String] {
        match self.last_record_idx {
            Some(last) => &self.lines[last + 1..],
            None => &[],
        }
    }

    /// The contiguous first-to-last record span, including any comment or
    /// blank lines interleaved between records.
    pub fn template_lines(&self) -> &[String] {
        match (self.first_record_idx, self.last_record_idx) {
            (Some(first), Some(last)) => &self.lines[first..=last],
            _ => &[],
        }
    }
}

/// Per-locale outcome of one reconciliation pass.
///
/// `missing_added` and `orphaned_removed` are sorted lexicographically;
/// `identical_values` and `placeholder_mismatches` follow default key order.
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    pub missing_added: Vec<String>,
    pub orphaned_removed: Vec<String>,
    pub identical_values: Vec<String>,
    pub placeholder_mismatches: Vec<String>,
    pub final_key_count: usize,
}

/// One locale's contribution to the final report.
#[derive(Debug)]
pub struct LocaleReport {
    pub locale: String,
    pub path: PathBuf,
    pub result: Reconciliation,
}
