use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern"));

/// Sorted list of positional-placeholder indices found in a value.
///
/// Duplicates are kept, so `{0}{0}` and `{0}` produce different signatures.
/// Two values match iff their signatures compare equal.
pub fn placeholder_sig(value: &str) -> Vec<String> {
    let mut indices: Vec<String> = PLACEHOLDER_RE
        .captures_iter(value)
        .map(|c| c[1].to_string())
        .collect();
    indices.sort();
    indices
}
