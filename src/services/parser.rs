use crate::domain::models::{Record, ResourceFile};
use regex::Regex;
use std::sync::LazyLock;

/// Single-line record shape:
/// `<data name="K" xml:space="preserve"><value>V</value></data>`,
/// optionally with a trailing `<comment>...</comment>` before `</data>`.
/// Anything else on a line is opaque structure, never an error.
pub static DATA_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*<data\s+name="([^"]+)"\s+xml:space="preserve"><value>(.*?)</value>(?:<comment>(.*?)</comment>)?</data>\s*$"#,
    )
    .expect("data line pattern")
});

/// Parse resource text into keys, values, comments and structural spans.
///
/// Splitting tolerates both `\n` and `\r\n` endings; raw record lines are
/// stored without their terminator. A duplicate key keeps its first position
/// but takes the latest value/comment/raw line.
pub fn parse_resource(text: &str) -> ResourceFile {
    let lines: Vec<String> = text.lines().map(str::to_owned).collect();

    let mut records = indexmap::IndexMap::new();
    let mut first_record_idx = None;
    let mut last_record_idx = None;

    for (idx, line) in lines.iter().enumerate() {
        let Some(caps) = DATA_LINE_RE.captures(line) else {
            continue;
        };
        let key = caps[1].to_string();
        let record = Record {
            value: caps[2].to_string(),
            comment: caps.get(3).map(|m| m.as_str().to_owned()),
            raw: line.clone(),
        };
        // IndexMap keeps the first-insertion position on overwrite.
        records.insert(key, record);
        if first_record_idx.is_none() {
            first_record_idx = Some(idx);
        }
        last_record_idx = Some(idx);
    }

    ResourceFile {
        text: text.to_owned(),
        lines,
        records,
        first_record_idx,
        last_record_idx,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_resource;

    const SAMPLE: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<root>\n  <data name=\"Greeting\" xml:space=\"preserve\"><value>Hello {0}</value></data>\n  <!-- section: exits -->\n  <data name=\"Farewell\" xml:space=\"preserve\"><value>Bye</value><comment>shown at logout</comment></data>\n</root>\n";

    #[test]
    fn parses_records_and_spans() {
        let f = parse_resource(SAMPLE);
        assert_eq!(f.key_count(), 2);
        assert_eq!(f.records["Greeting"].value, "Hello {0}");
        assert_eq!(f.records["Greeting"].comment, None);
        assert_eq!(
            f.records["Farewell"].comment.as_deref(),
            Some("shown at logout")
        );
        assert_eq!(f.first_record_idx, Some(2));
        assert_eq!(f.last_record_idx, Some(4));
        assert_eq!(f.prefix_lines().len(), 2);
        assert_eq!(f.suffix_lines(), ["</root>"]);
        // The comment line between the two records stays inside the span.
        assert_eq!(f.template_lines().len(), 3);
    }

    #[test]
    fn duplicate_key_keeps_position_takes_latest_value() {
        let text = "<data name=\"A\" xml:space=\"preserve\"><value>first</value></data>\n<data name=\"B\" xml:space=\"preserve\"><value>b</value></data>\n<data name=\"A\" xml:space=\"preserve\"><value>second</value></data>\n";
        let f = parse_resource(text);
        let keys: Vec<&String> = f.records.keys().collect();
        assert_eq!(keys, ["A", "B"]);
        assert_eq!(f.records["A"].value, "second");
        assert!(f.records["A"].raw.contains("second"));
        assert_eq!(f.last_record_idx, Some(2));
    }

    #[test]
    fn file_without_records_is_all_prefix() {
        let f = parse_resource("<?xml version=\"1.0\"?>\n<root>\n</root>\n");
        assert_eq!(f.key_count(), 0);
        assert_eq!(f.first_record_idx, None);
        assert_eq!(f.prefix_lines().len(), 3);
        assert!(f.suffix_lines().is_empty());
        assert!(f.template_lines().is_empty());
    }

    #[test]
    fn crlf_input_strips_carriage_returns_from_lines() {
        let text = "<root>\r\n<data name=\"A\" xml:space=\"preserve\"><value>a</value></data>\r\n</root>\r\n";
        let f = parse_resource(text);
        assert_eq!(f.key_count(), 1);
        assert_eq!(
            f.records["A"].raw,
            "<data name=\"A\" xml:space=\"preserve\"><value>a</value></data>"
        );
    }

    #[test]
    fn multi_line_records_are_opaque_structure() {
        let text = "<data name=\"A\" xml:space=\"preserve\">\n<value>split</value>\n</data>\n";
        let f = parse_resource(text);
        assert_eq!(f.key_count(), 0);
    }

    #[test]
    fn empty_value_and_trailing_whitespace_are_accepted() {
        let text = "  <data name=\"Blank\" xml:space=\"preserve\"><value></value></data>  \n";
        let f = parse_resource(text);
        assert_eq!(f.records["Blank"].value, "");
    }
}
