use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const LOCALES: [&str; 4] = ["es", "de", "fr", "it"];

/// Isolated working directory with a `resources/` fixture tree. The binary
/// resolves all paths relative to its working directory, so each test runs it
/// with `current_dir` pointed here.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        fs::create_dir_all(root.join("resources")).expect("create resources dir");
        Self { _tmp: tmp, root }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("resx-audit").expect("binary under test");
        cmd.current_dir(&self.root);
        cmd
    }

    pub fn write_default(&self, records: &[(&str, &str)]) {
        self.write_resx("resources/SharedResource.resx", records);
    }

    pub fn write_locale(&self, locale: &str, records: &[(&str, &str)]) {
        self.write_resx(&format!("resources/SharedResource.{locale}.resx"), records);
    }

    /// Seed every locale with identical records; tests then perturb one.
    pub fn write_all_locales(&self, records: &[(&str, &str)]) {
        for locale in LOCALES {
            self.write_locale(locale, records);
        }
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root.join(rel)).expect("read fixture file")
    }

    pub fn write_resx(&self, rel: &str, records: &[(&str, &str)]) {
        let mut lines = vec![
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>".to_string(),
            "<root>".to_string(),
            "  <resheader name=\"resmimetype\">".to_string(),
            "    <value>text/microsoft-resx</value>".to_string(),
            "  </resheader>".to_string(),
        ];
        for (key, value) in records {
            lines.push(format!(
                "  <data name=\"{key}\" xml:space=\"preserve\"><value>{value}</value></data>"
            ));
        }
        lines.push("</root>".to_string());
        fs::write(self.root.join(rel), lines.join("\n") + "\n").expect("write fixture file");
    }
}
