use extension_lint::{LintConfig, LintReport, ValidationRun};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A manifest that satisfies every required-field check.
pub const VALID_MANIFEST: &str = r#"{
    "name": "memorygraph-gemini",
    "version": "1.0.0",
    "mcpServers": {
        "memorygraph": {
            "command": "npx",
            "args": ["-y", "memorygraph-mcp"]
        }
    }
}"#;

/// Create an empty extension package root in a temporary directory.
pub fn package_root() -> TempDir {
    tempfile::tempdir().unwrap()
}

pub fn write_manifest(root: &Path, content: &str) {
    fs::write(root.join("gemini-extension.json"), content).unwrap();
}

pub fn write_package_json(root: &Path, content: &str) {
    fs::write(root.join("package.json"), content).unwrap();
}

/// Create `commands/memory` under the root, empty.
pub fn create_commands_dir(root: &Path) {
    fs::create_dir_all(root.join("commands").join("memory")).unwrap();
}

/// Write one file into `commands/memory`, creating the directory as needed.
pub fn write_command_file(root: &Path, name: &str, content: &str) {
    let dir = root.join("commands").join("memory");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

/// Run a full validation over the given package root.
pub fn run_lint(root: &Path) -> LintReport {
    ValidationRun::new(LintConfig::new(root)).execute()
}
