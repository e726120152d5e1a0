use crate::commands::validate_command_file;
use crate::config::LintConfig;
use crate::manifest::validate_manifest;
use crate::validator::syntax::validate_json;
use crate::validator::{LintReport, ValidationIssue};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// One validation run over an extension package.
///
/// Strictly sequential: manifest, then the optional package descriptor,
/// then the command-definition directory. Every per-file failure becomes
/// report data; nothing is retried and nothing halts the remaining checks.
pub struct ValidationRun {
    config: LintConfig,
    checked: Vec<String>,
    issues: Vec<ValidationIssue>,
}

impl ValidationRun {
    pub fn new(config: LintConfig) -> Self {
        Self {
            config,
            checked: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Execute all checks and consume the run into its report.
    pub fn execute(mut self) -> LintReport {
        info!(
            "Validating extension package at {}",
            self.config.root.display()
        );

        self.check_manifest();
        self.check_package_descriptor();
        self.check_command_files();

        info!(
            "Validation finished: {} file(s) checked, {} issue(s)",
            self.checked.len(),
            self.issues.len()
        );

        LintReport {
            header: format!("Validating {} extension...", self.config.extension_name),
            checked: self.checked,
            issues: self.issues,
        }
    }

    /// The manifest is the one file whose absence is itself an error.
    fn check_manifest(&mut self) {
        let path = self.config.manifest_path();
        if path.exists() {
            self.checked.push(self.config.manifest_file.clone());
            let issues = validate_manifest(&path);
            self.issues.extend(issues);
        } else {
            warn!("Manifest not found at {}", path.display());
            self.issues
                .push(ValidationIssue::file_absent(&self.config.manifest_file));
        }
    }

    /// `package.json` is optional and only syntax-checked when present.
    fn check_package_descriptor(&mut self) {
        let path = self.config.package_path();
        if !path.exists() {
            debug!("No package descriptor at {}, skipping", path.display());
            return;
        }
        self.checked.push(self.config.package_file.clone());
        let issues = validate_json(&path);
        self.issues.extend(issues);
    }

    /// Discover and validate command-definition files, if the directory
    /// exists. Discovery failures are report data, not a crash.
    fn check_command_files(&mut self) {
        let dir = self.config.commands_path();
        if !dir.exists() {
            debug!("No command directory at {}, skipping", dir.display());
            return;
        }

        let files = match self.discover_command_files(&dir) {
            Ok(files) => files,
            Err(e) => {
                warn!("Could not enumerate {}: {}", dir.display(), e);
                self.issues
                    .push(ValidationIssue::from_error(&dir, &e.into()));
                return;
            }
        };

        for path in files {
            self.checked.push(self.relative_display(&path));
            let issues = validate_command_file(&path);
            self.issues.extend(issues);
        }
    }

    /// Enumerate regular files with the configured extension directly
    /// inside `dir` (non-recursive), sorted by file name so that report
    /// order is deterministic across filesystems.
    fn discover_command_files(&self, dir: &Path) -> std::io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let matches_extension = path
                .extension()
                .map(|ext| ext == self.config.command_extension.as_str())
                .unwrap_or(false);
            if matches_extension && entry.file_type()?.is_file() {
                files.push(path);
            }
        }
        files.sort();
        debug!(
            "Discovered {} command file(s) in {}",
            files.len(),
            dir.display()
        );
        Ok(files)
    }

    fn relative_display(&self, path: &Path) -> String {
        path.strip_prefix(&self.config.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
