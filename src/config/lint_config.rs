use std::path::{Path, PathBuf};

/// Configuration for one validation run.
///
/// The relative file names mirror the layout a Gemini CLI extension package
/// is distributed with; only the root normally varies between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfig {
    /// Package root directory all other paths are resolved against.
    pub root: PathBuf,

    /// Extension name shown in the transcript header.
    /// (Default: "memorygraph-gemini")
    pub extension_name: String,

    /// Manifest file name at the package root, required.
    /// (Default: "gemini-extension.json")
    pub manifest_file: String,

    /// Package descriptor file name at the package root, optional.
    /// (Default: "package.json")
    pub package_file: String,

    /// Directory of command-definition files, relative to the root.
    /// (Default: "commands/memory")
    pub commands_dir: PathBuf,

    /// File extension of command-definition files. (Default: "toml")
    pub command_extension: String,
}

impl LintConfig {
    /// Create a configuration for the package rooted at `root`, with all
    /// other values at their defaults.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest_file)
    }

    pub fn package_path(&self) -> PathBuf {
        self.root.join(&self.package_file)
    }

    pub fn commands_path(&self) -> PathBuf {
        self.root.join(&self.commands_dir)
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension_name: "memorygraph-gemini".to_string(),
            manifest_file: "gemini-extension.json".to_string(),
            package_file: "package.json".to_string(),
            commands_dir: Path::new("commands").join("memory"),
            command_extension: "toml".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = LintConfig::default();
        assert_eq!(config.extension_name, "memorygraph-gemini");
        assert_eq!(config.manifest_file, "gemini-extension.json");
        assert_eq!(config.package_file, "package.json");
        assert_eq!(config.commands_dir, Path::new("commands").join("memory"));
        assert_eq!(config.command_extension, "toml");
    }

    #[test]
    fn test_paths_join_root() {
        let config = LintConfig::new("/tmp/pkg");
        assert_eq!(
            config.manifest_path(),
            PathBuf::from("/tmp/pkg/gemini-extension.json")
        );
        assert_eq!(config.package_path(), PathBuf::from("/tmp/pkg/package.json"));
        assert_eq!(
            config.commands_path(),
            PathBuf::from("/tmp/pkg/commands/memory")
        );
    }
}
