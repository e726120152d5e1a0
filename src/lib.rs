//! # extension-lint
//!
//! Pre-publish validator for Gemini CLI extension packages. Checks that the
//! `gemini-extension.json` manifest, an optional `package.json` descriptor,
//! and the TOML command-definition files under `commands/memory` conform to
//! expected syntax and required-field contracts before the extension is
//! distributed. It is a lint/CI gate, not a runtime component.
//!
//! ## What is checked
//!
//! - **Manifest**: must exist and carry `name`, `version` and `mcpServers`;
//!   every MCP server entry must declare a `command`.
//! - **Package descriptor**: syntax-checked as JSON when present.
//! - **Command files**: every `*.toml` directly inside `commands/memory`
//!   must parse and carry `description` and `prompt`.
//!
//! Every problem is collected into a single consolidated report; the exit
//! code of the `extlint` binary (0 or 1) is the machine-readable signal.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use extension_lint::{LintConfig, ValidationRun};
//!
//! let config = LintConfig::new("/path/to/extension");
//! let report = ValidationRun::new(config).execute();
//!
//! print!("{}", report.render());
//! std::process::exit(if report.passed() { 0 } else { 1 });
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod manifest;
pub mod utils;
pub mod validator;

// Configuration exports
pub use config::LintConfig;

// Manifest exports (parsing and required-field checks)
pub use manifest::{
    check_required_fields, validate_manifest, ExtensionManifest, ManifestParser, McpServerEntry,
};

// Command-definition exports
pub use commands::{parse_command_file, validate_command_file, CommandDocument};

// Validator exports (run orchestration and the report model)
pub use validator::{validate_json, IssueKind, LintReport, ValidationIssue, ValidationRun};

// Error exports
pub use error::LintError;

// Result type alias
pub type Result<T> = std::result::Result<T, LintError>;

// Utility exports
pub use utils::PathUtils;

/// Prelude module for convenient importing
pub mod prelude {
    pub use crate::{
        CommandDocument, ExtensionManifest, IssueKind, LintConfig, LintError, LintReport,
        ManifestParser, McpServerEntry, Result, ValidationIssue, ValidationRun,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "extension-lint");
    }
}
