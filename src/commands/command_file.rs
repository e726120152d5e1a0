use crate::error::LintError;
use crate::validator::ValidationIssue;
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Keys every command-definition file must carry, in report order.
const REQUIRED_KEYS: [&str; 2] = ["description", "prompt"];

/// Typed view of one TOML command-definition file.
///
/// Required-ness is enforced by [`validate_command_file`], not serde, so a
/// file missing both keys reports both. Unknown keys are permitted and
/// ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommandDocument {
    /// One-line description of the command, required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Prompt template the command expands to, required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl CommandDocument {
    /// The required keys this document is missing, in report order.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.description.is_none() {
            missing.push(REQUIRED_KEYS[0]);
        }
        if self.prompt.is_none() {
            missing.push(REQUIRED_KEYS[1]);
        }
        missing
    }
}

/// Parse a command-definition file from raw bytes.
///
/// Files are read in binary mode; content that is not valid UTF-8 is a
/// syntax error, matching the TOML format requirement.
pub fn parse_command_file(path: &Path) -> Result<CommandDocument, LintError> {
    debug!("Parsing command file: {}", path.display());

    let bytes = fs::read(path).map_err(|e| {
        error!("Failed to read command file '{}': {}", path.display(), e);
        LintError::Read(e.to_string())
    })?;

    let content = std::str::from_utf8(&bytes)
        .map_err(|e| LintError::TomlSyntax(format!("file is not valid UTF-8: {}", e)))?;

    toml::from_str::<CommandDocument>(content).map_err(|e| {
        error!("Failed to parse command file '{}': {}", path.display(), e);
        LintError::TomlSyntax(e.message().to_string())
    })
}

/// Check one command-definition file against the required-key contract.
///
/// A read or parse failure yields exactly one issue and suppresses the key
/// checks for that file; otherwise one issue is reported per missing key.
pub fn validate_command_file(path: &Path) -> Vec<ValidationIssue> {
    let document = match parse_command_file(path) {
        Ok(document) => document,
        Err(e) => {
            warn!("Command file check failed before key validation: {}", e);
            return vec![ValidationIssue::from_error(path, &e)];
        }
    };

    document
        .missing_keys()
        .into_iter()
        .map(|key| ValidationIssue::missing_command_key(path, key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::IssueKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn command_file(content: &[u8]) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_complete_document_passes() {
        let file = command_file(b"description = \"Recall a memory\"\nprompt = \"Recall {{args}}\"\n");
        assert!(validate_command_file(file.path()).is_empty());
    }

    #[test]
    fn test_missing_prompt_is_one_issue() {
        let file = command_file(b"description = \"Recall a memory\"\n");
        let issues = validate_command_file(file.path());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind(), IssueKind::MissingField);
        assert!(issues[0].message().contains("Missing 'prompt' field"));
    }

    #[test]
    fn test_missing_both_keys_reports_both_in_order() {
        let file = command_file(b"other = 1\n");
        let issues = validate_command_file(file.path());
        assert_eq!(issues.len(), 2);
        assert!(issues[0].message().contains("'description'"));
        assert!(issues[1].message().contains("'prompt'"));
    }

    #[test]
    fn test_syntax_error_suppresses_key_checks() {
        let file = command_file(b"description = \"unterminated\nprompt = \"x\"\n");
        let issues = validate_command_file(file.path());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind(), IssueKind::Syntax);
        assert!(issues[0].message().contains("TOML syntax error"));
    }

    #[test]
    fn test_non_utf8_content_is_syntax_error() {
        let file = command_file(&[0xFF, 0xFE, 0x00, 0x01]);
        let issues = validate_command_file(file.path());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind(), IssueKind::Syntax);
    }

    #[test]
    fn test_missing_file_is_read_issue() {
        let issues = validate_command_file(Path::new("/nonexistent/recall.toml"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind(), IssueKind::Read);
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let file = command_file(
            b"description = \"x\"\nprompt = \"y\"\n\n[metadata]\nauthor = \"someone\"\n",
        );
        assert!(validate_command_file(file.path()).is_empty());
    }
}
