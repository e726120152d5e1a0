use crate::error::LintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Classification of a collected problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueKind {
    /// Content does not parse under its declared format.
    Syntax,
    /// Content parses but lacks a required key.
    MissingField,
    /// The file or directory could not be opened/read for non-syntax reasons.
    Read,
    /// A required top-level file is missing entirely.
    Absent,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Syntax => "SYNTAX",
            IssueKind::MissingField => "MISSING_FIELD",
            IssueKind::Read => "READ",
            IssueKind::Absent => "ABSENT",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single problem discovered during a validation run.
///
/// Issues are ephemeral: created by a check, appended to the run's report,
/// never mutated. The rendered message embeds the file path (except for
/// [`IssueKind::Absent`], which names the missing file without a prefix).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    kind: IssueKind,
    message: String,
}

impl ValidationIssue {
    /// Classify a parse/read error against the file it came from.
    pub fn from_error(path: &Path, error: &LintError) -> Self {
        let kind = match error {
            LintError::JsonSyntax(_) | LintError::TomlSyntax(_) => IssueKind::Syntax,
            _ => IssueKind::Read,
        };
        Self {
            kind,
            message: format!("{}: {}", path.display(), error),
        }
    }

    /// A required top-level manifest key is absent.
    pub fn missing_required_field(path: &Path, field: &str) -> Self {
        Self {
            kind: IssueKind::MissingField,
            message: format!("{}: Missing required field '{}'", path.display(), field),
        }
    }

    /// A command-definition file lacks one of its required keys.
    pub fn missing_command_key(path: &Path, key: &str) -> Self {
        Self {
            kind: IssueKind::MissingField,
            message: format!("{}: Missing '{}' field", path.display(), key),
        }
    }

    /// An MCP server entry in the manifest has no `command` key.
    pub fn server_missing_command(path: &Path, server_name: &str) -> Self {
        Self {
            kind: IssueKind::MissingField,
            message: format!(
                "{}: MCP server '{}' missing 'command'",
                path.display(),
                server_name
            ),
        }
    }

    /// A required top-level file does not exist at all. The message is
    /// deliberately not path-prefixed, unlike every other issue.
    pub fn file_absent(file_name: &str) -> Self {
        Self {
            kind: IssueKind::Absent,
            message: format!("{} not found!", file_name),
        }
    }

    pub fn kind(&self) -> IssueKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// The consolidated result of one validation run: the transcript header,
/// the files examined in processing order, and the append-only issue list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintReport {
    /// Transcript header line.
    pub header: String,

    /// Display names of the files examined, in processing order.
    pub checked: Vec<String>,

    /// Every problem discovered, in discovery order.
    pub issues: Vec<ValidationIssue>,
}

impl LintReport {
    /// Whether the run collected zero issues. Determines the exit code.
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }

    /// Render the full console transcript: header, one checkmark line per
    /// examined file, then either the failure block or the success line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.header);
        out.push('\n');
        out.push('\n');
        for name in &self.checked {
            out.push_str(&format!("✓ Checking {}\n", name));
        }
        out.push('\n');
        if self.issues.is_empty() {
            out.push_str("✅ All validations passed!\n");
        } else {
            out.push_str(&format!("❌ Found {} error(s):\n\n", self.issues.len()));
            for issue in &self.issues {
                out.push_str(&format!("  - {}\n", issue));
            }
        }
        out
    }
}
