use crate::error::LintError;
use crate::validator::ValidationIssue;
use log::{debug, error};
use std::fs;
use std::path::Path;

/// Check that a file parses as JSON, without any field checks.
///
/// Returns an empty list on success, one syntax issue on a JSON parse
/// failure, and one read issue on any other failure (missing file,
/// permission denied).
pub fn validate_json(path: &Path) -> Vec<ValidationIssue> {
    match parse_json(path) {
        Ok(()) => Vec::new(),
        Err(e) => vec![ValidationIssue::from_error(path, &e)],
    }
}

fn parse_json(path: &Path) -> Result<(), LintError> {
    debug!("Syntax-checking JSON file: {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        error!("Failed to read JSON file '{}': {}", path.display(), e);
        LintError::Read(e.to_string())
    })?;

    serde_json::from_str::<serde_json::Value>(&content)
        .map(|_| ())
        .map_err(|e| {
            error!("Failed to parse JSON file '{}': {}", path.display(), e);
            LintError::JsonSyntax(e.to_string())
        })
}
