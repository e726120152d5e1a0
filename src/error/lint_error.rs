use thiserror::Error;

/// Errors produced while reading or parsing a single input file, plus the
/// one failure mode that aborts the run before any file is touched.
///
/// The first three variants are never propagated out of a validation pass;
/// they are converted into path-prefixed [`ValidationIssue`]s at the
/// validation boundary and reported together at the end of the run.
///
/// [`ValidationIssue`]: crate::validator::ValidationIssue
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LintError {
    /// The file's content does not parse as JSON.
    #[error("JSON syntax error - {0}")]
    JsonSyntax(String),

    /// The file's content does not parse as TOML.
    #[error("TOML syntax error - {0}")]
    TomlSyntax(String),

    /// The file or directory could not be opened or read for reasons
    /// other than syntax (missing, permission denied, not UTF-8 decodable
    /// metadata, ...).
    #[error("Error reading file - {0}")]
    Read(String),

    /// The package root could not be determined from the executable's
    /// location. Fatal: there is nothing to validate without a root.
    #[error("could not resolve package root: {0}")]
    RootResolution(String),
}

impl From<std::io::Error> for LintError {
    fn from(error: std::io::Error) -> Self {
        LintError::Read(error.to_string())
    }
}
