pub mod issue;
pub mod run;
pub mod syntax;

pub use issue::{IssueKind, LintReport, ValidationIssue};
pub use run::ValidationRun;
pub use syntax::validate_json;
