pub mod lint_error;

pub use lint_error::LintError;

pub type Result<T> = std::result::Result<T, LintError>;
