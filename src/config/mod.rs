pub mod lint_config;

pub use lint_config::LintConfig;
