pub mod model;
pub mod parser;
pub mod validator;

pub use model::{ExtensionManifest, McpServerEntry};
pub use parser::ManifestParser;
pub use validator::{check_required_fields, validate_manifest};
