use crate::error::LintError;
use crate::manifest::ExtensionManifest;
use log::{debug, error, info};
use std::fs;
use std::path::Path;

/// Parser for `gemini-extension.json` manifests.
pub struct ManifestParser;

impl ManifestParser {
    /// Parse an ExtensionManifest from a JSON string.
    pub fn from_json(json_str: &str) -> Result<ExtensionManifest, LintError> {
        Self::from_json_with_context(json_str, None)
    }

    /// Parse an ExtensionManifest from a JSON string with file context.
    pub fn from_json_with_context(
        json_str: &str,
        file_path: Option<&Path>,
    ) -> Result<ExtensionManifest, LintError> {
        let context = file_path
            .map(|p| format!(" (file: {})", p.display()))
            .unwrap_or_default();
        debug!(
            "Attempting to parse manifest from JSON{} ({} bytes)",
            context,
            json_str.len()
        );

        if json_str.trim().is_empty() {
            error!("Manifest JSON string is empty{}", context);
            return Err(LintError::JsonSyntax("input string is empty".to_string()));
        }

        match serde_json::from_str::<ExtensionManifest>(json_str) {
            Ok(manifest) => {
                info!("Successfully parsed manifest{}", context);
                Ok(manifest)
            }
            Err(e) => {
                error!("Failed to parse manifest{}: {}", context, e);

                let detail = match e.classify() {
                    serde_json::error::Category::Io => {
                        format!("I/O issue: {}", e)
                    }
                    serde_json::error::Category::Syntax => {
                        format!(
                            "Syntax error at line {}, column {}: {}",
                            e.line(),
                            e.column(),
                            e
                        )
                    }
                    serde_json::error::Category::Data => {
                        format!("Invalid data structure: {}", e)
                    }
                    serde_json::error::Category::Eof => {
                        format!("Unexpected end of file: {}", e)
                    }
                };

                Err(LintError::JsonSyntax(detail))
            }
        }
    }

    /// Read and parse a manifest file.
    pub fn from_file(path: &Path) -> Result<ExtensionManifest, LintError> {
        info!("Loading manifest from file: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read manifest file '{}': {}", path.display(), e);
            LintError::Read(e.to_string())
        })?;

        Self::from_json_with_context(&content, Some(path))
    }

    /// Serialize a manifest back to pretty JSON.
    pub fn to_json(manifest: &ExtensionManifest) -> Result<String, LintError> {
        serde_json::to_string_pretty(manifest)
            .map_err(|e| LintError::JsonSyntax(e.to_string()))
    }
}
