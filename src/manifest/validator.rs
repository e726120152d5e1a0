use crate::manifest::{ExtensionManifest, ManifestParser};
use crate::validator::ValidationIssue;
use log::{debug, warn};
use std::path::Path;

/// Check a manifest file against the required-field contract.
///
/// On read or parse failure the single resulting issue replaces the field
/// checks entirely. Otherwise every absent top-level field among `name`,
/// `version` and `mcpServers` is reported independently, followed by one
/// issue per MCP server entry lacking a `command` key.
pub fn validate_manifest(path: &Path) -> Vec<ValidationIssue> {
    let manifest = match ManifestParser::from_file(path) {
        Ok(manifest) => manifest,
        Err(e) => {
            warn!("Manifest check failed before field validation: {}", e);
            return vec![ValidationIssue::from_error(path, &e)];
        }
    };

    check_required_fields(path, &manifest)
}

/// The field-presence portion of manifest validation, split out so it can
/// run against an already parsed document.
pub fn check_required_fields(path: &Path, manifest: &ExtensionManifest) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for field in manifest.missing_fields() {
        issues.push(ValidationIssue::missing_required_field(path, field));
    }

    if let Some(servers) = &manifest.mcp_servers {
        debug!(
            "Validating {} MCP server entr{} in {}",
            servers.len(),
            if servers.len() == 1 { "y" } else { "ies" },
            path.display()
        );
        for (name, entry) in servers {
            if entry.command.is_none() {
                issues.push(ValidationIssue::server_missing_command(path, name));
            }
        }
    }

    issues
}
