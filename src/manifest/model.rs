use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Typed view of a `gemini-extension.json` manifest.
///
/// Every contractual field is optional at the type level: required-ness is
/// enforced by the validator so that each missing field produces its own
/// independent report entry instead of a single deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtensionManifest {
    /// Extension name, required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Extension version, required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// MCP server entries keyed by logical server name, required.
    /// BTreeMap keeps validation output in sorted name order.
    #[serde(rename = "mcpServers", skip_serializing_if = "Option::is_none")]
    pub mcp_servers: Option<BTreeMap<String, McpServerEntry>>,
}

impl ExtensionManifest {
    /// Create a manifest with the given identity and no server entries.
    pub fn new(name: String, version: String) -> Self {
        Self {
            name: Some(name),
            version: Some(version),
            mcp_servers: Some(BTreeMap::new()),
        }
    }

    /// Add or replace an MCP server entry.
    pub fn add_server(&mut self, name: String, entry: McpServerEntry) {
        self.mcp_servers
            .get_or_insert_with(BTreeMap::new)
            .insert(name, entry);
    }

    /// Look up a server entry by logical name.
    pub fn get_server(&self, name: &str) -> Option<&McpServerEntry> {
        self.mcp_servers.as_ref()?.get(name)
    }

    /// The required top-level fields that are absent, in contract order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.version.is_none() {
            missing.push("version");
        }
        if self.mcp_servers.is_none() {
            missing.push("mcpServers");
        }
        missing
    }
}

/// One named MCP server configuration block from the manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct McpServerEntry {
    /// Executable invoked to start the server, required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Anything else the entry declares (args, env, cwd, ...). Permitted
    /// and ignored by validation.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl McpServerEntry {
    /// Create an entry launching the given command.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            extra: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_order() {
        let manifest = ExtensionManifest::default();
        assert_eq!(manifest.missing_fields(), vec!["name", "version", "mcpServers"]);
    }

    #[test]
    fn test_complete_manifest_has_no_missing_fields() {
        let mut manifest = ExtensionManifest::new("memorygraph".into(), "1.0.0".into());
        manifest.add_server(
            "memorygraph".into(),
            McpServerEntry::with_command("npx"),
        );
        assert!(manifest.missing_fields().is_empty());
        assert!(manifest.get_server("memorygraph").is_some());
        assert!(manifest.get_server("other").is_none());
    }

    #[test]
    fn test_extra_server_keys_are_preserved() {
        let json = r#"{"command": "npx", "args": ["-y", "server"], "env": {}}"#;
        let entry: McpServerEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.command.as_deref(), Some("npx"));
        assert!(entry.extra.contains_key("args"));
        assert!(entry.extra.contains_key("env"));
    }
}
