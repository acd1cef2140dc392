//! MCP integration types, including capabilities and workspace access.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An MCP (Model Context Protocol) server integration record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct McpIntegration {
    /// Opaque integration identifier.
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// MCP server endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Authentication mode for the server, e.g. `"none"` or `"oauth"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,

    /// Server-specific configuration object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Timestamp>,
}

/// Request payload for creating an MCP integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMcpIntegrationRequest {
    /// Display name.
    pub name: String,

    /// MCP server endpoint.
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Value>,
}

impl CreateMcpIntegrationRequest {
    /// Creates a request for the given server endpoint.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            slug: None,
            description: None,
            auth_type: None,
            configurations: None,
        }
    }

    /// Sets an explicit slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the authentication mode.
    pub fn auth_type(mut self, auth_type: impl Into<String>) -> Self {
        self.auth_type = Some(auth_type.into());
        self
    }

    /// Sets server-specific configuration.
    pub fn configurations(mut self, configurations: Value) -> Self {
        self.configurations = Some(configurations);
        self
    }
}

/// Request payload for updating an MCP integration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateMcpIntegrationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Value>,
}

impl UpdateMcpIntegrationRequest {
    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the server endpoint.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the authentication mode.
    pub fn auth_type(mut self, auth_type: impl Into<String>) -> Self {
        self.auth_type = Some(auth_type.into());
        self
    }

    /// Sets server-specific configuration.
    pub fn configurations(mut self, configurations: Value) -> Self {
        self.configurations = Some(configurations);
        self
    }
}

/// A capability (tool, prompt, or resource) exposed by an MCP server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct McpCapability {
    /// Capability slug, unique within the integration.
    #[serde(default)]
    pub slug: String,

    /// Capability kind, e.g. `"tool"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the capability is enabled for gateway use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl McpCapability {
    /// Creates an enabled capability entry.
    pub fn enabled(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            kind: None,
            description: None,
            enabled: Some(true),
        }
    }
}

/// Request payload for replacing an MCP integration's capability list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateMcpCapabilitiesRequest {
    /// Enable every capability the server exposes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_all_capabilities: Option<bool>,

    /// Explicitly enabled capabilities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<McpCapability>,
}

impl UpdateMcpCapabilitiesRequest {
    /// Replaces the capability list with the given entries.
    pub fn capabilities(capabilities: Vec<McpCapability>) -> Self {
        Self {
            allow_all_capabilities: None,
            capabilities,
        }
    }

    /// Enables every capability the server exposes.
    pub fn allow_all() -> Self {
        Self {
            allow_all_capabilities: Some(true),
            capabilities: Vec::new(),
        }
    }
}

/// Workspace-level access to an MCP integration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct McpWorkspace {
    /// Workspace granted access.
    #[serde(default)]
    pub workspace_id: String,

    /// Whether the workspace may use the integration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl McpWorkspace {
    /// Creates an enabled access entry for a workspace.
    pub fn enabled(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            enabled: Some(true),
        }
    }
}

/// Request payload for replacing an MCP integration's workspace access list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateMcpWorkspacesRequest {
    /// Grant the integration to every workspace in the organisation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_workspace_access: Option<bool>,

    /// Per-workspace access entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workspaces: Vec<McpWorkspace>,
}

impl UpdateMcpWorkspacesRequest {
    /// Replaces access with the given per-workspace entries.
    pub fn workspaces(workspaces: Vec<McpWorkspace>) -> Self {
        Self {
            global_workspace_access: None,
            workspaces,
        }
    }

    /// Grants access to all workspaces.
    pub fn global() -> Self {
        Self {
            global_workspace_access: Some(true),
            workspaces: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_kind_uses_wire_name() {
        let capability = McpCapability {
            slug: "search".to_string(),
            kind: Some("tool".to_string()),
            description: None,
            enabled: Some(true),
        };
        let json = serde_json::to_value(&capability).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"slug": "search", "type": "tool", "enabled": true})
        );
    }
}
