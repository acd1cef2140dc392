//! Integration types, including workspace access and model provisioning.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::Maybe;
use super::limits::{RateLimit, UsageLimit};

/// An integration record (a provider credential managed by the organisation).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Integration {
    /// Opaque integration identifier.
    #[serde(default)]
    pub id: String,

    /// Human-readable unique identifier; most endpoints address by slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Upstream AI provider, e.g. `"openai"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_provider: Option<String>,

    /// Masked credential, as reported by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Provider-specific configuration object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Timestamp>,
}

/// Request payload for creating an integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIntegrationRequest {
    /// Display name.
    pub name: String,

    /// Upstream AI provider, e.g. `"openai"`.
    pub ai_provider: String,

    /// Provider credential.
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Value>,
}

impl CreateIntegrationRequest {
    /// Creates a request for the given provider credential.
    pub fn new(
        name: impl Into<String>,
        ai_provider: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ai_provider: ai_provider.into(),
            key: key.into(),
            slug: None,
            description: None,
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

    /// Sets provider-specific configuration.
    pub fn configurations(mut self, configurations: Value) -> Self {
        self.configurations = Some(configurations);
        self
    }
}

/// Request payload for updating an integration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateIntegrationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Replacement credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Value>,
}

impl UpdateIntegrationRequest {
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

    /// Replaces the provider credential.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets provider-specific configuration.
    pub fn configurations(mut self, configurations: Value) -> Self {
        self.configurations = Some(configurations);
        self
    }
}

/// Workspace-level access to an integration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IntegrationWorkspace {
    /// Workspace granted access.
    #[serde(default)]
    pub workspace_id: String,

    /// Whether the workspace may use the integration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub usage_limits: Maybe<UsageLimit>,

    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub rate_limits: Maybe<Vec<RateLimit>>,
}

impl IntegrationWorkspace {
    /// Creates an enabled access entry for a workspace.
    pub fn enabled(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            enabled: Some(true),
            usage_limits: Maybe::Unset,
            rate_limits: Maybe::Unset,
        }
    }

    /// Sets, clears, or leaves the workspace usage limit (tri-state).
    pub fn usage_limits(mut self, usage_limits: impl Into<Maybe<UsageLimit>>) -> Self {
        self.usage_limits = usage_limits.into();
        self
    }

    /// Sets, clears, or leaves the workspace rate limits (tri-state).
    pub fn rate_limits(mut self, rate_limits: impl Into<Maybe<Vec<RateLimit>>>) -> Self {
        self.rate_limits = rate_limits.into();
        self
    }
}

/// Request payload for replacing an integration's workspace access list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateIntegrationWorkspacesRequest {
    /// Grant the integration to every workspace in the organisation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_workspace_access: Option<bool>,

    /// Per-workspace access entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workspaces: Vec<IntegrationWorkspace>,
}

impl UpdateIntegrationWorkspacesRequest {
    /// Replaces access with the given per-workspace entries.
    pub fn workspaces(workspaces: Vec<IntegrationWorkspace>) -> Self {
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

/// A model provisioned under an integration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IntegrationModel {
    /// Model slug, e.g. `"gpt-4o"`.
    #[serde(default)]
    pub slug: String,

    /// Whether the model is enabled for use through the integration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Custom pricing configuration, when overridden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_config: Option<Value>,
}

impl IntegrationModel {
    /// Creates an enabled model entry.
    pub fn enabled(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            enabled: Some(true),
            pricing_config: None,
        }
    }
}

/// Request payload for replacing an integration's provisioned model list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateIntegrationModelsRequest {
    /// Allow every model the provider exposes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_all_models: Option<bool>,

    /// Explicitly provisioned models.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<IntegrationModel>,
}

impl UpdateIntegrationModelsRequest {
    /// Replaces provisioning with the given model entries.
    pub fn models(models: Vec<IntegrationModel>) -> Self {
        Self {
            allow_all_models: None,
            models,
        }
    }

    /// Allows every model the provider exposes.
    pub fn allow_all() -> Self {
        Self {
            allow_all_models: Some(true),
            models: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_access_tri_state_limits() {
        let entry = IntegrationWorkspace::enabled("ws_1");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"workspace_id": "ws_1", "enabled": true})
        );

        let cleared = IntegrationWorkspace::enabled("ws_1").usage_limits(Maybe::Null);
        let json = serde_json::to_value(&cleared).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"workspace_id": "ws_1", "enabled": true, "usage_limits": null})
        );
    }

    #[test]
    fn test_allow_all_models_payload() {
        let request = UpdateIntegrationModelsRequest::allow_all();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"allow_all_models": true}));
    }
}
