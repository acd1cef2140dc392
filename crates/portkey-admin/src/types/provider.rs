//! Provider types (workspace-level handles onto an integration).

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::common::Maybe;
use super::limits::{RateLimit, UsageLimit};

/// A provider record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Provider {
    /// Opaque provider identifier.
    #[serde(default)]
    pub id: String,

    /// Human-readable unique identifier, referenced from gateway configs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Integration the provider draws credentials from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<String>,

    /// Workspace the provider belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_limits: Option<UsageLimit>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rate_limits: Vec<RateLimit>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Timestamp>,
}

/// Request payload for creating a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProviderRequest {
    /// Display name.
    pub name: String,

    /// Integration to draw credentials from.
    pub integration_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub usage_limits: Maybe<UsageLimit>,

    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub rate_limits: Maybe<Vec<RateLimit>>,
}

impl CreateProviderRequest {
    /// Creates a request binding `name` to an integration.
    pub fn new(name: impl Into<String>, integration_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            integration_id: integration_id.into(),
            slug: None,
            note: None,
            workspace_id: None,
            usage_limits: Maybe::Unset,
            rate_limits: Maybe::Unset,
        }
    }

    /// Sets an explicit slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Sets a note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Scopes the provider to a workspace.
    pub fn workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    /// Sets, clears, or leaves the usage limit (tri-state).
    pub fn usage_limits(mut self, usage_limits: impl Into<Maybe<UsageLimit>>) -> Self {
        self.usage_limits = usage_limits.into();
        self
    }

    /// Sets, clears, or leaves the rate limits (tri-state).
    pub fn rate_limits(mut self, rate_limits: impl Into<Maybe<Vec<RateLimit>>>) -> Self {
        self.rate_limits = rate_limits.into();
        self
    }
}

/// Request payload for updating a provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateProviderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub usage_limits: Maybe<UsageLimit>,

    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub rate_limits: Maybe<Vec<RateLimit>>,
}

impl UpdateProviderRequest {
    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Sets, clears, or leaves the usage limit (tri-state).
    pub fn usage_limits(mut self, usage_limits: impl Into<Maybe<UsageLimit>>) -> Self {
        self.usage_limits = usage_limits.into();
        self
    }

    /// Sets, clears, or leaves the rate limits (tri-state).
    pub fn rate_limits(mut self, rate_limits: impl Into<Maybe<Vec<RateLimit>>>) -> Self {
        self.rate_limits = rate_limits.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_with_no_fields_is_an_empty_object() {
        let json = serde_json::to_string(&UpdateProviderRequest::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_create_payload_shape() {
        let request = CreateProviderRequest::new("openai-prod", "int_1")
            .workspace_id("ws_1")
            .usage_limits(UsageLimit::credits(100.0));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "openai-prod",
                "integration_id": "int_1",
                "workspace_id": "ws_1",
                "usage_limits": {"credit_limit": 100.0},
            })
        );
    }
}
