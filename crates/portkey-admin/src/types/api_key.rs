//! API key types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::Maybe;
use super::limits::{RateLimit, UsageLimit};

/// Key type path segment used when creating an API key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ApiKeyType {
    /// Organisation-wide key.
    Organisation,
    /// Key scoped to a single workspace.
    Workspace,
}

/// Key sub-type path segment used when creating an API key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ApiKeySubType {
    /// Service key for machine use.
    Service,
    /// Key tied to a human user.
    User,
}

/// An API key record.
///
/// The secret key material is only returned once, on creation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiKey {
    /// Opaque key identifier.
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub key_type: Option<ApiKeyType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<ApiKeySubType>,

    /// Workspace the key is scoped to, for workspace keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    /// Gateway scopes granted to the key.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,

    /// Request defaults applied when the key is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<Value>,

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

/// Request payload for creating an API key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateApiKeyRequest {
    /// Display name for the key.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Target workspace, required for workspace keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<Value>,

    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub usage_limits: Maybe<UsageLimit>,

    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub rate_limits: Maybe<Vec<RateLimit>>,
}

impl CreateApiKeyRequest {
    /// Creates a request with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            workspace_id: None,
            scopes: Vec::new(),
            defaults: None,
            usage_limits: Maybe::Unset,
            rate_limits: Maybe::Unset,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Scopes the key to a workspace.
    pub fn workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    /// Grants a gateway scope.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Sets request defaults applied when the key is used.
    pub fn defaults(mut self, defaults: Value) -> Self {
        self.defaults = Some(defaults);
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

/// Response returned when an API key is created.
///
/// This is the only time the secret `key` value is available.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateApiKeyResponse {
    /// Identifier of the new key.
    #[serde(default)]
    pub id: String,

    /// The secret key material.
    #[serde(default)]
    pub key: String,
}

/// Request payload for updating an API key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateApiKeyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<Value>,

    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub usage_limits: Maybe<UsageLimit>,

    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub rate_limits: Maybe<Vec<RateLimit>>,
}

impl UpdateApiKeyRequest {
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

    /// Replaces the granted scopes.
    pub fn scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Sets request defaults applied when the key is used.
    pub fn defaults(mut self, defaults: Value) -> Self {
        self.defaults = Some(defaults);
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
    fn test_key_type_path_segments() {
        assert_eq!(ApiKeyType::Organisation.to_string(), "organisation");
        assert_eq!(ApiKeyType::Workspace.to_string(), "workspace");
        assert_eq!(ApiKeySubType::Service.to_string(), "service");
        assert_eq!(ApiKeySubType::User.to_string(), "user");
    }

    #[test]
    fn test_update_leaves_limits_unchanged_by_default() {
        let request = UpdateApiKeyRequest::default().name("renamed");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"name":"renamed"}"#);
    }

    #[test]
    fn test_update_can_clear_limits_explicitly() {
        let request = UpdateApiKeyRequest::default().usage_limits(Maybe::Null);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"usage_limits":null}"#);
    }

    #[test]
    fn test_update_can_replace_limits() {
        let request =
            UpdateApiKeyRequest::default().usage_limits(UsageLimit::credits(50.0));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"usage_limits": {"credit_limit": 50.0}})
        );
    }
}
