//! Usage-limit and rate-limit policy types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::common::Maybe;
use super::limits::{RateLimit, UsageLimit};

/// A usage-limit policy record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UsageLimitsPolicy {
    /// Opaque policy identifier.
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Workspace the policy applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_limits: Option<UsageLimit>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Timestamp>,
}

/// Request payload for creating a usage-limit policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUsageLimitsPolicyRequest {
    /// Display name.
    pub name: String,

    /// Limit enforced by the policy.
    pub usage_limits: UsageLimit,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

impl CreateUsageLimitsPolicyRequest {
    /// Creates a policy request enforcing `usage_limits`.
    pub fn new(name: impl Into<String>, usage_limits: UsageLimit) -> Self {
        Self {
            name: name.into(),
            usage_limits,
            description: None,
            workspace_id: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Scopes the policy to a workspace.
    pub fn workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }
}

/// Request payload for updating a usage-limit policy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateUsageLimitsPolicyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Limit change: omitted leaves it, null clears it, a value replaces it.
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub usage_limits: Maybe<UsageLimit>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl UpdateUsageLimitsPolicyRequest {
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

    /// Sets, clears, or leaves the enforced limit (tri-state).
    pub fn usage_limits(mut self, usage_limits: impl Into<Maybe<UsageLimit>>) -> Self {
        self.usage_limits = usage_limits.into();
        self
    }

    /// Sets the status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// A rate-limit policy record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RateLimitsPolicy {
    /// Opaque policy identifier.
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Workspace the policy applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rate_limits: Vec<RateLimit>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Timestamp>,
}

/// Request payload for creating a rate-limit policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRateLimitsPolicyRequest {
    /// Display name.
    pub name: String,

    /// Rules enforced by the policy.
    pub rate_limits: Vec<RateLimit>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

impl CreateRateLimitsPolicyRequest {
    /// Creates a policy request enforcing `rate_limits`.
    pub fn new(name: impl Into<String>, rate_limits: Vec<RateLimit>) -> Self {
        Self {
            name: name.into(),
            rate_limits,
            description: None,
            workspace_id: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Scopes the policy to a workspace.
    pub fn workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }
}

/// Request payload for updating a rate-limit policy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateRateLimitsPolicyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Rule change: omitted leaves them, null clears them, a list replaces them.
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub rate_limits: Maybe<Vec<RateLimit>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl UpdateRateLimitsPolicyRequest {
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

    /// Sets, clears, or leaves the enforced rules (tri-state).
    pub fn rate_limits(mut self, rate_limits: impl Into<Maybe<Vec<RateLimit>>>) -> Self {
        self.rate_limits = rate_limits.into();
        self
    }

    /// Sets the status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_limit_tri_state_payloads() {
        // No value set: the key is omitted entirely
        let unchanged = UpdateUsageLimitsPolicyRequest::default().name("renamed");
        assert_eq!(
            serde_json::to_string(&unchanged).unwrap(),
            r#"{"name":"renamed"}"#
        );

        // Explicit null: the key is present and null
        let cleared = UpdateUsageLimitsPolicyRequest::default().usage_limits(Maybe::Null);
        assert_eq!(
            serde_json::to_string(&cleared).unwrap(),
            r#"{"usage_limits":null}"#
        );

        // Value set: the key carries the value
        let replaced =
            UpdateUsageLimitsPolicyRequest::default().usage_limits(UsageLimit::credits(25.0));
        assert_eq!(
            serde_json::to_string(&replaced).unwrap(),
            r#"{"usage_limits":{"credit_limit":25.0}}"#
        );
    }

    #[test]
    fn test_rate_limit_replacement_payload() {
        let request = UpdateRateLimitsPolicyRequest::default()
            .rate_limits(vec![RateLimit::requests_per_minute(60)]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "rate_limits": [{"type": "requests", "unit": "rpm", "value": 60}],
            })
        );
    }
}
