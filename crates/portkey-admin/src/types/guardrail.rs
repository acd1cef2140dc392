//! Guardrail types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A guardrail record.
///
/// Checks and actions are provider-defined object trees; the client passes them
/// through without interpretation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Guardrail {
    /// Opaque guardrail identifier.
    #[serde(default)]
    pub id: String,

    /// Human-readable unique identifier; endpoints accept slug or id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Ordered guardrail checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checks: Option<Value>,

    /// Actions taken when checks fire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Value>,

    /// Workspace the guardrail belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Timestamp>,
}

/// Request payload for creating a guardrail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGuardrailRequest {
    /// Display name.
    pub name: String,

    /// Ordered guardrail checks.
    pub checks: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

impl CreateGuardrailRequest {
    /// Creates a guardrail request with the given checks.
    pub fn new(name: impl Into<String>, checks: Value) -> Self {
        Self {
            name: name.into(),
            checks,
            actions: None,
            workspace_id: None,
        }
    }

    /// Sets the actions taken when checks fire.
    pub fn actions(mut self, actions: Value) -> Self {
        self.actions = Some(actions);
        self
    }

    /// Scopes the guardrail to a workspace.
    pub fn workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }
}

/// Request payload for updating a guardrail.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateGuardrailRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checks: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Value>,
}

impl UpdateGuardrailRequest {
    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the checks.
    pub fn checks(mut self, checks: Value) -> Self {
        self.checks = Some(checks);
        self
    }

    /// Replaces the actions.
    pub fn actions(mut self, actions: Value) -> Self {
        self.actions = Some(actions);
        self
    }
}
