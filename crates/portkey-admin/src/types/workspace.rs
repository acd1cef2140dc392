//! Workspace and workspace member types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A workspace record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workspace {
    /// Opaque workspace identifier.
    #[serde(default)]
    pub id: String,

    /// Human-readable unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Workspace-level defaults (metadata object, provider defaults, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Timestamp>,
}

/// Request payload for creating a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateWorkspaceRequest {
    /// Display name for the new workspace.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<Value>,
}

impl CreateWorkspaceRequest {
    /// Creates a request with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            defaults: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets workspace-level defaults.
    pub fn defaults(mut self, defaults: Value) -> Self {
        self.defaults = Some(defaults);
        self
    }
}

/// Request payload for updating a workspace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateWorkspaceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<Value>,
}

impl UpdateWorkspaceRequest {
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

    /// Sets workspace-level defaults.
    pub fn defaults(mut self, defaults: Value) -> Self {
        self.defaults = Some(defaults);
        self
    }
}

/// Request payload for deleting a workspace.
///
/// The API requires the caller to echo the workspace name and to set `force`
/// explicitly. The client sends both exactly as given; matching the name is
/// validated server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteWorkspaceRequest {
    /// Echo of the workspace name, verified by the server.
    pub name: String,

    /// Delete even when the workspace still contains resources.
    pub force: bool,
}

impl DeleteWorkspaceRequest {
    /// Creates a deletion confirmation echoing `name`.
    pub fn new(name: impl Into<String>, force: bool) -> Self {
        Self {
            name: name.into(),
            force,
        }
    }
}

/// A workspace member record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkspaceMember {
    /// Membership identifier. The single-member endpoint omits this; it is
    /// backfilled from `user_id` during normalization.
    #[serde(default)]
    pub id: String,

    /// Identifier of the underlying organisation user.
    #[serde(default)]
    pub user_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Workspace role, e.g. `"admin"`, `"manager"`, or `"member"`.
    ///
    /// Some endpoints report roles with a `ws-` prefix; normalization strips it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Timestamp>,
}

impl WorkspaceMember {
    /// Normalizes a member record as returned by the API.
    ///
    /// Strips the `ws-` prefix from the role string and backfills `id` from
    /// `user_id` when the endpoint omitted it.
    pub(crate) fn normalize(mut self) -> Self {
        if let Some(role) = self.role.take() {
            let role = role.strip_prefix("ws-").map(str::to_string).unwrap_or(role);
            self.role = Some(role);
        }
        if self.id.is_empty() && !self.user_id.is_empty() {
            self.id = self.user_id.clone();
        }
        self
    }
}

/// Parameters for adding one user to a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddWorkspaceMemberRequest {
    /// Identifier of the organisation user to add.
    pub id: String,

    /// Workspace role to grant, e.g. `"member"`.
    pub role: String,
}

impl AddWorkspaceMemberRequest {
    /// Creates parameters for granting `role` to user `id`.
    pub fn new(id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
        }
    }
}

/// Wire payload for the add-member endpoint: a single-element `users` list.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AddWorkspaceMembersBody<'a> {
    pub users: [&'a AddWorkspaceMemberRequest; 1],
}

/// Request payload for updating a workspace member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateWorkspaceMemberRequest {
    /// New workspace role.
    pub role: String,
}

impl UpdateWorkspaceMemberRequest {
    /// Creates a role-change request.
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_normalization_strips_role_prefix() {
        let member = WorkspaceMember {
            role: Some("ws-admin".to_string()),
            ..Default::default()
        };
        assert_eq!(member.normalize().role.as_deref(), Some("admin"));

        // Unprefixed roles pass through untouched
        let member = WorkspaceMember {
            role: Some("member".to_string()),
            ..Default::default()
        };
        assert_eq!(member.normalize().role.as_deref(), Some("member"));
    }

    #[test]
    fn test_member_normalization_backfills_id() {
        let member = WorkspaceMember {
            id: String::new(),
            user_id: "user_123".to_string(),
            ..Default::default()
        };
        assert_eq!(member.normalize().id, "user_123");

        // An id reported by the API wins over the backfill
        let member = WorkspaceMember {
            id: "member_9".to_string(),
            user_id: "user_123".to_string(),
            ..Default::default()
        };
        assert_eq!(member.normalize().id, "member_9");
    }

    #[test]
    fn test_delete_request_echoes_name_untouched() {
        let request = DeleteWorkspaceRequest::new("Production", true);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Production", "force": true}));
    }

    #[test]
    fn test_add_member_body_wraps_a_single_element_list() {
        let params = AddWorkspaceMemberRequest::new("user_123", "member");
        let body = AddWorkspaceMembersBody { users: [&params] };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"users": [{"id": "user_123", "role": "member"}]})
        );
    }
}
