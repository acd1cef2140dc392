//! Organisation user and invite types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// An organisation user record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    /// Opaque user identifier.
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Organisation role, e.g. `"admin"`, `"manager"`, or `"member"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Timestamp>,
}

/// Request payload for updating an organisation user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New organisation role.
    pub role: String,
}

impl UpdateUserRequest {
    /// Creates a role-change request.
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }
}

/// Workspace access granted along with an invite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteWorkspaceAccess {
    /// Workspace identifier.
    pub id: String,

    /// Role to grant in that workspace.
    pub role: String,
}

impl InviteWorkspaceAccess {
    /// Grants `role` in workspace `id`.
    pub fn new(id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
        }
    }
}

/// Request payload for inviting a user to the organisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteUserRequest {
    /// Email address to invite.
    pub email: String,

    /// Organisation role for the invited user.
    pub role: String,

    /// Workspaces the invited user gets access to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workspaces: Vec<InviteWorkspaceAccess>,
}

impl InviteUserRequest {
    /// Creates an invite for `email` with the given organisation role.
    pub fn new(email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: role.into(),
            workspaces: Vec::new(),
        }
    }

    /// Grants access to a workspace alongside the invite.
    pub fn workspace(mut self, access: InviteWorkspaceAccess) -> Self {
        self.workspaces.push(access);
        self
    }
}

/// A pending or resolved user invite.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserInvite {
    /// Opaque invite identifier.
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Invite status, e.g. `"pending"`, `"accepted"`, or `"expired"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workspaces: Vec<InviteWorkspaceAccess>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<Timestamp>,
}
