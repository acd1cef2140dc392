//! Organisation user and invite operations.

use serde_json::json;

use crate::types::{InviteUserRequest, ListResponse, UpdateUserRequest, User, UserInvite};
use crate::{AdminClient, Error, Result, TRACING_TARGET_API};

fn user_path(id: &str) -> String {
    format!("/admin/users/{id}")
}

fn invite_path(id: &str) -> String {
    format!("/admin/users/invites/{id}")
}

impl AdminClient {
    /// Fetches an organisation user by id.
    pub async fn get_user(&self, id: &str) -> Result<User> {
        self.get(&user_path(id), &[]).await
    }

    /// Lists all organisation users.
    pub async fn list_users(&self) -> Result<ListResponse<User>> {
        self.get("/admin/users", &[]).await
    }

    /// Updates a user's organisation role and returns the refreshed record.
    pub async fn update_user(&self, id: &str, request: &UpdateUserRequest) -> Result<User> {
        self.put_no_content(&user_path(id), request).await?;
        self.get_user(id)
            .await
            .map_err(|e| Error::follow_up_fetch("user", e))
    }

    /// Removes a user from the organisation.
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        self.delete(&user_path(id)).await
    }

    /// Invites a user to the organisation and returns the invite record.
    pub async fn invite_user(&self, request: &InviteUserRequest) -> Result<UserInvite> {
        tracing::debug!(target: TRACING_TARGET_API, email = %request.email, "Inviting user");
        self.post("/admin/users/invites", request).await
    }

    /// Fetches a user invite by id.
    pub async fn get_user_invite(&self, id: &str) -> Result<UserInvite> {
        self.get(&invite_path(id), &[]).await
    }

    /// Lists all user invites.
    pub async fn list_user_invites(&self) -> Result<ListResponse<UserInvite>> {
        self.get("/admin/users/invites", &[]).await
    }

    /// Revokes a pending user invite.
    pub async fn delete_user_invite(&self, id: &str) -> Result<()> {
        self.delete(&invite_path(id)).await
    }

    /// Resends a pending user invite.
    pub async fn resend_user_invite(&self, id: &str) -> Result<()> {
        let path = format!("/admin/users/invites/{id}/resend");
        self.post_no_content(&path, &json!({})).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(user_path("user_1"), "/admin/users/user_1");
        assert_eq!(invite_path("inv_1"), "/admin/users/invites/inv_1");
    }
}
