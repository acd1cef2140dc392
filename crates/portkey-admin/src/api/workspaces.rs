//! Workspace and workspace member operations.

use crate::types::{
    AddWorkspaceMemberRequest, AddWorkspaceMembersBody, CreateWorkspaceRequest,
    DeleteWorkspaceRequest, ListResponse, UpdateWorkspaceMemberRequest, UpdateWorkspaceRequest,
    Workspace, WorkspaceMember,
};
use crate::{AdminClient, Error, Result, TRACING_TARGET_API};

fn workspace_path(id: &str) -> String {
    format!("/admin/workspaces/{id}")
}

fn member_path(workspace_id: &str, user_id: &str) -> String {
    format!("/admin/workspaces/{workspace_id}/users/{user_id}")
}

impl AdminClient {
    /// Creates a workspace and returns the record with its generated id.
    pub async fn create_workspace(&self, request: &CreateWorkspaceRequest) -> Result<Workspace> {
        tracing::debug!(target: TRACING_TARGET_API, name = %request.name, "Creating workspace");
        self.post("/admin/workspaces", request).await
    }

    /// Fetches a workspace by id or slug.
    pub async fn get_workspace(&self, id: &str) -> Result<Workspace> {
        self.get(&workspace_path(id), &[]).await
    }

    /// Lists all workspaces in the organisation.
    pub async fn list_workspaces(&self) -> Result<ListResponse<Workspace>> {
        self.get("/admin/workspaces", &[]).await
    }

    /// Updates a workspace and returns the refreshed record.
    ///
    /// The update endpoint returns no useful body, so the client performs one
    /// follow-up Get; if that Get fails the error reports that the update
    /// itself succeeded.
    pub async fn update_workspace(
        &self,
        id: &str,
        request: &UpdateWorkspaceRequest,
    ) -> Result<Workspace> {
        self.put_no_content(&workspace_path(id), request).await?;
        self.get_workspace(id)
            .await
            .map_err(|e| Error::follow_up_fetch("workspace", e))
    }

    /// Deletes a workspace.
    ///
    /// The API requires the request to echo the workspace name and set `force`
    /// explicitly; both are sent exactly as given and validated server-side.
    pub async fn delete_workspace(&self, id: &str, request: &DeleteWorkspaceRequest) -> Result<()> {
        tracing::debug!(target: TRACING_TARGET_API, id, force = request.force, "Deleting workspace");
        self.delete_with_body(&workspace_path(id), request).await
    }

    /// Adds a user to a workspace and returns the full member record.
    ///
    /// The add endpoint takes a single-element `users` list and returns nothing
    /// useful, so the client performs a follow-up Get for the details.
    pub async fn add_workspace_member(
        &self,
        workspace_id: &str,
        request: &AddWorkspaceMemberRequest,
    ) -> Result<WorkspaceMember> {
        let body = AddWorkspaceMembersBody { users: [request] };
        let path = format!("/admin/workspaces/{workspace_id}/users");
        self.post_no_content(&path, &body).await?;

        self.get_workspace_member(workspace_id, &request.id)
            .await
            .map_err(|e| Error::follow_up_fetch("workspace member", e))
    }

    /// Fetches a workspace member.
    ///
    /// The record is normalized: `ws-` role prefixes are stripped and a missing
    /// `id` is backfilled from `user_id` (the endpoint omits `id`).
    pub async fn get_workspace_member(
        &self,
        workspace_id: &str,
        user_id: &str,
    ) -> Result<WorkspaceMember> {
        let member: WorkspaceMember = self.get(&member_path(workspace_id, user_id), &[]).await?;
        Ok(member.normalize())
    }

    /// Lists the members of a workspace, normalized like
    /// [`get_workspace_member`](Self::get_workspace_member).
    pub async fn list_workspace_members(
        &self,
        workspace_id: &str,
    ) -> Result<ListResponse<WorkspaceMember>> {
        let path = format!("/admin/workspaces/{workspace_id}/users");
        let mut list: ListResponse<WorkspaceMember> = self.get(&path, &[]).await?;
        list.data = list.data.into_iter().map(WorkspaceMember::normalize).collect();
        Ok(list)
    }

    /// Updates a member's role and returns the refreshed member record.
    pub async fn update_workspace_member(
        &self,
        workspace_id: &str,
        user_id: &str,
        request: &UpdateWorkspaceMemberRequest,
    ) -> Result<WorkspaceMember> {
        self.put_no_content(&member_path(workspace_id, user_id), request)
            .await?;

        self.get_workspace_member(workspace_id, user_id)
            .await
            .map_err(|e| Error::follow_up_fetch("workspace member", e))
    }

    /// Removes a user from a workspace.
    pub async fn remove_workspace_member(&self, workspace_id: &str, user_id: &str) -> Result<()> {
        self.delete(&member_path(workspace_id, user_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(workspace_path("ws_1"), "/admin/workspaces/ws_1");
        assert_eq!(
            member_path("ws_1", "user_2"),
            "/admin/workspaces/ws_1/users/user_2"
        );
    }
}
