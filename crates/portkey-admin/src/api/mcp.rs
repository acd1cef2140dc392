//! MCP integration operations, including capabilities and workspace access.

use super::workspace_filter;
use crate::types::{
    CreateMcpIntegrationRequest, ListResponse, McpCapability, McpIntegration, McpWorkspace,
    UpdateMcpCapabilitiesRequest, UpdateMcpIntegrationRequest, UpdateMcpWorkspacesRequest,
};
use crate::{AdminClient, Error, Result, TRACING_TARGET_API};

fn mcp_path(id: &str) -> String {
    format!("/mcp-integrations/{id}")
}

impl AdminClient {
    /// Creates an MCP integration and returns the record with its generated id.
    pub async fn create_mcp_integration(
        &self,
        request: &CreateMcpIntegrationRequest,
    ) -> Result<McpIntegration> {
        tracing::debug!(
            target: TRACING_TARGET_API,
            name = %request.name,
            url = %request.url,
            "Creating MCP integration"
        );
        self.post("/mcp-integrations", request).await
    }

    /// Fetches an MCP integration by id or slug.
    pub async fn get_mcp_integration(&self, id: &str) -> Result<McpIntegration> {
        self.get(&mcp_path(id), &[]).await
    }

    /// Lists MCP integrations, optionally filtered to one workspace.
    pub async fn list_mcp_integrations(
        &self,
        workspace_id: Option<&str>,
    ) -> Result<ListResponse<McpIntegration>> {
        self.get("/mcp-integrations", &workspace_filter(workspace_id))
            .await
    }

    /// Updates an MCP integration and returns the refreshed record.
    pub async fn update_mcp_integration(
        &self,
        id: &str,
        request: &UpdateMcpIntegrationRequest,
    ) -> Result<McpIntegration> {
        self.put_no_content(&mcp_path(id), request).await?;
        self.get_mcp_integration(id)
            .await
            .map_err(|e| Error::follow_up_fetch("MCP integration", e))
    }

    /// Deletes an MCP integration.
    pub async fn delete_mcp_integration(&self, id: &str) -> Result<()> {
        self.delete(&mcp_path(id)).await
    }

    /// Lists the capabilities an MCP integration exposes.
    pub async fn list_mcp_integration_capabilities(
        &self,
        id: &str,
    ) -> Result<ListResponse<McpCapability>> {
        let path = format!("/mcp-integrations/{id}/capabilities");
        self.get(&path, &[]).await
    }

    /// Replaces an MCP integration's capability list.
    pub async fn update_mcp_integration_capabilities(
        &self,
        id: &str,
        request: &UpdateMcpCapabilitiesRequest,
    ) -> Result<()> {
        let path = format!("/mcp-integrations/{id}/capabilities");
        self.put_no_content(&path, request).await
    }

    /// Lists the workspaces with access to an MCP integration.
    pub async fn list_mcp_integration_workspaces(
        &self,
        id: &str,
    ) -> Result<ListResponse<McpWorkspace>> {
        let path = format!("/mcp-integrations/{id}/workspaces");
        self.get(&path, &[]).await
    }

    /// Fetches one workspace access entry by workspace id.
    ///
    /// Implemented client-side by listing and scanning; a miss is an error.
    pub async fn get_mcp_integration_workspace(
        &self,
        id: &str,
        workspace_id: &str,
    ) -> Result<McpWorkspace> {
        let list = self.list_mcp_integration_workspaces(id).await?;
        list.data
            .into_iter()
            .find(|entry| entry.workspace_id == workspace_id)
            .ok_or_else(|| Error::not_found("MCP integration workspace", workspace_id))
    }

    /// Replaces an MCP integration's workspace access list.
    pub async fn update_mcp_integration_workspaces(
        &self,
        id: &str,
        request: &UpdateMcpWorkspacesRequest,
    ) -> Result<()> {
        let path = format!("/mcp-integrations/{id}/workspaces");
        self.put_no_content(&path, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(mcp_path("mcp_1"), "/mcp-integrations/mcp_1");
    }
}
