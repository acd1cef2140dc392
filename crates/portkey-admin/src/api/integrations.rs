//! Integration operations, including workspace access and model provisioning.
//!
//! The API exposes no single-item endpoint for a workspace access entry or a
//! provisioned model; the "get one" methods list and scan client-side, and a
//! miss is a [`Error::NotFound`], never an empty record.

use crate::types::{
    CreateIntegrationRequest, Integration, IntegrationModel, IntegrationWorkspace, ListResponse,
    UpdateIntegrationModelsRequest, UpdateIntegrationRequest, UpdateIntegrationWorkspacesRequest,
};
use crate::{AdminClient, Error, Result, TRACING_TARGET_API};

fn integration_path(slug: &str) -> String {
    format!("/integrations/{slug}")
}

impl AdminClient {
    /// Creates an integration and returns the record with its generated id.
    pub async fn create_integration(
        &self,
        request: &CreateIntegrationRequest,
    ) -> Result<Integration> {
        tracing::debug!(
            target: TRACING_TARGET_API,
            name = %request.name,
            ai_provider = %request.ai_provider,
            "Creating integration"
        );
        self.post("/integrations", request).await
    }

    /// Fetches an integration by slug.
    pub async fn get_integration(&self, slug: &str) -> Result<Integration> {
        self.get(&integration_path(slug), &[]).await
    }

    /// Lists all integrations.
    pub async fn list_integrations(&self) -> Result<ListResponse<Integration>> {
        self.get("/integrations", &[]).await
    }

    /// Updates an integration and returns the refreshed record.
    pub async fn update_integration(
        &self,
        slug: &str,
        request: &UpdateIntegrationRequest,
    ) -> Result<Integration> {
        self.put_no_content(&integration_path(slug), request).await?;
        self.get_integration(slug)
            .await
            .map_err(|e| Error::follow_up_fetch("integration", e))
    }

    /// Deletes an integration.
    pub async fn delete_integration(&self, slug: &str) -> Result<()> {
        self.delete(&integration_path(slug)).await
    }

    /// Lists the workspaces with access to an integration.
    pub async fn list_integration_workspaces(
        &self,
        slug: &str,
    ) -> Result<ListResponse<IntegrationWorkspace>> {
        let path = format!("/integrations/{slug}/workspaces");
        self.get(&path, &[]).await
    }

    /// Fetches one workspace access entry by workspace id.
    ///
    /// Implemented client-side by listing and scanning; a miss is an error.
    pub async fn get_integration_workspace(
        &self,
        slug: &str,
        workspace_id: &str,
    ) -> Result<IntegrationWorkspace> {
        let list = self.list_integration_workspaces(slug).await?;
        list.data
            .into_iter()
            .find(|entry| entry.workspace_id == workspace_id)
            .ok_or_else(|| Error::not_found("integration workspace", workspace_id))
    }

    /// Replaces an integration's workspace access list.
    pub async fn update_integration_workspaces(
        &self,
        slug: &str,
        request: &UpdateIntegrationWorkspacesRequest,
    ) -> Result<()> {
        let path = format!("/integrations/{slug}/workspaces");
        self.put_no_content(&path, request).await
    }

    /// Lists the models provisioned under an integration.
    pub async fn list_integration_models(
        &self,
        slug: &str,
    ) -> Result<ListResponse<IntegrationModel>> {
        let path = format!("/integrations/{slug}/models");
        self.get(&path, &[]).await
    }

    /// Fetches one provisioned model by model slug.
    ///
    /// Implemented client-side by listing and scanning; a miss is an error.
    pub async fn get_integration_model(
        &self,
        slug: &str,
        model_slug: &str,
    ) -> Result<IntegrationModel> {
        let list = self.list_integration_models(slug).await?;
        list.data
            .into_iter()
            .find(|model| model.slug == model_slug)
            .ok_or_else(|| Error::not_found("integration model", model_slug))
    }

    /// Replaces an integration's provisioned model list.
    pub async fn update_integration_models(
        &self,
        slug: &str,
        request: &UpdateIntegrationModelsRequest,
    ) -> Result<()> {
        let path = format!("/integrations/{slug}/models");
        self.put_no_content(&path, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(integration_path("openai-prod"), "/integrations/openai-prod");
    }
}
