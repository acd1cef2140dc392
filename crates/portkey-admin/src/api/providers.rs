//! Provider operations.

use super::workspace_filter;
use crate::types::{CreateProviderRequest, ListResponse, Provider, UpdateProviderRequest};
use crate::{AdminClient, Error, Result, TRACING_TARGET_API};

fn provider_path(id: &str) -> String {
    format!("/providers/{id}")
}

impl AdminClient {
    /// Creates a provider and returns the record with its generated id.
    pub async fn create_provider(&self, request: &CreateProviderRequest) -> Result<Provider> {
        tracing::debug!(target: TRACING_TARGET_API, name = %request.name, "Creating provider");
        self.post("/providers", request).await
    }

    /// Fetches a provider by id or slug.
    pub async fn get_provider(&self, id: &str) -> Result<Provider> {
        self.get(&provider_path(id), &[]).await
    }

    /// Lists providers, optionally filtered to one workspace.
    pub async fn list_providers(&self, workspace_id: Option<&str>) -> Result<ListResponse<Provider>> {
        self.get("/providers", &workspace_filter(workspace_id)).await
    }

    /// Updates a provider and returns the refreshed record.
    pub async fn update_provider(
        &self,
        id: &str,
        request: &UpdateProviderRequest,
    ) -> Result<Provider> {
        self.put_no_content(&provider_path(id), request).await?;
        self.get_provider(id)
            .await
            .map_err(|e| Error::follow_up_fetch("provider", e))
    }

    /// Deletes a provider.
    pub async fn delete_provider(&self, id: &str) -> Result<()> {
        self.delete(&provider_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(provider_path("prov_1"), "/providers/prov_1");
    }
}
