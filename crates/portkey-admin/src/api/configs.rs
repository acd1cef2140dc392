//! Gateway config operations.

use super::workspace_filter;
use crate::types::{CreateConfigRequest, GatewayConfig, ListResponse, UpdateConfigRequest};
use crate::{AdminClient, Error, Result, TRACING_TARGET_API};

fn config_path(slug: &str) -> String {
    format!("/configs/{slug}")
}

impl AdminClient {
    /// Creates a gateway config and returns the record with its generated id.
    pub async fn create_config(&self, request: &CreateConfigRequest) -> Result<GatewayConfig> {
        tracing::debug!(target: TRACING_TARGET_API, name = %request.name, "Creating config");
        self.post("/configs", request).await
    }

    /// Fetches a gateway config by slug.
    ///
    /// The `config` field is normalized regardless of whether the server sent
    /// it as a JSON string or a native object.
    pub async fn get_config(&self, slug: &str) -> Result<GatewayConfig> {
        self.get(&config_path(slug), &[]).await
    }

    /// Lists gateway configs, optionally filtered to one workspace.
    pub async fn list_configs(
        &self,
        workspace_id: Option<&str>,
    ) -> Result<ListResponse<GatewayConfig>> {
        self.get("/configs", &workspace_filter(workspace_id)).await
    }

    /// Updates a gateway config and returns the refreshed record.
    pub async fn update_config(
        &self,
        slug: &str,
        request: &UpdateConfigRequest,
    ) -> Result<GatewayConfig> {
        self.put_no_content(&config_path(slug), request).await?;
        self.get_config(slug)
            .await
            .map_err(|e| Error::follow_up_fetch("config", e))
    }

    /// Deletes a gateway config.
    pub async fn delete_config(&self, slug: &str) -> Result<()> {
        self.delete(&config_path(slug)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(config_path("pc-default"), "/configs/pc-default");
    }
}
