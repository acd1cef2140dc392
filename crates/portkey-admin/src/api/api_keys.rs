//! API key operations.

use super::workspace_filter;
use crate::types::{
    ApiKey, ApiKeySubType, ApiKeyType, CreateApiKeyRequest, CreateApiKeyResponse, ListResponse,
    UpdateApiKeyRequest,
};
use crate::{AdminClient, Error, Result, TRACING_TARGET_API};

fn api_key_path(id: &str) -> String {
    format!("/api-keys/{id}")
}

impl AdminClient {
    /// Creates an API key; the response is the only place the secret key
    /// material is ever returned.
    ///
    /// The key type and sub-type become path segments:
    /// `POST /api-keys/{key_type}/{sub_type}`.
    pub async fn create_api_key(
        &self,
        key_type: ApiKeyType,
        sub_type: ApiKeySubType,
        request: &CreateApiKeyRequest,
    ) -> Result<CreateApiKeyResponse> {
        tracing::debug!(
            target: TRACING_TARGET_API,
            %key_type,
            %sub_type,
            name = %request.name,
            "Creating API key"
        );
        let path = format!("/api-keys/{key_type}/{sub_type}");
        self.post(&path, request).await
    }

    /// Fetches an API key by id.
    pub async fn get_api_key(&self, id: &str) -> Result<ApiKey> {
        self.get(&api_key_path(id), &[]).await
    }

    /// Lists API keys, optionally filtered to one workspace.
    pub async fn list_api_keys(&self, workspace_id: Option<&str>) -> Result<ListResponse<ApiKey>> {
        self.get("/api-keys", &workspace_filter(workspace_id)).await
    }

    /// Updates an API key and returns the refreshed record.
    pub async fn update_api_key(&self, id: &str, request: &UpdateApiKeyRequest) -> Result<ApiKey> {
        self.put_no_content(&api_key_path(id), request).await?;
        self.get_api_key(id)
            .await
            .map_err(|e| Error::follow_up_fetch("API key", e))
    }

    /// Revokes an API key.
    pub async fn delete_api_key(&self, id: &str) -> Result<()> {
        self.delete(&api_key_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_path_segments() {
        let path = format!(
            "/api-keys/{}/{}",
            ApiKeyType::Workspace,
            ApiKeySubType::Service
        );
        assert_eq!(path, "/api-keys/workspace/service");
    }

    #[test]
    fn test_api_key_path() {
        assert_eq!(api_key_path("key_1"), "/api-keys/key_1");
    }
}
