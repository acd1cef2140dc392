//! Guardrail operations.

use super::workspace_filter;
use crate::types::{CreateGuardrailRequest, Guardrail, ListResponse, UpdateGuardrailRequest};
use crate::{AdminClient, Error, Result, TRACING_TARGET_API};

fn guardrail_path(slug_or_id: &str) -> String {
    format!("/guardrails/{slug_or_id}")
}

impl AdminClient {
    /// Creates a guardrail and returns the record with its generated id.
    pub async fn create_guardrail(&self, request: &CreateGuardrailRequest) -> Result<Guardrail> {
        tracing::debug!(target: TRACING_TARGET_API, name = %request.name, "Creating guardrail");
        self.post("/guardrails", request).await
    }

    /// Fetches a guardrail by slug or id.
    pub async fn get_guardrail(&self, slug_or_id: &str) -> Result<Guardrail> {
        self.get(&guardrail_path(slug_or_id), &[]).await
    }

    /// Lists guardrails, optionally filtered to one workspace.
    pub async fn list_guardrails(
        &self,
        workspace_id: Option<&str>,
    ) -> Result<ListResponse<Guardrail>> {
        self.get("/guardrails", &workspace_filter(workspace_id)).await
    }

    /// Updates a guardrail and returns the refreshed record.
    pub async fn update_guardrail(
        &self,
        slug_or_id: &str,
        request: &UpdateGuardrailRequest,
    ) -> Result<Guardrail> {
        self.put_no_content(&guardrail_path(slug_or_id), request)
            .await?;
        self.get_guardrail(slug_or_id)
            .await
            .map_err(|e| Error::follow_up_fetch("guardrail", e))
    }

    /// Deletes a guardrail.
    pub async fn delete_guardrail(&self, slug_or_id: &str) -> Result<()> {
        self.delete(&guardrail_path(slug_or_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(guardrail_path("pii-check"), "/guardrails/pii-check");
    }
}
