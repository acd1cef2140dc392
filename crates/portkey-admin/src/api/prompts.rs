//! Prompt and prompt partial operations.
//!
//! Unlike the other resources, prompt updates return a usable body: possibly an
//! empty JSON object on name-only updates, which the tolerant response structs
//! absorb. No follow-up Get is chained here.

use super::workspace_filter;
use crate::types::{
    CreatePromptPartialRequest, CreatePromptRequest, ListResponse, MakeDefaultRequest, Prompt,
    PromptPartial, UpdatePromptPartialRequest, UpdatePromptPartialResponse, UpdatePromptRequest,
    UpdatePromptResponse,
};
use crate::{AdminClient, Result, TRACING_TARGET_API};

fn prompt_path(slug_or_id: &str) -> String {
    format!("/prompts/{slug_or_id}")
}

fn partial_path(slug_or_id: &str) -> String {
    format!("/prompts/partials/{slug_or_id}")
}

impl AdminClient {
    /// Creates a prompt and returns the record with its generated id.
    pub async fn create_prompt(&self, request: &CreatePromptRequest) -> Result<Prompt> {
        tracing::debug!(target: TRACING_TARGET_API, name = %request.name, "Creating prompt");
        self.post("/prompts", request).await
    }

    /// Fetches a prompt by slug or id.
    pub async fn get_prompt(&self, slug_or_id: &str) -> Result<Prompt> {
        self.get(&prompt_path(slug_or_id), &[]).await
    }

    /// Lists prompts, optionally filtered to one workspace.
    pub async fn list_prompts(&self, workspace_id: Option<&str>) -> Result<ListResponse<Prompt>> {
        self.get("/prompts", &workspace_filter(workspace_id)).await
    }

    /// Updates a prompt.
    ///
    /// A name-only update creates no new version and the API answers with an
    /// empty object; the response then has every field `None`.
    pub async fn update_prompt(
        &self,
        slug_or_id: &str,
        request: &UpdatePromptRequest,
    ) -> Result<UpdatePromptResponse> {
        self.put(&prompt_path(slug_or_id), request).await
    }

    /// Deletes a prompt.
    pub async fn delete_prompt(&self, slug_or_id: &str) -> Result<()> {
        self.delete(&prompt_path(slug_or_id)).await
    }

    /// Promotes a prompt version to default.
    pub async fn make_prompt_default(&self, slug_or_id: &str, version: u64) -> Result<()> {
        let path = format!("/prompts/{slug_or_id}/makeDefault");
        self.post_no_content(&path, &MakeDefaultRequest::new(version))
            .await
    }

    /// Creates a prompt partial and returns the record with its generated id.
    pub async fn create_prompt_partial(
        &self,
        request: &CreatePromptPartialRequest,
    ) -> Result<PromptPartial> {
        tracing::debug!(target: TRACING_TARGET_API, name = %request.name, "Creating prompt partial");
        self.post("/prompts/partials", request).await
    }

    /// Fetches a prompt partial by slug or id.
    pub async fn get_prompt_partial(&self, slug_or_id: &str) -> Result<PromptPartial> {
        self.get(&partial_path(slug_or_id), &[]).await
    }

    /// Lists prompt partials, optionally filtered to one workspace.
    pub async fn list_prompt_partials(
        &self,
        workspace_id: Option<&str>,
    ) -> Result<ListResponse<PromptPartial>> {
        self.get("/prompts/partials", &workspace_filter(workspace_id))
            .await
    }

    /// Updates a prompt partial, tolerating an empty-object response exactly
    /// like [`update_prompt`](Self::update_prompt).
    pub async fn update_prompt_partial(
        &self,
        slug_or_id: &str,
        request: &UpdatePromptPartialRequest,
    ) -> Result<UpdatePromptPartialResponse> {
        self.put(&partial_path(slug_or_id), request).await
    }

    /// Deletes a prompt partial.
    pub async fn delete_prompt_partial(&self, slug_or_id: &str) -> Result<()> {
        self.delete(&partial_path(slug_or_id)).await
    }

    /// Promotes a prompt partial version to default.
    pub async fn make_prompt_partial_default(&self, slug_or_id: &str, version: u64) -> Result<()> {
        let path = format!("/prompts/partials/{slug_or_id}/makeDefault");
        self.post_no_content(&path, &MakeDefaultRequest::new(version))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(prompt_path("greeting"), "/prompts/greeting");
        assert_eq!(partial_path("header"), "/prompts/partials/header");
    }
}
