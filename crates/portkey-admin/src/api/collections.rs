//! Prompt collection operations.

use super::workspace_filter;
use crate::types::{Collection, CreateCollectionRequest, ListResponse, UpdateCollectionRequest};
use crate::{AdminClient, Error, Result, TRACING_TARGET_API};

fn collection_path(id: &str) -> String {
    format!("/collections/{id}")
}

impl AdminClient {
    /// Creates a collection and returns the record with its generated id.
    pub async fn create_collection(&self, request: &CreateCollectionRequest) -> Result<Collection> {
        tracing::debug!(target: TRACING_TARGET_API, name = %request.name, "Creating collection");
        self.post("/collections", request).await
    }

    /// Fetches a collection by id or slug.
    pub async fn get_collection(&self, id: &str) -> Result<Collection> {
        self.get(&collection_path(id), &[]).await
    }

    /// Lists collections, optionally filtered to one workspace.
    pub async fn list_collections(
        &self,
        workspace_id: Option<&str>,
    ) -> Result<ListResponse<Collection>> {
        self.get("/collections", &workspace_filter(workspace_id)).await
    }

    /// Renames a collection and returns the refreshed record.
    pub async fn update_collection(
        &self,
        id: &str,
        request: &UpdateCollectionRequest,
    ) -> Result<Collection> {
        self.put_no_content(&collection_path(id), request).await?;
        self.get_collection(id)
            .await
            .map_err(|e| Error::follow_up_fetch("collection", e))
    }

    /// Deletes a collection.
    pub async fn delete_collection(&self, id: &str) -> Result<()> {
        self.delete(&collection_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(collection_path("col_1"), "/collections/col_1");
    }
}
