//! Prompt collection types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A prompt collection record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Collection {
    /// Opaque collection identifier.
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Parent collection, when nested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_collection_id: Option<String>,

    /// Workspace the collection belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Timestamp>,
}

/// Request payload for creating a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCollectionRequest {
    /// Display name.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_collection_id: Option<String>,
}

impl CreateCollectionRequest {
    /// Creates a collection request with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            workspace_id: None,
            parent_collection_id: None,
        }
    }

    /// Scopes the collection to a workspace.
    pub fn workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    /// Nests the collection under a parent.
    pub fn parent_collection_id(mut self, parent_collection_id: impl Into<String>) -> Self {
        self.parent_collection_id = Some(parent_collection_id.into());
        self
    }
}

/// Request payload for updating a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCollectionRequest {
    /// New display name.
    pub name: String,
}

impl UpdateCollectionRequest {
    /// Creates a rename request.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
