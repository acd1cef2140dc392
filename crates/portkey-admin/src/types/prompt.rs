//! Prompt and prompt partial types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A prompt record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Prompt {
    /// Opaque prompt identifier.
    #[serde(default)]
    pub id: String,

    /// Human-readable unique identifier; endpoints accept slug or id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Collection the prompt belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,

    /// Prompt template text.
    #[serde(rename = "string", default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Model parameters attached to the prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Provider the prompt runs against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_key: Option<String>,

    /// Current default version number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Timestamp>,
}

/// Request payload for creating a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePromptRequest {
    /// Display name.
    pub name: String,

    /// Collection to file the prompt under.
    pub collection_id: String,

    /// Prompt template text.
    #[serde(rename = "string")]
    pub template: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_description: Option<String>,
}

impl CreatePromptRequest {
    /// Creates a prompt request with a name, collection, and template.
    pub fn new(
        name: impl Into<String>,
        collection_id: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            collection_id: collection_id.into(),
            template: template.into(),
            parameters: None,
            model: None,
            virtual_key: None,
            version_description: None,
        }
    }

    /// Sets model parameters.
    pub fn parameters(mut self, parameters: Value) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Sets the model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the provider to run against.
    pub fn virtual_key(mut self, virtual_key: impl Into<String>) -> Self {
        self.virtual_key = Some(virtual_key.into());
        self
    }

    /// Describes the initial version.
    pub fn version_description(mut self, version_description: impl Into<String>) -> Self {
        self.version_description = Some(version_description.into());
        self
    }
}

/// Request payload for updating a prompt.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdatePromptRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "string", default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_description: Option<String>,
}

impl UpdatePromptRequest {
    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the template text.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Sets model parameters.
    pub fn parameters(mut self, parameters: Value) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Sets the model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the provider to run against.
    pub fn virtual_key(mut self, virtual_key: impl Into<String>) -> Self {
        self.virtual_key = Some(virtual_key.into());
        self
    }

    /// Describes the new version.
    pub fn version_description(mut self, version_description: impl Into<String>) -> Self {
        self.version_description = Some(version_description.into());
        self
    }
}

/// Response from a prompt update.
///
/// Name-only updates create no new version and the API returns an empty JSON
/// object; every field is optional so `{}` deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdatePromptResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Version created by the update, when one was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
}

/// Request payload for promoting a prompt version to default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MakeDefaultRequest {
    /// Version number to promote.
    pub version: u64,
}

impl MakeDefaultRequest {
    /// Promotes `version` to default.
    pub fn new(version: u64) -> Self {
        Self { version }
    }
}

/// A prompt partial record (a reusable template fragment).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PromptPartial {
    /// Opaque partial identifier.
    #[serde(default)]
    pub id: String,

    /// Human-readable unique identifier; endpoints accept slug or id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Partial template text.
    #[serde(rename = "string", default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Workspace the partial belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    /// Current default version number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Timestamp>,
}

/// Request payload for creating a prompt partial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePromptPartialRequest {
    /// Display name.
    pub name: String,

    /// Partial template text.
    #[serde(rename = "string")]
    pub template: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_description: Option<String>,
}

impl CreatePromptPartialRequest {
    /// Creates a partial request with a name and template.
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            workspace_id: None,
            version_description: None,
        }
    }

    /// Scopes the partial to a workspace.
    pub fn workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    /// Describes the initial version.
    pub fn version_description(mut self, version_description: impl Into<String>) -> Self {
        self.version_description = Some(version_description.into());
        self
    }
}

/// Request payload for updating a prompt partial.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdatePromptPartialRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "string", default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_description: Option<String>,
}

impl UpdatePromptPartialRequest {
    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the template text.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Describes the new version.
    pub fn version_description(mut self, version_description: impl Into<String>) -> Self {
        self.version_description = Some(version_description.into());
        self
    }
}

/// Response from a prompt partial update; tolerates an empty object exactly
/// like [`UpdatePromptResponse`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdatePromptPartialResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Version created by the update, when one was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_a_valid_update_response() {
        let response: UpdatePromptResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, UpdatePromptResponse::default());

        let response: UpdatePromptPartialResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, UpdatePromptPartialResponse::default());
    }

    #[test]
    fn test_template_uses_the_wire_name() {
        let request = CreatePromptRequest::new("greeting", "col_1", "Hello {{name}}");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["string"], "Hello {{name}}");
        assert!(json.get("template").is_none());
    }

    #[test]
    fn test_make_default_payload() {
        let json = serde_json::to_string(&MakeDefaultRequest::new(7)).unwrap();
        assert_eq!(json, r#"{"version":7}"#);
    }
}
