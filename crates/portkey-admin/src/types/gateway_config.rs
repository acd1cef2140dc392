//! Gateway config types.
//!
//! The API is inconsistent about the `config` field: some endpoints return it as
//! a JSON-encoded string, others as a native object. [`ConfigData`] absorbs both
//! and always exposes both representations.

use jiff::Timestamp;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// The routing configuration carried by a gateway config.
///
/// Holds the same content twice: the raw JSON text and the parsed value. Which
/// encoding the server used on the wire is invisible to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigData {
    raw: String,
    parsed: Value,
}

impl ConfigData {
    /// Creates config data from a parsed value.
    pub fn from_value(parsed: Value) -> Self {
        let raw = parsed.to_string();
        Self { raw, parsed }
    }

    /// Creates config data from raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error if `raw` is not valid JSON.
    pub fn from_raw(raw: impl Into<String>) -> serde_json::Result<Self> {
        let raw = raw.into();
        let parsed = serde_json::from_str(&raw)?;
        Ok(Self { raw, parsed })
    }

    /// Returns the raw JSON text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed value.
    pub fn parsed(&self) -> &Value {
        &self.parsed
    }
}

impl Serialize for ConfigData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Always sent as a native object; the string encoding only occurs in
        // responses.
        self.parsed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ConfigData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::String(raw) => {
                let parsed: Value = serde_json::from_str(&raw).map_err(|e| {
                    D::Error::custom(format!("config field is not valid JSON: {e}"))
                })?;
                // Re-encode so the raw form is canonical regardless of the
                // server's whitespace
                Ok(Self::from_value(parsed))
            }
            parsed => Ok(Self::from_value(parsed)),
        }
    }
}

/// A gateway config record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Opaque config identifier.
    #[serde(default)]
    pub id: String,

    /// Human-readable unique identifier; endpoints address configs by slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Routing configuration, accepted as string or object on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigData>,

    /// Workspace the config belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Timestamp>,
}

/// Request payload for creating a gateway config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateConfigRequest {
    /// Display name.
    pub name: String,

    /// Routing configuration.
    pub config: ConfigData,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

impl CreateConfigRequest {
    /// Creates a request with the given name and routing configuration.
    pub fn new(name: impl Into<String>, config: ConfigData) -> Self {
        Self {
            name: name.into(),
            config,
            workspace_id: None,
            is_default: None,
        }
    }

    /// Scopes the config to a workspace.
    pub fn workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    /// Marks the config as the workspace default.
    pub fn is_default(mut self, is_default: bool) -> Self {
        self.is_default = Some(is_default);
        self
    }
}

/// Request payload for updating a gateway config.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateConfigRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl UpdateConfigRequest {
    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the routing configuration.
    pub fn config(mut self, config: ConfigData) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_config_field_accepts_string_encoding() {
        let record: GatewayConfig =
            serde_json::from_str(r#"{"id":"cfg_1","config":"{\"a\":1}"}"#).unwrap();

        let config = record.config.unwrap();
        assert_eq!(config.parsed(), &json!({"a": 1}));
        assert_eq!(config.raw(), r#"{"a":1}"#);
    }

    #[test]
    fn test_config_field_accepts_object_encoding() {
        let record: GatewayConfig =
            serde_json::from_str(r#"{"id":"cfg_1","config":{"a":1}}"#).unwrap();

        let config = record.config.unwrap();
        assert_eq!(config.parsed(), &json!({"a": 1}));
        assert_eq!(config.raw(), r#"{"a":1}"#);
    }

    #[test]
    fn test_both_encodings_normalize_identically() {
        let from_string: GatewayConfig =
            serde_json::from_str(r#"{"config":"{\"a\":1}"}"#).unwrap();
        let from_object: GatewayConfig = serde_json::from_str(r#"{"config":{"a":1}}"#).unwrap();
        assert_eq!(from_string.config, from_object.config);
    }

    #[test]
    fn test_malformed_string_config_is_a_deserialization_error() {
        let result: Result<GatewayConfig, _> =
            serde_json::from_str(r#"{"config":"not json"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serializes_as_native_object() {
        let request = CreateConfigRequest::new(
            "default-routing",
            ConfigData::from_value(json!({"retry": {"attempts": 3}})),
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({"name": "default-routing", "config": {"retry": {"attempts": 3}}})
        );
    }
}
