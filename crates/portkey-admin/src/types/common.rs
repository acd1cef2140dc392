//! Shared wire types: the list envelope and the tri-state request field.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The `{"data": [...]}` envelope used by every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// The listed records.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,

    /// Total number of records, when the endpoint reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: None,
        }
    }
}

impl<T> ListResponse<T> {
    /// Returns the number of listed records.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if no records were listed.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// A tri-state request field: omitted, explicitly null, or set to a value.
///
/// Plain `Option` fields only distinguish two states, which is not enough for
/// the limit fields on policies and API keys: leaving a limit unchanged, clearing
/// it, and replacing it are three different server-side effects. On the wire:
///
/// - [`Maybe::Unset`] — the key is omitted from the payload (leave unchanged).
///   Requires `#[serde(default, skip_serializing_if = "Maybe::is_unset")]` on
///   the field.
/// - [`Maybe::Null`] — the key is present with an explicit JSON `null` (clear).
/// - [`Maybe::Value`] — the key is present with a value (replace).
///
/// # Examples
///
/// ```
/// # use portkey_admin::types::Maybe;
/// # use serde::Serialize;
/// #[derive(Serialize)]
/// struct Patch {
///     #[serde(skip_serializing_if = "Maybe::is_unset")]
///     credit_limit: Maybe<f64>,
/// }
///
/// let unchanged = serde_json::to_string(&Patch { credit_limit: Maybe::Unset }).unwrap();
/// assert_eq!(unchanged, "{}");
///
/// let cleared = serde_json::to_string(&Patch { credit_limit: Maybe::Null }).unwrap();
/// assert_eq!(cleared, r#"{"credit_limit":null}"#);
///
/// let replaced = serde_json::to_string(&Patch { credit_limit: Maybe::Value(10.0) }).unwrap();
/// assert_eq!(replaced, r#"{"credit_limit":10.0}"#);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// Key omitted from the payload; the server leaves the field unchanged.
    #[default]
    Unset,
    /// Key present with an explicit `null`; the server clears the field.
    Null,
    /// Key present with a value; the server replaces the field.
    Value(T),
}

impl<T> Maybe<T> {
    /// Returns `true` if the field is unset (to be omitted from the payload).
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns `true` if the field is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns a reference to the value, if one is set.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Converts into an `Option`, collapsing `Unset` and `Null` to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// `Some` becomes a value, `None` becomes an explicit null.
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Value(value),
            None => Self::Null,
        }
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            // Unset fields are expected to be skipped via skip_serializing_if;
            // if one is serialized anyway it degrades to null.
            Self::Unset | Self::Null => serializer.serialize_none(),
            Self::Value(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // A missing key never reaches this point; #[serde(default)] on the
        // field yields Unset. A present key is either null or a value.
        let option = Option::<T>::deserialize(deserializer)?;
        Ok(option.into())
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Patch {
        #[serde(default, skip_serializing_if = "Maybe::is_unset")]
        limit: Maybe<u64>,
    }

    #[test]
    fn test_unset_omits_the_key() {
        let json = serde_json::to_string(&Patch { limit: Maybe::Unset }).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_null_is_explicit() {
        let json = serde_json::to_string(&Patch { limit: Maybe::Null }).unwrap();
        assert_eq!(json, r#"{"limit":null}"#);
    }

    #[test]
    fn test_value_is_emitted() {
        let json = serde_json::to_string(&Patch {
            limit: Maybe::Value(100),
        })
        .unwrap();
        assert_eq!(json, r#"{"limit":100}"#);
    }

    #[test]
    fn test_deserialize_all_three_states() {
        let missing: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.limit, Maybe::Unset);

        let null: Patch = serde_json::from_str(r#"{"limit":null}"#).unwrap();
        assert_eq!(null.limit, Maybe::Null);

        let value: Patch = serde_json::from_str(r#"{"limit":100}"#).unwrap();
        assert_eq!(value.limit, Maybe::Value(100));
    }

    #[test]
    fn test_from_option_maps_none_to_null() {
        assert_eq!(Maybe::from(Some(1)), Maybe::Value(1));
        assert_eq!(Maybe::<u64>::from(None), Maybe::Null);
    }

    #[test]
    fn test_envelope_defaults_to_empty_data() {
        let list: ListResponse<u64> = serde_json::from_str("{}").unwrap();
        assert!(list.is_empty());

        let list: ListResponse<u64> = serde_json::from_str(r#"{"data":[1,2],"total":2}"#).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.total, Some(2));
    }
}
