//! Error types for the Portkey Admin API client.

use crate::client::AdminBuilderError;

/// Result type alias for admin client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the Portkey Admin API client.
///
/// Every operation surfaces at most one of these; there is no local recovery or
/// retry. [`Error::FollowUpFetch`] is the one composite case: the mutation was
/// accepted by the server, but the follow-up read required to return the updated
/// record failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration errors from the client builder.
    #[error("Configuration error: {0}")]
    Config(#[from] AdminBuilderError),

    /// A resource path could not be joined onto the base URL.
    #[error("Invalid request URL for path {path}: {source}")]
    InvalidUrl {
        /// Path that failed to join
        path: String,
        /// Underlying parse error
        source: url::ParseError,
    },

    /// Request body serialization failure.
    #[error("Request serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Connection or transport failure.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body could not be read.
    #[error("Response read error: {0}")]
    Read(#[source] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("API error (status {status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body text, verbatim
        body: String,
    },

    /// Response body deserialization failure.
    #[error("Response deserialization error: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// A client-side lookup found no matching entry.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource kind that was searched
        resource: &'static str,
        /// Identifier that had no match
        id: String,
    },

    /// A mutation succeeded but the mandatory follow-up read failed.
    #[error("{resource} update succeeded, but fetching the updated record failed: {source}")]
    FollowUpFetch {
        /// Resource kind that was updated
        resource: &'static str,
        /// Failure of the follow-up read
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Creates an API error from a status code and raw body text.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Creates a not-found error for a client-side lookup.
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Wraps a follow-up read failure after a successful mutation.
    pub fn follow_up_fetch(resource: &'static str, source: Error) -> Self {
        Self::FollowUpFetch {
            resource,
            source: Box::new(source),
        }
    }

    /// Returns the HTTP status code if this is an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::FollowUpFetch { source, .. } => source.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_status_and_body() {
        let error = Error::api(404, r#"{"error":"not found"}"#);
        assert_eq!(error.status(), Some(404));
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains(r#"{"error":"not found"}"#));
    }

    #[test]
    fn test_follow_up_fetch_reports_both_outcomes() {
        let error = Error::follow_up_fetch("workspace", Error::api(500, "oops"));
        let message = error.to_string();
        assert!(message.contains("update succeeded"));
        assert!(message.contains("fetching the updated record failed"));
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn test_not_found_names_the_missing_id() {
        let error = Error::not_found("integration workspace", "ws3");
        assert_eq!(
            error.to_string(),
            "integration workspace not found: ws3"
        );
    }
}
