//! Admin client implementation and the shared request primitive.
//!
//! Every resource operation in this crate funnels through [`AdminClient::send`]:
//! serialize the body, build the request with the API-key header, execute it,
//! read the full response body, and map non-2xx statuses to [`Error::Api`].

use reqwest::{Client as HttpClient, ClientBuilder, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::AdminConfig;
use crate::{Error, Result, TRACING_TARGET_CLIENT};

/// Header carrying the admin API key.
const API_KEY_HEADER: &str = "x-portkey-api-key";

/// Client for the Portkey Admin REST API.
///
/// The client holds only immutable configuration and a pooled
/// [`reqwest::Client`]; cloning is cheap and a single instance is safe for
/// concurrent use. Dropping an operation's future cancels the in-flight
/// request.
///
/// # Examples
///
/// ```no_run
/// # use portkey_admin::{AdminClient, Result};
/// # async fn example() -> Result<()> {
/// let client = AdminClient::from_api_key("your-api-key")?;
/// let workspaces = client.list_workspaces().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AdminClient {
    http: HttpClient,
    config: AdminConfig,
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AdminClient {
    /// Creates a new admin client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: AdminConfig) -> Result<Self> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            base_url = %config.base_url(),
            api_key = %config.masked_api_key(),
            timeout_ms = config.request_timeout().as_millis(),
            "Creating admin client"
        );

        let http = ClientBuilder::new()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(Error::Network)?;

        Ok(Self { http, config })
    }

    /// Creates a new admin client from an API key with default configuration.
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self> {
        AdminConfig::builder()
            .with_api_key(api_key)
            .build_client()
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// Builds the absolute URL for a resource path.
    ///
    /// `path` must start with `/` and is appended to the configured base URL,
    /// which keeps any path prefix of the base URL (e.g. `/v1`) intact.
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        let base = self.config.base_url().trim_end_matches('/');
        let absolute = format!("{base}{path}");

        Url::parse(&absolute).map_err(|source| Error::InvalidUrl {
            path: path.to_string(),
            source,
        })
    }

    /// Issues a request and returns the raw response body bytes.
    ///
    /// The one shared primitive behind every operation. `body`, when given, is
    /// the already-serialized JSON payload; `query` pairs are appended as-is.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let url = self.endpoint_url(path)?;

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            method = %method,
            path,
            "Dispatching admin API request"
        );

        let mut request = self
            .http
            .request(method.clone(), url)
            .header("Content-Type", "application/json")
            .header(API_KEY_HEADER, self.config.api_key());

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(payload) = body {
            request = request.body(payload);
        }

        let response = request.send().await.map_err(Error::Network)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(Error::Read)?;

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            method = %method,
            path,
            status = status.as_u16(),
            "Admin API request completed"
        );

        check_status(status, bytes.to_vec())
    }

    /// Serializes a request body to JSON bytes.
    fn encode<B: Serialize>(body: &B) -> Result<Vec<u8>> {
        serde_json::to_vec(body).map_err(Error::Serialization)
    }

    /// Deserializes a response body.
    pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes).map_err(Error::Deserialization)
    }

    /// Issues a GET request and deserializes the response.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let bytes = self.send(Method::GET, path, query, None).await?;
        Self::decode(&bytes)
    }

    /// Issues a POST request with a body and deserializes the response.
    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let payload = Self::encode(body)?;
        let bytes = self.send(Method::POST, path, &[], Some(payload)).await?;
        Self::decode(&bytes)
    }

    /// Issues a POST request, ignoring the response body.
    pub(crate) async fn post_no_content<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let payload = Self::encode(body)?;
        self.send(Method::POST, path, &[], Some(payload)).await?;
        Ok(())
    }

    /// Issues a PUT request with a body and deserializes the response.
    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let payload = Self::encode(body)?;
        let bytes = self.send(Method::PUT, path, &[], Some(payload)).await?;
        Self::decode(&bytes)
    }

    /// Issues a PUT request, ignoring the response body.
    pub(crate) async fn put_no_content<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let payload = Self::encode(body)?;
        self.send(Method::PUT, path, &[], Some(payload)).await?;
        Ok(())
    }

    /// Issues a DELETE request without a body.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    /// Issues a DELETE request with a body (confirmation payloads).
    pub(crate) async fn delete_with_body<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let payload = Self::encode(body)?;
        self.send(Method::DELETE, path, &[], Some(payload)).await?;
        Ok(())
    }
}

/// Maps a non-2xx status to [`Error::Api`], passing 2xx bodies through.
///
/// The body text is carried verbatim so callers see exactly what the server
/// returned.
fn check_status(status: StatusCode, bytes: Vec<u8>) -> Result<Vec<u8>> {
    if status.is_success() {
        return Ok(bytes);
    }

    let body = String::from_utf8_lossy(&bytes).into_owned();

    tracing::warn!(
        target: TRACING_TARGET_CLIENT,
        status = status.as_u16(),
        body = %body,
        "Admin API returned an error status"
    );

    Err(Error::api(status.as_u16(), body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> AdminClient {
        AdminConfig::builder()
            .with_api_key("test_key")
            .with_base_url("https://api.portkey.ai/v1")
            .build_client()
            .unwrap()
    }

    #[test]
    fn test_endpoint_url_keeps_base_path_prefix() {
        let client = test_client();
        let url = client.endpoint_url("/admin/workspaces").unwrap();
        assert_eq!(url.as_str(), "https://api.portkey.ai/v1/admin/workspaces");
    }

    #[test]
    fn test_endpoint_url_tolerates_trailing_slash_in_base() {
        let client = AdminConfig::builder()
            .with_api_key("test_key")
            .with_base_url("https://api.portkey.ai/v1/")
            .build_client()
            .unwrap();

        let url = client.endpoint_url("/configs/my-config").unwrap();
        assert_eq!(url.as_str(), "https://api.portkey.ai/v1/configs/my-config");
    }

    #[test]
    fn test_check_status_passes_success_through() {
        let body = br#"{"id":"ws1"}"#.to_vec();
        let out = check_status(StatusCode::OK, body.clone()).unwrap();
        assert_eq!(out, body);

        // Anything in [200, 300) counts as success
        assert!(check_status(StatusCode::from_u16(299).unwrap(), Vec::new()).is_ok());
    }

    #[test]
    fn test_check_status_maps_error_statuses() {
        let body = br#"{"error":"not found"}"#.to_vec();
        let error = check_status(StatusCode::NOT_FOUND, body).unwrap_err();

        match error {
            Error::Api { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, r#"{"error":"not found"}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // 300 is the first non-success status
        assert!(check_status(StatusCode::from_u16(300).unwrap(), Vec::new()).is_err());
    }

    #[test]
    fn test_decode_maps_malformed_bodies() {
        let result: Result<serde_json::Value> = AdminClient::decode(b"not json");
        assert!(matches!(result, Err(Error::Deserialization(_))));
    }

    #[tokio::test]
    async fn test_transport_failures_surface_as_network_errors() {
        // Port 9 (discard) is closed; the connection is refused immediately
        let client = AdminConfig::builder()
            .with_api_key("test_key")
            .with_base_url("http://127.0.0.1:9")
            .build_client()
            .unwrap();

        let error = client.list_workspaces().await.unwrap_err();
        assert!(matches!(error, Error::Network(_)));
    }
}
