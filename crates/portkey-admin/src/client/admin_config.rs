//! Admin client configuration and builder.
//!
//! This module provides the configuration types and builder pattern for creating
//! and customizing [`AdminClient`] instances.

use std::fmt;
use std::time::Duration;

use derive_builder::Builder;

use crate::{AdminClient, Result};

/// Default values for configuration options.
mod defaults {
    use std::time::Duration;

    /// Default request timeout in seconds.
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Portkey API base URL.
    pub const BASE_URL: &str = "https://api.portkey.ai/v1";

    /// Returns the default request timeout.
    pub fn request_timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }

    /// Returns the default user agent string.
    pub fn user_agent() -> String {
        format!("portkey-admin/{}", env!("CARGO_PKG_VERSION"))
    }
}

/// Configuration for the Portkey Admin API client.
///
/// Holds the base URL, API key, and transport settings shared by every request.
/// The configuration is immutable once built; one configured client is safe for
/// concurrent reuse across many simultaneous calls.
#[derive(Clone, Builder)]
#[builder(
    name = "AdminBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate_config")
)]
pub struct AdminConfig {
    /// API key for authentication with the Portkey Admin API.
    ///
    /// You can obtain an admin API key from the Portkey dashboard.
    api_key: String,

    /// Base URL for API requests.
    ///
    /// Defaults to the official Portkey API endpoint.
    #[builder(default = "Self::default_base_url()")]
    base_url: String,

    /// Timeout for API requests.
    ///
    /// Controls how long the client will wait for API responses before timing out.
    #[builder(default = "Self::default_request_timeout()")]
    request_timeout: Duration,

    /// User-Agent header to send with requests.
    #[builder(default = "Self::default_user_agent()")]
    user_agent: String,
}

impl AdminBuilder {
    /// Returns the default request timeout.
    fn default_request_timeout() -> Duration {
        defaults::request_timeout()
    }

    /// Returns the default base URL for the Portkey API.
    fn default_base_url() -> String {
        defaults::BASE_URL.to_string()
    }

    /// Returns the default user agent.
    fn default_user_agent() -> String {
        defaults::user_agent()
    }

    /// Validates the configuration before building.
    fn validate_config(&self) -> std::result::Result<(), String> {
        // API key is mandatory and must be non-empty
        match &self.api_key {
            None => return Err("API key is required".to_string()),
            Some(api_key) if api_key.trim().is_empty() => {
                return Err("API key cannot be empty".to_string());
            }
            Some(_) => {}
        }

        // Validate base URL format
        if let Some(base_url) = &self.base_url {
            if base_url.trim().is_empty() {
                return Err("Base URL cannot be empty".to_string());
            }
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(format!(
                    "Base URL must start with http:// or https://, got {}",
                    base_url
                ));
            }
        }

        // Validate timeout
        if let Some(timeout) = self.request_timeout {
            if timeout.is_zero() {
                return Err("Timeout must be greater than 0".to_string());
            }
        }

        Ok(())
    }

    /// Creates an admin client directly from the builder.
    ///
    /// This is a convenience method that builds the configuration and
    /// creates a client in one step.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use portkey_admin::AdminConfig;
    /// let client = AdminConfig::builder()
    ///     .with_api_key("your-api-key")
    ///     .build_client()
    ///     .unwrap();
    /// ```
    pub fn build_client(self) -> Result<AdminClient> {
        let config = self.build()?;
        AdminClient::new(config)
    }
}

impl AdminConfig {
    /// Creates a new configuration builder.
    ///
    /// This is the recommended way to construct an `AdminConfig`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use portkey_admin::AdminConfig;
    /// let config = AdminConfig::builder()
    ///     .with_api_key("your-api-key")
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn builder() -> AdminBuilder {
        AdminBuilder::default()
    }

    /// Creates a new admin client using this configuration.
    pub fn build_client(self) -> Result<AdminClient> {
        AdminClient::new(self)
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns a masked version of the API key for safe display/logging.
    ///
    /// Shows the first 4 characters followed by "****", or just "****"
    /// if the key is shorter than 4 characters.
    pub fn masked_api_key(&self) -> String {
        if self.api_key.chars().count() > 4 {
            let prefix: String = self.api_key.chars().take(4).collect();
            format!("{prefix}****")
        } else {
            "****".to_string()
        }
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the request timeout duration.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the user agent.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("api_key", &self.masked_api_key())
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() -> Result<()> {
        let config = AdminConfig::builder().with_api_key("test_key").build()?;

        assert_eq!(config.api_key(), "test_key");
        assert_eq!(config.base_url(), defaults::BASE_URL);
        assert_eq!(config.request_timeout(), defaults::request_timeout());

        Ok(())
    }

    #[test]
    fn test_config_builder_with_custom_values() -> Result<()> {
        let config = AdminConfig::builder()
            .with_api_key("test_key")
            .with_base_url("https://custom.api.com/v1")
            .with_request_timeout(Duration::from_secs(60))
            .build()?;

        assert_eq!(config.api_key(), "test_key");
        assert_eq!(config.base_url(), "https://custom.api.com/v1");
        assert_eq!(config.request_timeout(), Duration::from_secs(60));

        Ok(())
    }

    #[test]
    fn test_config_validation_missing_api_key() {
        let result = AdminConfig::builder().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validation_empty_api_key() {
        let result = AdminConfig::builder().with_api_key("  ").build();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("API key cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_base_url_scheme() {
        let result = AdminConfig::builder()
            .with_api_key("test_key")
            .with_base_url("ftp://api.portkey.ai")
            .build();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("must start with http:// or https://")
        );
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let result = AdminConfig::builder()
            .with_api_key("test_key")
            .with_request_timeout(Duration::ZERO)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_accepts_long_timeouts() -> Result<()> {
        let config = AdminConfig::builder()
            .with_api_key("test_key")
            .with_request_timeout(Duration::from_secs(600))
            .build()?;

        assert_eq!(config.request_timeout(), Duration::from_secs(600));

        Ok(())
    }

    #[test]
    fn test_masked_api_key() {
        let config = AdminConfig::builder()
            .with_api_key("test_key_1234567890")
            .build()
            .unwrap();

        assert_eq!(config.masked_api_key(), "test****");

        let short_config = AdminConfig::builder().with_api_key("key").build().unwrap();

        assert_eq!(short_config.masked_api_key(), "****");
    }

    #[test]
    fn test_masked_api_key_multibyte() {
        // Masking counts characters, not bytes; a key with a multi-byte
        // character near the cutoff must not split it.
        let config = AdminConfig::builder()
            .with_api_key("abcéfgh_secret")
            .build()
            .unwrap();

        assert_eq!(config.masked_api_key(), "abcé****");
    }

    #[test]
    fn test_debug_never_prints_the_raw_key() {
        let config = AdminConfig::builder()
            .with_api_key("super_secret_key")
            .build()
            .unwrap();

        let debug = format!("{config:?}");
        assert!(!debug.contains("super_secret_key"));
        assert!(debug.contains("supe****"));
    }
}
