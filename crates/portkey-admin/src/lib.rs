//! # portkey-admin
//!
//! A typed client for the Portkey Admin REST API covering workspaces, users,
//! API keys, integrations, providers, configs, prompts, guardrails, policies,
//! collections, and MCP integrations.
//!
//! Every operation is a thin wrapper around one request primitive: serialize the
//! request struct, issue an HTTP request with the `x-portkey-api-key` header, and
//! deserialize the response body. There are no retries and no client-side caching;
//! a failed attempt surfaces immediately as an [`Error`].
//!
//! ## Examples
//!
//! Creating a client with the builder pattern:
//!
//! ```no_run
//! # use portkey_admin::{AdminConfig, Result};
//! # fn example() -> Result<()> {
//! let client = AdminConfig::builder()
//!     .with_api_key("your-api-key")
//!     .build_client()?;
//! # Ok(())
//! # }
//! ```
//!
//! Creating a client with just an API key:
//!
//! ```no_run
//! # use portkey_admin::{AdminClient, Result};
//! # fn example() -> Result<()> {
//! let client = AdminClient::from_api_key("your-api-key")?;
//! # Ok(())
//! # }
//! ```
//!
//! Listing workspaces:
//!
//! ```no_run
//! # use portkey_admin::{AdminClient, Result};
//! # async fn example(client: AdminClient) -> Result<()> {
//! let workspaces = client.list_workspaces().await?;
//! for workspace in workspaces.data {
//!     println!("{}", workspace.name.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

/// Logging target for client transport operations.
pub const TRACING_TARGET_CLIENT: &str = "portkey_admin::client";

/// Logging target for configuration operations.
pub const TRACING_TARGET_CONFIG: &str = "portkey_admin::config";

/// Logging target for resource operations.
pub const TRACING_TARGET_API: &str = "portkey_admin::api";

// Core modules
mod api;
mod client;
pub mod error;
#[doc(hidden)]
pub mod prelude;
pub mod types;

// Re-export client types
pub use client::{AdminBuilder, AdminBuilderError, AdminClient, AdminConfig};
// Re-export error types
pub use error::{Error, Result};
