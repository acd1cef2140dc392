//! Prelude module for portkey-admin.
//!
//! Re-exports the most commonly used types so a single `use` statement brings
//! in the client, its configuration, and the resource types.
//!
//! # Example
//!
//! ```rust
//! use portkey_admin::prelude::*;
//!
//! # fn example() -> Result<()> {
//! let client = AdminClient::from_api_key("your-api-key")?;
//! # Ok(())
//! # }
//! ```

#[doc(inline)]
pub use crate::types::{
    ApiKey, ApiKeySubType, ApiKeyType, Collection, ConfigData, GatewayConfig, Guardrail,
    Integration, IntegrationModel, IntegrationWorkspace, ListResponse, Maybe, McpCapability,
    McpIntegration, McpWorkspace, Prompt, PromptPartial, Provider, RateLimit, RateLimitsPolicy,
    UsageLimit, UsageLimitsPolicy, User, UserInvite, Workspace, WorkspaceMember,
};
#[doc(inline)]
pub use crate::{AdminClient, AdminConfig, Error, Result};
