//! Request and response types for the Portkey Admin REST API.
//!
//! Each resource family lives in its own module; records are flat serde structs
//! mirroring the API's JSON schema. Request structs carry chainable setters, and
//! the limit fields that distinguish "leave unchanged" from "clear" use the
//! tri-state [`Maybe`] wrapper.

mod api_key;
mod collection;
mod common;
mod gateway_config;
mod guardrail;
mod integration;
mod limits;
mod mcp;
mod policy;
mod prompt;
mod provider;
mod user;
mod workspace;

pub use api_key::{
    ApiKey, ApiKeySubType, ApiKeyType, CreateApiKeyRequest, CreateApiKeyResponse,
    UpdateApiKeyRequest,
};
pub use collection::{Collection, CreateCollectionRequest, UpdateCollectionRequest};
pub use common::{ListResponse, Maybe};
pub use gateway_config::{ConfigData, CreateConfigRequest, GatewayConfig, UpdateConfigRequest};
pub use guardrail::{CreateGuardrailRequest, Guardrail, UpdateGuardrailRequest};
pub use integration::{
    CreateIntegrationRequest, Integration, IntegrationModel, IntegrationWorkspace,
    UpdateIntegrationModelsRequest, UpdateIntegrationRequest, UpdateIntegrationWorkspacesRequest,
};
pub use limits::{RateLimit, UsageLimit};
pub use mcp::{
    CreateMcpIntegrationRequest, McpCapability, McpIntegration, McpWorkspace,
    UpdateMcpCapabilitiesRequest, UpdateMcpIntegrationRequest, UpdateMcpWorkspacesRequest,
};
pub use policy::{
    CreateRateLimitsPolicyRequest, CreateUsageLimitsPolicyRequest, RateLimitsPolicy,
    UpdateRateLimitsPolicyRequest, UpdateUsageLimitsPolicyRequest, UsageLimitsPolicy,
};
pub use prompt::{
    CreatePromptPartialRequest, CreatePromptRequest, MakeDefaultRequest, Prompt, PromptPartial,
    UpdatePromptPartialRequest, UpdatePromptPartialResponse, UpdatePromptRequest,
    UpdatePromptResponse,
};
pub use provider::{CreateProviderRequest, Provider, UpdateProviderRequest};
pub use user::{
    InviteUserRequest, InviteWorkspaceAccess, UpdateUserRequest, User, UserInvite,
};
pub use workspace::{
    AddWorkspaceMemberRequest, CreateWorkspaceRequest, DeleteWorkspaceRequest,
    UpdateWorkspaceMemberRequest, UpdateWorkspaceRequest, Workspace, WorkspaceMember,
};

pub(crate) use workspace::AddWorkspaceMembersBody;
