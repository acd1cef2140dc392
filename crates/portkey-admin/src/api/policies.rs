//! Usage-limit and rate-limit policy operations.

use super::workspace_filter;
use crate::types::{
    CreateRateLimitsPolicyRequest, CreateUsageLimitsPolicyRequest, ListResponse, RateLimitsPolicy,
    UpdateRateLimitsPolicyRequest, UpdateUsageLimitsPolicyRequest, UsageLimitsPolicy,
};
use crate::{AdminClient, Error, Result, TRACING_TARGET_API};

fn usage_policy_path(id: &str) -> String {
    format!("/policies/usage-limits/{id}")
}

fn rate_policy_path(id: &str) -> String {
    format!("/policies/rate-limits/{id}")
}

impl AdminClient {
    /// Creates a usage-limit policy and returns the record with its id.
    pub async fn create_usage_limits_policy(
        &self,
        request: &CreateUsageLimitsPolicyRequest,
    ) -> Result<UsageLimitsPolicy> {
        tracing::debug!(target: TRACING_TARGET_API, name = %request.name, "Creating usage-limit policy");
        self.post("/policies/usage-limits", request).await
    }

    /// Fetches a usage-limit policy by id.
    pub async fn get_usage_limits_policy(&self, id: &str) -> Result<UsageLimitsPolicy> {
        self.get(&usage_policy_path(id), &[]).await
    }

    /// Lists usage-limit policies, optionally filtered to one workspace.
    pub async fn list_usage_limits_policies(
        &self,
        workspace_id: Option<&str>,
    ) -> Result<ListResponse<UsageLimitsPolicy>> {
        self.get("/policies/usage-limits", &workspace_filter(workspace_id))
            .await
    }

    /// Updates a usage-limit policy and returns the refreshed record.
    ///
    /// The limit field is tri-state: omitted leaves it unchanged, explicit null
    /// clears it, a value replaces it.
    pub async fn update_usage_limits_policy(
        &self,
        id: &str,
        request: &UpdateUsageLimitsPolicyRequest,
    ) -> Result<UsageLimitsPolicy> {
        self.put_no_content(&usage_policy_path(id), request).await?;
        self.get_usage_limits_policy(id)
            .await
            .map_err(|e| Error::follow_up_fetch("usage-limit policy", e))
    }

    /// Deletes a usage-limit policy.
    pub async fn delete_usage_limits_policy(&self, id: &str) -> Result<()> {
        self.delete(&usage_policy_path(id)).await
    }

    /// Creates a rate-limit policy and returns the record with its id.
    pub async fn create_rate_limits_policy(
        &self,
        request: &CreateRateLimitsPolicyRequest,
    ) -> Result<RateLimitsPolicy> {
        tracing::debug!(target: TRACING_TARGET_API, name = %request.name, "Creating rate-limit policy");
        self.post("/policies/rate-limits", request).await
    }

    /// Fetches a rate-limit policy by id.
    pub async fn get_rate_limits_policy(&self, id: &str) -> Result<RateLimitsPolicy> {
        self.get(&rate_policy_path(id), &[]).await
    }

    /// Lists rate-limit policies, optionally filtered to one workspace.
    pub async fn list_rate_limits_policies(
        &self,
        workspace_id: Option<&str>,
    ) -> Result<ListResponse<RateLimitsPolicy>> {
        self.get("/policies/rate-limits", &workspace_filter(workspace_id))
            .await
    }

    /// Updates a rate-limit policy and returns the refreshed record.
    pub async fn update_rate_limits_policy(
        &self,
        id: &str,
        request: &UpdateRateLimitsPolicyRequest,
    ) -> Result<RateLimitsPolicy> {
        self.put_no_content(&rate_policy_path(id), request).await?;
        self.get_rate_limits_policy(id)
            .await
            .map_err(|e| Error::follow_up_fetch("rate-limit policy", e))
    }

    /// Deletes a rate-limit policy.
    pub async fn delete_rate_limits_policy(&self, id: &str) -> Result<()> {
        self.delete(&rate_policy_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(usage_policy_path("pol_1"), "/policies/usage-limits/pol_1");
        assert_eq!(rate_policy_path("pol_2"), "/policies/rate-limits/pol_2");
    }
}
