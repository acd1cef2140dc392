//! Resource operations, one module per resource family.
//!
//! Every method is a thin wrapper around the client's request primitive:
//! serialize, send, deserialize. Updates whose endpoint returns no useful body
//! chain exactly one follow-up Get; a failure there surfaces as
//! [`Error::FollowUpFetch`](crate::Error::FollowUpFetch).

mod api_keys;
mod collections;
mod configs;
mod guardrails;
mod integrations;
mod mcp;
mod policies;
mod prompts;
mod providers;
mod users;
mod workspaces;

/// Builds the optional workspace filter for workspace-scoped list endpoints.
///
/// The query parameter is appended only when a non-empty filter is given.
pub(crate) fn workspace_filter(workspace_id: Option<&str>) -> Vec<(&'static str, &str)> {
    match workspace_id {
        Some(workspace_id) if !workspace_id.is_empty() => {
            vec![("workspace_id", workspace_id)]
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_filter_only_when_non_empty() {
        assert!(workspace_filter(None).is_empty());
        assert!(workspace_filter(Some("")).is_empty());
        assert_eq!(workspace_filter(Some("ws_1")), vec![("workspace_id", "ws_1")]);
    }
}
