//! Usage and rate limit objects shared by API keys, policies, and integrations.

use serde::{Deserialize, Serialize};

/// A usage (spend/token) limit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UsageLimit {
    /// Credit ceiling for the period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,

    /// Reset cadence, e.g. `"monthly"` or `"weekly"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periodic_reset: Option<String>,

    /// Threshold (same unit as the limit) at which an alert is raised.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_threshold: Option<f64>,
}

impl UsageLimit {
    /// Creates a usage limit with the given credit ceiling.
    pub fn credits(credit_limit: f64) -> Self {
        Self {
            credit_limit: Some(credit_limit),
            ..Self::default()
        }
    }

    /// Sets the reset cadence.
    pub fn periodic_reset(mut self, periodic_reset: impl Into<String>) -> Self {
        self.periodic_reset = Some(periodic_reset.into());
        self
    }

    /// Sets the alert threshold.
    pub fn alert_threshold(mut self, alert_threshold: f64) -> Self {
        self.alert_threshold = Some(alert_threshold);
        self
    }
}

/// A single rate limit rule.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RateLimit {
    /// What is being limited, e.g. `"requests"` or `"tokens"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Window unit, e.g. `"rpm"` or `"rph"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Limit value for the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
}

impl RateLimit {
    /// Creates a requests-per-minute rule.
    pub fn requests_per_minute(value: u64) -> Self {
        Self {
            kind: Some("requests".to_string()),
            unit: Some("rpm".to_string()),
            value: Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_kind_uses_wire_name() {
        let rule = RateLimit::requests_per_minute(60);
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "requests", "unit": "rpm", "value": 60})
        );
    }

    #[test]
    fn test_usage_limit_omits_absent_fields() {
        let limit = UsageLimit::credits(100.0);
        let json = serde_json::to_string(&limit).unwrap();
        assert_eq!(json, r#"{"credit_limit":100.0}"#);
    }
}
