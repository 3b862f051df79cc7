//! Audit trail for data-changing requests.
//!
//! Events go to the `audit` tracing target so a subscriber can route them
//! separately from application logs.
//!
//! ```ignore
//! AuditEvent::new("product.delete", format!("product:{}", id))
//!     .with_client(&headers)
//!     .emit();
//! ```

use axum::http::{HeaderMap, header};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditOutcome {
    Success,
    Failure,
}

/// One audited mutation of a resource.
#[derive(Debug, Serialize)]
pub struct AuditEvent {
    /// Dotted action name, e.g. `user.update`
    pub action: String,
    /// `kind:id` of the affected resource
    pub resource: String,
    pub outcome: AuditOutcome,
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
    pub at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    /// A successful event stamped with the current time.
    pub fn new(action: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            resource: resource.into(),
            outcome: AuditOutcome::Success,
            client_ip: None,
            user_agent: None,
            at: Utc::now(),
            details: None,
        }
    }

    pub fn failed(mut self) -> Self {
        self.outcome = AuditOutcome::Failure;
        self
    }

    /// Record the caller's address and user agent from request headers.
    pub fn with_client(mut self, headers: &HeaderMap) -> Self {
        self.client_ip = client_ip(headers);
        self.user_agent = header_str(headers, header::USER_AGENT.as_str());
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn emit(&self) {
        tracing::info!(
            target: "audit",
            action = %self.action,
            resource = %self.resource,
            outcome = ?self.outcome,
            client_ip = self.client_ip.as_deref(),
            user_agent = self.user_agent.as_deref(),
            at = %self.at.to_rfc3339(),
            details = self.details.as_ref().map(|d| d.to_string()),
            "audit event"
        );
    }
}

/// First hop of `X-Forwarded-For`, else `X-Real-IP`.
pub fn client_ip(headers: &HeaderMap) -> Option<String> {
    header_str(headers, "x-forwarded-for")
        .and_then(|forwarded| {
            forwarded
                .split(',')
                .map(str::trim)
                .find(|hop| !hop.is_empty())
                .map(str::to_string)
        })
        .or_else(|| header_str(headers, "x-real-ip"))
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
