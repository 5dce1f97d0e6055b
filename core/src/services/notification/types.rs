//! Types for notification dispatch results

use serde::{Deserialize, Serialize};

/// Outcome of a single dispatch attempt
///
/// Every failure mode (missing configuration, transport error, provider
/// rejection) is folded into this value; dispatch never surfaces an error to
/// the caller any other way. `message_id` is present only on success and
/// `error` only on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryResult {
    /// Whether the backend accepted the message
    pub success: bool,

    /// Provider message identifier, present only on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// Failure description, present only on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeliveryResult {
    /// A successful delivery with the provider's message identifier
    pub fn delivered(message_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message_id: Some(message_id.into()),
            error: None,
        }
    }

    /// A failed delivery with a description of what went wrong
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message_id: None,
            error: Some(error.into()),
        }
    }
}

/// Snapshot of the delivery configuration
///
/// Pure read of process-wide configuration; producing it never touches the
/// network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryHealth {
    /// The active provider ("sendgrid", "resend", "smtp" or "none")
    pub provider: String,

    /// Whether any provider is active
    pub configured: bool,

    /// Whether SendGrid credentials are present
    pub sendgrid_configured: bool,

    /// Whether Resend credentials are present
    pub resend_configured: bool,

    /// Whether SMTP credentials are present
    pub smtp_configured: bool,

    /// Resolved sender address for the active provider
    pub from_address: Option<String>,
}

impl DeliveryHealth {
    /// Health snapshot for the "no provider" state
    pub fn unconfigured() -> Self {
        Self {
            provider: "none".to_string(),
            configured: false,
            sendgrid_configured: false,
            resend_configured: false,
            smtp_configured: false,
            from_address: None,
        }
    }
}
