//! Email Service Interface
//!
//! Defines the trait for email delivery backends that carry OTP
//! notifications to visitors and staff.

use async_trait::async_trait;

use crate::InfrastructureError;

// Helpers shared with the rest of the stack; re-exported here so backend
// implementations and their callers use one masking/validation path.
pub use gp_shared::utils::email::{is_valid_email, mask_email};

/// Email delivery backend trait
///
/// Implementations include:
/// - SendGrid REST API
/// - Resend REST API
/// - SMTP relay (lettre)
/// - Mock implementation for development
///
/// A send issues exactly one outbound call; there is no retrying, queueing
/// or delivery-status tracking, and no timeout beyond the transport's own.
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send an HTML email
    ///
    /// # Arguments
    ///
    /// * `to` - Recipient address. Not validated locally; a bad address is
    ///   the backend's rejection to report.
    /// * `subject` - Message subject
    /// * `html_body` - HTML message body
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the accepted message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, InfrastructureError>;

    /// Get the service provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}
