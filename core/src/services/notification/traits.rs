//! Traits for email delivery integration

use async_trait::async_trait;

use super::types::DeliveryHealth;

/// Trait for the email delivery backend
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send an HTML email
    ///
    /// Returns the provider message id on success, or a description of the
    /// failure. Exactly one outbound call is made per invocation; the backend
    /// does not retry.
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<String, String>;

    /// Snapshot of the delivery configuration backing this service
    fn health(&self) -> DeliveryHealth;
}
