//! Mock Email Service Implementation
//!
//! A mock implementation of the email service for development and testing.
//! Messages are logged instead of sent.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use super::email_service::{is_valid_email, mask_email, EmailService};
use crate::InfrastructureError;

/// Mock email service for development and testing
///
/// This implementation:
/// - Logs messages instead of delivering them
/// - Rejects structurally invalid addresses, as a real backend would
/// - Generates mock message IDs
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a mock service that fails every send
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, InfrastructureError> {
        if !is_valid_email(to) {
            return Err(InfrastructureError::Email(format!(
                "Invalid recipient address: {}",
                mask_email(to)
            )));
        }

        if self.simulate_failure {
            warn!(
                "Mock email service simulating failure for {}",
                mask_email(to)
            );
            return Err(InfrastructureError::Email(
                "Simulated email delivery failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "email_service",
            provider = "mock",
            recipient = %mask_email(to),
            message_id = %message_id,
            subject = %subject,
            body_length = html_body.len(),
            message_number = count,
            "Email sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure
    }
}
