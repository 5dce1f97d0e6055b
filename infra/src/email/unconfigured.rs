//! The "no provider" email backend
//!
//! Selected when no delivery credentials are present. Every send fails fast
//! with a configuration error and no network activity, so callers see a
//! failed delivery result instead of silently dropped mail.

use async_trait::async_trait;
use tracing::warn;

use super::email_service::{mask_email, EmailService};
use crate::InfrastructureError;

/// Backend that rejects every send because nothing is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredEmailService;

impl UnconfiguredEmailService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailService for UnconfiguredEmailService {
    async fn send_email(
        &self,
        to: &str,
        _subject: &str,
        _html_body: &str,
    ) -> Result<String, InfrastructureError> {
        warn!(
            "Dropping email to {}: no email provider is configured",
            mask_email(to)
        );
        Err(InfrastructureError::Config(
            "Email service not configured".to_string(),
        ))
    }

    fn provider_name(&self) -> &str {
        "None"
    }

    async fn is_available(&self) -> bool {
        false
    }
}
