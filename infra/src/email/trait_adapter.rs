//! Adapter that implements the core notification seam over an email backend

use async_trait::async_trait;

use gp_core::services::notification::{DeliveryHealth, EmailServiceTrait};

use super::email_service::EmailService;
use crate::config::EmailConfig;

/// Adapter wiring a concrete email backend and its configuration into the
/// core [`EmailServiceTrait`]
///
/// Backend errors are flattened to their display strings at this seam; the
/// core service folds them into its delivery result.
pub struct EmailServiceAdapter {
    service: Box<dyn EmailService>,
    config: EmailConfig,
}

impl EmailServiceAdapter {
    /// Create a new adapter over an already-constructed backend
    pub fn new(service: Box<dyn EmailService>, config: EmailConfig) -> Self {
        Self { service, config }
    }

    /// Resolve configuration from the environment and build the matching backend
    pub async fn from_env() -> Self {
        let config = EmailConfig::from_env();
        let service = super::create_email_service(&config).await;
        Self::new(service, config)
    }

    /// Name of the underlying backend
    pub fn provider_name(&self) -> &str {
        self.service.provider_name()
    }
}

#[async_trait]
impl EmailServiceTrait for EmailServiceAdapter {
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<String, String> {
        self.service
            .send_email(to, subject, html_body)
            .await
            .map_err(|e| e.to_string())
    }

    fn health(&self) -> DeliveryHealth {
        self.config.health()
    }
}
