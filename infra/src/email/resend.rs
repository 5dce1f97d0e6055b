//! Resend Email Service Implementation
//!
//! Sends mail through the Resend `/emails` REST endpoint. Resend tolerates
//! an unset sender by falling back to its onboarding address, so unlike
//! SendGrid there is no sender-missing failure mode here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    config::{EmailConfig, DEFAULT_RESEND_FROM},
    email::email_service::{mask_email, EmailService},
    InfrastructureError,
};

/// Base URL of the Resend API
pub const RESEND_API_BASE_URL: &str = "https://api.resend.com";

/// Resend service configuration
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// Resend API key
    pub api_key: String,
    /// Sender address
    pub from_address: String,
    /// API base URL (overridable for tests)
    pub api_base_url: String,
}

impl ResendConfig {
    pub fn new(api_key: String, from_address: Option<String>) -> Self {
        Self {
            api_key,
            from_address: from_address.unwrap_or_else(|| DEFAULT_RESEND_FROM.to_string()),
            api_base_url: RESEND_API_BASE_URL.to_string(),
        }
    }

    /// Build from the resolved delivery configuration
    pub fn from_email_config(config: &EmailConfig) -> Self {
        Self::new(
            config.resend_api_key.clone().unwrap_or_default(),
            Some(config.resend_from.clone()),
        )
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ResendErrorResponse {
    message: Option<String>,
}

/// Resend email service implementation
pub struct ResendEmailService {
    client: reqwest::Client,
    config: ResendConfig,
}

impl ResendEmailService {
    /// Create a new Resend email service
    pub fn new(config: ResendConfig) -> Self {
        info!(
            "Resend email service initialized (sender {})",
            mask_email(&config.from_address)
        );

        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl EmailService for ResendEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, InfrastructureError> {
        let request = SendEmailRequest {
            from: &self.config.from_address,
            to: vec![to],
            subject,
            html: html_body,
        };

        debug!(
            "Sending email to {} via Resend (subject: {})",
            mask_email(to),
            subject
        );

        let response = self
            .client
            .post(format!("{}/emails", self.config.api_base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body: SendEmailResponse = response.json().await.map_err(|e| {
                InfrastructureError::Email(format!("Unexpected Resend response: {}", e))
            })?;
            info!(
                "Email sent successfully to {} (Resend): {}",
                mask_email(to),
                body.id
            );
            Ok(body.id)
        } else {
            let body = response.text().await.unwrap_or_default();
            // Surface the backend's own message when the error body carries one
            let message = serde_json::from_str::<ResendErrorResponse>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("Resend request failed with status {}", status));
            error!(
                "Resend rejected email to {}: status {} message {}",
                mask_email(to),
                status,
                message
            );
            Err(InfrastructureError::Email(message))
        }
    }

    fn provider_name(&self) -> &str {
        "Resend"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_defaults_to_onboarding_address() {
        let config = ResendConfig::new("re_key".to_string(), None);
        assert_eq!(config.from_address, DEFAULT_RESEND_FROM);

        let config = ResendConfig::new(
            "re_key".to_string(),
            Some("noreply@facility.gov.ph".to_string()),
        );
        assert_eq!(config.from_address, "noreply@facility.gov.ph");
    }

    #[test]
    fn test_request_body_shape() {
        let request = SendEmailRequest {
            from: "onboarding@resend.dev",
            to: vec!["visitor@example.com"],
            subject: "Subject",
            html: "<p>body</p>",
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["from"], "onboarding@resend.dev");
        assert_eq!(json["to"][0], "visitor@example.com");
        assert_eq!(json["html"], "<p>body</p>");
    }

    #[test]
    fn test_error_body_parsing() {
        let parsed: ResendErrorResponse =
            serde_json::from_str(r#"{"statusCode":422,"message":"The from field is invalid","name":"validation_error"}"#)
                .unwrap();
        assert_eq!(parsed.message.as_deref(), Some("The from field is invalid"));
    }
}
