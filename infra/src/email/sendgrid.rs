//! SendGrid Email Service Implementation
//!
//! Sends mail through the SendGrid v3 `mail/send` REST endpoint. SendGrid
//! never defaults the sender: a missing sender address is a configuration
//! error raised before any request is made.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::{
    config::EmailConfig,
    email::email_service::{mask_email, EmailService},
    InfrastructureError,
};

/// Base URL of the SendGrid v3 API
pub const SENDGRID_API_BASE_URL: &str = "https://api.sendgrid.com/v3";

/// SendGrid service configuration
#[derive(Debug, Clone)]
pub struct SendGridConfig {
    /// SendGrid API key
    pub api_key: String,
    /// Sender address; required at send time
    pub from_address: Option<String>,
    /// API base URL (overridable for tests)
    pub api_base_url: String,
}

impl SendGridConfig {
    pub fn new(api_key: String, from_address: Option<String>) -> Self {
        Self {
            api_key,
            from_address,
            api_base_url: SENDGRID_API_BASE_URL.to_string(),
        }
    }

    /// Build from the resolved delivery configuration
    pub fn from_email_config(config: &EmailConfig) -> Self {
        Self::new(
            config.sendgrid_api_key.clone().unwrap_or_default(),
            config.sendgrid_from.clone(),
        )
    }
}

#[derive(Debug, Serialize)]
struct MailSendRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: EmailAddress<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<EmailAddress<'a>>,
}

#[derive(Debug, Serialize)]
struct EmailAddress<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

/// SendGrid email service implementation
pub struct SendGridEmailService {
    client: reqwest::Client,
    config: SendGridConfig,
}

impl SendGridEmailService {
    /// Create a new SendGrid email service
    pub fn new(config: SendGridConfig) -> Self {
        info!(
            "SendGrid email service initialized (sender {})",
            config
                .from_address
                .as_deref()
                .map(mask_email)
                .unwrap_or_else(|| "unset".to_string())
        );

        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl EmailService for SendGridEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, InfrastructureError> {
        let from = self.config.from_address.as_deref().ok_or_else(|| {
            InfrastructureError::Config(
                "SENDGRID_FROM is required when using SendGrid".to_string(),
            )
        })?;

        let request = MailSendRequest {
            personalizations: vec![Personalization {
                to: vec![EmailAddress { email: to }],
            }],
            from: EmailAddress { email: from },
            subject,
            content: vec![Content {
                content_type: "text/html",
                value: html_body,
            }],
        };

        debug!(
            "Sending email to {} via SendGrid (subject: {})",
            mask_email(to),
            subject
        );

        let response = self
            .client
            .post(format!("{}/mail/send", self.config.api_base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("Email sent successfully to {} (SendGrid)", mask_email(to));
            // The v3 send endpoint returns an empty 202 body; there is no
            // per-message id to report.
            Ok("sendgrid".to_string())
        } else {
            let body = response.text().await.unwrap_or_default();
            error!(
                "SendGrid rejected email to {}: status {} body {}",
                mask_email(to),
                status,
                body
            );
            Err(InfrastructureError::Email(format!(
                "SendGrid request failed with status {}: {}",
                status, body
            )))
        }
    }

    fn provider_name(&self) -> &str {
        "SendGrid"
    }
}
