//! SMTP Email Service Implementation
//!
//! Delivers mail through an authenticated STARTTLS relay using lettre.
//! The account username doubles as the sender address. Startup can probe
//! the relay with [`SmtpEmailService::verify_connection`]; the probe is
//! informational only and bounded by a fixed timeout.

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{debug, error, info, warn};

use crate::{
    config::{EmailConfig, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT},
    email::email_service::{mask_email, EmailService},
    InfrastructureError,
};

/// How long the startup connectivity probe may take before being abandoned
pub const SMTP_VERIFY_TIMEOUT_SECS: u64 = 5;

/// SMTP service configuration
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Relay host
    pub host: String,
    /// Relay port
    pub port: u16,
    /// Account username; also used as the sender address
    pub username: String,
    /// Account password (for Gmail, an app password)
    pub password: String,
}

impl SmtpConfig {
    /// Build from the resolved delivery configuration
    pub fn from_email_config(config: &EmailConfig) -> Self {
        Self {
            host: config.smtp_host.clone(),
            port: config.smtp_port,
            username: config.smtp_username.clone().unwrap_or_default(),
            password: config.smtp_password.clone().unwrap_or_default(),
        }
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SMTP_HOST.to_string(),
            port: DEFAULT_SMTP_PORT,
            username: String::new(),
            password: String::new(),
        }
    }
}

/// SMTP email service implementation
#[derive(Clone)]
pub struct SmtpEmailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpEmailService {
    /// Create a new SMTP email service
    pub fn new(config: SmtpConfig) -> Result<Self, InfrastructureError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| InfrastructureError::Config(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        info!(
            "SMTP email service initialized for {}:{} (account {})",
            config.host,
            config.port,
            mask_email(&config.username)
        );

        Ok(Self {
            transport,
            from_address: config.username,
        })
    }

    /// Probe the relay, bounded by [`SMTP_VERIFY_TIMEOUT_SECS`]
    ///
    /// The outcome is logged and nothing else: a dead relay at startup must
    /// not keep the process from serving.
    pub async fn verify_connection(&self) {
        let probe = self.transport.test_connection();
        match tokio::time::timeout(Duration::from_secs(SMTP_VERIFY_TIMEOUT_SECS), probe).await {
            Err(_) => warn!(
                "SMTP verification timed out after {}s - proceeding without verification",
                SMTP_VERIFY_TIMEOUT_SECS
            ),
            Ok(Ok(true)) => info!("SMTP connection verified; email service is ready"),
            Ok(Ok(false)) => warn!("SMTP relay refused the connection probe"),
            Ok(Err(e)) => error!("SMTP configuration error: {}", e),
        }
    }
}

#[async_trait]
impl EmailService for SmtpEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, InfrastructureError> {
        let from: Mailbox = self.from_address.parse().map_err(|e| {
            InfrastructureError::Config(format!("Invalid sender address: {}", e))
        })?;

        // Recipient validity is the transport's call, reported as a send error
        let to_mailbox: Mailbox = to.parse().map_err(|e| {
            InfrastructureError::Email(format!("Invalid recipient address: {}", e))
        })?;

        let email = Message::builder()
            .from(from)
            .to(to_mailbox)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| InfrastructureError::Email(e.to_string()))?;

        debug!(
            "Sending email to {} via SMTP (subject: {})",
            mask_email(to),
            subject
        );

        match self.transport.send(email).await {
            Ok(response) => {
                let message_id = response
                    .message()
                    .next()
                    .map(str::to_string)
                    .unwrap_or_else(|| "smtp".to_string());
                info!(
                    "Email sent successfully to {} (SMTP): {}",
                    mask_email(to),
                    message_id
                );
                Ok(message_id)
            }
            Err(e) => {
                error!("SMTP send to {} failed: {}", mask_email(to), e);
                Err(InfrastructureError::Email(e.to_string()))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "SMTP"
    }

    async fn is_available(&self) -> bool {
        self.transport.test_connection().await.unwrap_or(false)
    }
}
