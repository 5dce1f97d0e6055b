//! Email Service Module
//!
//! This module provides email delivery implementations for sending OTP
//! notifications. It includes support for multiple providers and a mock
//! implementation for development.
//!
//! ## Features
//!
//! - **Email Service Trait**: Common interface for all delivery backends
//! - **SendGrid Support**: Production delivery via the SendGrid v3 API
//! - **Resend Support**: Production delivery via the Resend API
//! - **SMTP Support**: Delivery through an authenticated STARTTLS relay
//! - **Mock Implementation**: Logged delivery for development
//! - **Security**: Recipient addresses masked in logs

pub mod email_service;
pub mod mock_email;
pub mod trait_adapter;
pub mod unconfigured;

// SendGrid email service (feature-gated)
#[cfg(feature = "sendgrid")]
pub mod sendgrid;

// Resend email service (feature-gated)
#[cfg(feature = "resend")]
pub mod resend;

// SMTP email service (feature-gated)
#[cfg(feature = "smtp-email")]
pub mod smtp;

// Re-export commonly used types
pub use email_service::{is_valid_email, mask_email, EmailService};
pub use mock_email::MockEmailService;
pub use trait_adapter::EmailServiceAdapter;
pub use unconfigured::UnconfiguredEmailService;

#[cfg(feature = "sendgrid")]
pub use sendgrid::{SendGridConfig, SendGridEmailService};

#[cfg(feature = "resend")]
pub use resend::{ResendConfig, ResendEmailService};

#[cfg(feature = "smtp-email")]
pub use smtp::{SmtpConfig, SmtpEmailService};

#[cfg(test)]
mod tests;

use crate::config::{EmailConfig, EmailProviderKind};

/// Create an email service based on configuration
///
/// Returns the backend for the provider the configuration resolved to.
/// Exactly one provider is active for the process lifetime; when none is
/// configured the returned backend fails every send with a configuration
/// error.
///
/// For the SMTP provider only, a non-blocking connectivity probe is spawned;
/// its outcome is logged and never affects the returned service.
pub async fn create_email_service(config: &EmailConfig) -> Box<dyn EmailService> {
    match config.provider {
        #[cfg(feature = "sendgrid")]
        EmailProviderKind::SendGrid => {
            tracing::info!("Email service configured for SendGrid");
            Box::new(SendGridEmailService::new(SendGridConfig::from_email_config(
                config,
            )))
        }
        #[cfg(feature = "resend")]
        EmailProviderKind::Resend => {
            tracing::info!("Email service configured for Resend");
            Box::new(ResendEmailService::new(ResendConfig::from_email_config(
                config,
            )))
        }
        #[cfg(feature = "smtp-email")]
        EmailProviderKind::Smtp => {
            match SmtpEmailService::new(SmtpConfig::from_email_config(config)) {
                Ok(service) => {
                    tracing::info!("Email service configured for SMTP");
                    // Informational probe; startup does not wait on it
                    let prober = service.clone();
                    tokio::spawn(async move {
                        prober.verify_connection().await;
                    });
                    Box::new(service)
                }
                Err(e) => {
                    tracing::error!("Failed to initialize SMTP email service: {}", e);
                    Box::new(UnconfiguredEmailService::new())
                }
            }
        }
        EmailProviderKind::None => {
            tracing::warn!("Email service not configured; all sends will fail");
            Box::new(UnconfiguredEmailService::new())
        }
        // A provider resolved from credentials but compiled out
        #[allow(unreachable_patterns)]
        other => {
            tracing::error!(
                "Email provider '{}' is not compiled into this build",
                other
            );
            Box::new(UnconfiguredEmailService::new())
        }
    }
}
