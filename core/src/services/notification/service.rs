//! Main notification service implementation

use std::sync::Arc;

use gp_shared::utils::email::mask_email;

use crate::domain::entities::otp_code::{OtpCode, OtpPurpose};

use super::config::NotificationServiceConfig;
use super::templates::render_otp_email;
use super::traits::EmailServiceTrait;
use super::types::{DeliveryHealth, DeliveryResult};

/// Notification service for delivering one-time passwords by email
///
/// The backend is injected through [`EmailServiceTrait`], so tests substitute
/// a fake transport and the provider choice stays a startup concern. The
/// service holds no mutable state; concurrent dispatches share only the
/// immutable configuration.
pub struct NotificationService<E: EmailServiceTrait> {
    /// Email backend for outbound delivery
    email_service: Arc<E>,
    /// Service configuration
    config: NotificationServiceConfig,
}

impl<E: EmailServiceTrait> NotificationService<E> {
    /// Create a new notification service
    ///
    /// # Arguments
    ///
    /// * `email_service` - Email backend implementation
    /// * `config` - Service configuration
    pub fn new(email_service: Arc<E>, config: NotificationServiceConfig) -> Self {
        Self {
            email_service,
            config,
        }
    }

    /// Deliver a one-time password notification
    ///
    /// Renders the HTML message for `purpose`, issues exactly one outbound
    /// call through the configured backend, and folds every failure into the
    /// returned [`DeliveryResult`]. Nothing is raised to the caller.
    ///
    /// The `code` argument is forwarded as given: dispatch does not check it
    /// is a 6-digit code, and the quoted expiry is informational only.
    /// Validation belongs to whoever verifies the code afterwards.
    pub async fn dispatch(
        &self,
        recipient: &str,
        code: &str,
        display_name: &str,
        purpose: OtpPurpose,
    ) -> DeliveryResult {
        let content = render_otp_email(
            purpose,
            display_name,
            code,
            self.config.code_expiration_minutes,
        );

        match self
            .email_service
            .send_email(recipient, &content.subject, &content.html_body)
            .await
        {
            Ok(message_id) => {
                tracing::info!(
                    target: "notification_service",
                    recipient = %mask_email(recipient),
                    purpose = %purpose,
                    message_id = %message_id,
                    "OTP email sent successfully"
                );
                DeliveryResult::delivered(message_id)
            }
            Err(error) => {
                tracing::error!(
                    target: "notification_service",
                    recipient = %mask_email(recipient),
                    purpose = %purpose,
                    error = %error,
                    "Failed to send OTP email"
                );
                DeliveryResult::failed(error)
            }
        }
    }

    /// Generate a fresh code and deliver it in one step
    ///
    /// Returns the issued [`OtpCode`] entity (for the caller to store and
    /// later verify) together with the delivery outcome.
    pub async fn send_new_code(
        &self,
        recipient: &str,
        display_name: &str,
        purpose: OtpPurpose,
    ) -> (OtpCode, DeliveryResult) {
        let otp = OtpCode::new_with_expiration(
            recipient.to_string(),
            purpose,
            self.config.code_expiration_minutes,
        );
        let result = self
            .dispatch(recipient, &otp.code, display_name, purpose)
            .await;
        (otp, result)
    }

    /// Snapshot of the delivery configuration; no network call
    pub fn health(&self) -> DeliveryHealth {
        self.email_service.health()
    }
}
