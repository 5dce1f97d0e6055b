//! Configuration for the notification service

use crate::domain::entities::otp_code::OTP_EXPIRATION_MINUTES;

/// Configuration for the notification service
#[derive(Debug, Clone)]
pub struct NotificationServiceConfig {
    /// Minutes quoted in the expiry notice of the rendered email.
    /// The notice is informational; code expiry is enforced by whoever
    /// validates the code, not by dispatch.
    pub code_expiration_minutes: i64,
}

impl Default for NotificationServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: OTP_EXPIRATION_MINUTES,
        }
    }
}
