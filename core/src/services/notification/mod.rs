//! Notification service module for email-based one-time passwords
//!
//! This module provides the OTP notification workflow:
//! - Secure 6-digit code generation
//! - HTML message rendering per purpose (first login, password reset)
//! - Delivery through the configured email backend
//! - A uniform delivery result regardless of backend or failure mode
//! - A configuration health snapshot for the admin surface

mod config;
mod service;
mod templates;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::NotificationServiceConfig;
pub use service::NotificationService;
pub use templates::{render_otp_email, OtpEmailContent};
pub use traits::EmailServiceTrait;
pub use types::{DeliveryHealth, DeliveryResult};
