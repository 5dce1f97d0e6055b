//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the GatePass backend:
//! concrete email delivery backends behind the core service's trait seam,
//! and the environment-derived delivery configuration.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Email**: delivery backends (SendGrid, Resend, SMTP, mock)
//! - **Config**: provider selection resolved once at startup
//!
//! ## Features
//!
//! - `sendgrid`: Enable the SendGrid backend (default)
//! - `resend`: Enable the Resend backend (default)
//! - `smtp-email`: Enable the SMTP backend via lettre (default)
//! - `mock-services`: Mock implementations for testing

/// Configuration module for infrastructure services
pub mod config;

/// Email service module - external delivery backends
pub mod email;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email delivery error
    #[error("Email service error: {0}")]
    Email(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
