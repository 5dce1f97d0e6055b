//! Shared utilities and common types for the GatePass backend
//!
//! This crate provides common functionality used across the server crates:
//! - Environment detection and logging configuration
//! - Utility functions (email validation and masking, field validation)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{Environment, LogFormat, LoggingConfig};
pub use utils::{email, validation};
