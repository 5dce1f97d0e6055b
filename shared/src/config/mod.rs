//! Configuration module
//!
//! This module organizes configuration shared by the server crates:
//! - `environment` - Environment detection and logging configuration

pub mod environment;

pub use environment::{Environment, LogFormat, LoggingConfig};
