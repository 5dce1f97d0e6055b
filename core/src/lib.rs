//! # GatePass Core
//!
//! Core business logic and domain layer for the GatePass backend.
//! This crate contains domain entities, business services, and error types
//! that form the foundation of the visitor-management application:
//! one-time-code notification dispatch, visitor/inmate ban bookkeeping,
//! and printable visitor ID card rendering.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
