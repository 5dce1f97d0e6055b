//! Domain entities representing core business objects.

pub mod ban;
pub mod otp_code;
pub mod visitor;

// Re-export commonly used types
pub use ban::{BanRecord, BanTerm};
pub use otp_code::{OtpCode, OtpPurpose, CODE_LENGTH, OTP_EXPIRATION_MINUTES};
pub use visitor::{Inmate, SearchField, Sex, Visitor};
