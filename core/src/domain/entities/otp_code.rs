//! One-time password entity for email-based account verification.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the one-time password
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for one-time passwords (10 minutes)
pub const OTP_EXPIRATION_MINUTES: i64 = 10;

/// What the one-time password is issued for
///
/// Selects the subject line and body template of the notification email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OtpPurpose {
    /// First-time login after account creation
    Login,
    /// Password reset request
    PasswordReset,
}

impl std::fmt::Display for OtpPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OtpPurpose::Login => write!(f, "login"),
            OtpPurpose::PasswordReset => write!(f, "password-reset"),
        }
    }
}

/// One-time password entity for email-based verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpCode {
    /// Unique identifier for this code issuance
    pub id: Uuid,

    /// Email address this code was issued to
    pub email: String,

    /// The 6-digit code
    pub code: String,

    /// What the code was issued for
    pub purpose: OtpPurpose,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been successfully used
    pub is_used: bool,
}

impl OtpCode {
    /// Creates a new one-time password with a cryptographically secure random 6-digit code
    ///
    /// # Arguments
    ///
    /// * `email` - The email address the code is issued to
    /// * `purpose` - What the code is issued for
    pub fn new(email: String, purpose: OtpPurpose) -> Self {
        Self::new_with_expiration(email, purpose, OTP_EXPIRATION_MINUTES)
    }

    /// Creates a new one-time password with a custom expiration time
    pub fn new_with_expiration(email: String, purpose: OtpPurpose, expiration_minutes: i64) -> Self {
        let code = Self::generate_code();
        let now = Utc::now();
        let expires_at = now + Duration::minutes(expiration_minutes);

        Self {
            id: Uuid::new_v4(),
            email,
            code,
            purpose,
            created_at: now,
            expires_at,
            is_used: false,
        }
    }

    /// Generates a cryptographically secure random 6-digit code
    ///
    /// The value is uniformly distributed in `[100000, 999999]`, so the
    /// leading digit is never zero.
    pub fn generate_code() -> String {
        let mut rng = OsRng;
        let code: u32 = rng.gen_range(100_000..1_000_000);
        code.to_string()
    }

    /// Checks if the code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the code is still usable (not expired, not used)
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && !self.is_used
    }

    /// Verifies the provided input against this code
    ///
    /// Codes are single-use: a successful match marks the code as used.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the input matches and the code is still usable,
    /// `Err` with a description otherwise.
    pub fn verify(&mut self, input_code: &str) -> Result<(), String> {
        if self.is_expired() {
            return Err("OTP has expired".to_string());
        }

        if self.is_used {
            return Err("OTP has already been used".to_string());
        }

        if self.code == input_code {
            self.is_used = true;
            Ok(())
        } else {
            Err("Invalid OTP".to_string())
        }
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration as StdDuration;

    #[test]
    fn test_new_otp_code() {
        let code = OtpCode::new("visitor@example.com".to_string(), OtpPurpose::Login);

        assert_eq!(code.email, "visitor@example.com");
        assert_eq!(code.code.len(), CODE_LENGTH);
        assert_eq!(code.purpose, OtpPurpose::Login);
        assert!(!code.is_used);
        assert!(!code.is_expired());
        assert!(code.is_valid());
        assert_eq!(code.expires_at, code.created_at + Duration::minutes(OTP_EXPIRATION_MINUTES));
    }

    #[test]
    fn test_generate_code_format() {
        // The code is always six digits and never starts with zero
        for _ in 0..200 {
            let code = OtpCode::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(code.chars().next().unwrap(), '0');

            let num: u32 = code.parse().expect("Generated code should be a valid number");
            assert!((100_000..=999_999).contains(&num));
        }
    }

    #[test]
    fn test_code_uniqueness() {
        let codes: Vec<String> = (0..100).map(|_| OtpCode::generate_code()).collect();

        // Extremely unlikely to collapse to a single value
        let unique_count = codes.iter().collect::<std::collections::HashSet<_>>().len();
        assert!(unique_count > 1);
    }

    #[test]
    fn test_verify_success_is_single_use() {
        let mut code = OtpCode::new("visitor@example.com".to_string(), OtpPurpose::Login);
        let issued = code.code.clone();

        assert!(code.verify(&issued).is_ok());
        assert!(code.is_used);

        let result = code.verify(&issued);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("already been used"));
    }

    #[test]
    fn test_verify_mismatch() {
        let mut code = OtpCode::new("visitor@example.com".to_string(), OtpPurpose::PasswordReset);

        // A mismatched input does not consume the code
        let wrong = if code.code == "123456" { "654321" } else { "123456" };
        let result = code.verify(wrong);
        assert!(result.is_err());
        assert!(!code.is_used);
        assert!(code.is_valid());
    }

    #[test]
    fn test_expired_code_rejected() {
        let mut code =
            OtpCode::new_with_expiration("visitor@example.com".to_string(), OtpPurpose::Login, 0);
        let issued = code.code.clone();

        thread::sleep(StdDuration::from_millis(10));

        assert!(code.is_expired());
        assert!(!code.is_valid());
        assert_eq!(code.time_until_expiration(), Duration::zero());

        let result = code.verify(&issued);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("expired"));
    }

    #[test]
    fn test_purpose_serialization() {
        let json = serde_json::to_string(&OtpPurpose::PasswordReset).unwrap();
        assert_eq!(json, "\"password-reset\"");
        let json = serde_json::to_string(&OtpPurpose::Login).unwrap();
        assert_eq!(json, "\"login\"");
    }
}
