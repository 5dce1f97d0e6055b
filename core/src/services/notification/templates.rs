//! HTML message rendering for OTP notification emails
//!
//! Plain string templates, one per purpose. The display name comes from
//! internal staff records and is inserted as-is; these documents are never
//! rendered from public input.

use crate::domain::entities::otp_code::OtpPurpose;

/// Subject line for first-login OTP messages
pub const LOGIN_SUBJECT: &str = "Prison Management System - OTP Verification";

/// Subject line for password-reset OTP messages
pub const PASSWORD_RESET_SUBJECT: &str = "Prison Management System - Password Reset OTP";

/// A rendered notification email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEmailContent {
    pub subject: String,
    pub html_body: String,
}

/// Render the notification email for the given purpose
///
/// The expiry notice quotes `expires_minutes`; it is documentation text only
/// and nothing here enforces it.
pub fn render_otp_email(
    purpose: OtpPurpose,
    display_name: &str,
    code: &str,
    expires_minutes: i64,
) -> OtpEmailContent {
    match purpose {
        OtpPurpose::Login => OtpEmailContent {
            subject: LOGIN_SUBJECT.to_string(),
            html_body: render_login_body(display_name, code, expires_minutes),
        },
        OtpPurpose::PasswordReset => OtpEmailContent {
            subject: PASSWORD_RESET_SUBJECT.to_string(),
            html_body: render_password_reset_body(display_name, code, expires_minutes),
        },
    }
}

fn render_login_body(display_name: &str, code: &str, expires_minutes: i64) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #f4f4f4;">
  <div style="background-color: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 5px rgba(0,0,0,0.1);">
    <h2 style="color: #333; text-align: center; margin-bottom: 20px;">Welcome to Prison Management System</h2>
    <p style="color: #666; font-size: 16px; line-height: 1.6;">Hello {display_name},</p>
    <p style="color: #666; font-size: 16px; line-height: 1.6;">Your account has been created. Please use the following OTP to complete your first-time login:</p>

    <div style="background-color: #f8f9fa; border: 2px dashed #007bff; border-radius: 8px; padding: 20px; margin: 25px 0; text-align: center;">
      <h1 style="color: #007bff; font-size: 36px; letter-spacing: 8px; margin: 0;">{code}</h1>
    </div>

    <p style="color: #666; font-size: 14px; line-height: 1.6;">This OTP will expire in <strong>{expires_minutes} minutes</strong>.</p>
    <p style="color: #666; font-size: 14px; line-height: 1.6;">If you didn't request this, please contact your administrator immediately.</p>

    <hr style="border: none; border-top: 1px solid #e0e0e0; margin: 30px 0;">

    <p style="color: #999; font-size: 12px; text-align: center; margin: 0;">
      This is an automated message. Please do not reply to this email.
    </p>
  </div>
</div>"#
    )
}

fn render_password_reset_body(display_name: &str, code: &str, expires_minutes: i64) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #f4f4f4;">
  <div style="background-color: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 5px rgba(0,0,0,0.1);">
    <h2 style="color: #333; text-align: center; margin-bottom: 20px;">Password Reset Request</h2>
    <p style="color: #666; font-size: 16px; line-height: 1.6;">Hello {display_name},</p>
    <p style="color: #666; font-size: 16px; line-height: 1.6;">We received a request to reset your password. Please use the following OTP to complete the password reset process:</p>

    <div style="background-color: #f8f9fa; border: 2px dashed #dc3545; border-radius: 8px; padding: 20px; margin: 25px 0; text-align: center;">
      <h1 style="color: #dc3545; font-size: 36px; letter-spacing: 8px; margin: 0;">{code}</h1>
    </div>

    <p style="color: #666; font-size: 14px; line-height: 1.6;">This OTP will expire in <strong>{expires_minutes} minutes</strong>.</p>
    <p style="color: #dc3545; font-size: 14px; line-height: 1.6;"><strong>If you didn't request this password reset, please ignore this email and contact your administrator immediately.</strong></p>

    <hr style="border: none; border-top: 1px solid #e0e0e0; margin: 30px 0;">

    <p style="color: #999; font-size: 12px; text-align: center; margin: 0;">
      This is an automated message. Please do not reply to this email.
    </p>
  </div>
</div>"#
    )
}
