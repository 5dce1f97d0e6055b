//! Tests for the notification dispatch workflow

use std::sync::Arc;

use crate::domain::entities::otp_code::OtpPurpose;
use crate::services::notification::config::NotificationServiceConfig;
use crate::services::notification::service::NotificationService;
use crate::services::notification::templates::{LOGIN_SUBJECT, PASSWORD_RESET_SUBJECT};

use super::mocks::MockEmailBackend;

fn service(backend: Arc<MockEmailBackend>) -> NotificationService<MockEmailBackend> {
    NotificationService::new(backend, NotificationServiceConfig::default())
}

#[tokio::test]
async fn test_dispatch_success_returns_message_id() {
    let backend = MockEmailBackend::delivering();
    let service = service(backend.clone());

    let result = service
        .dispatch("visitor@example.com", "123456", "Officer Reyes", OtpPurpose::Login)
        .await;

    assert!(result.success);
    assert!(!result.message_id.as_deref().unwrap().is_empty());
    assert!(result.error.is_none());
    assert_eq!(backend.call_count(), 1);

    let sent = backend.last_message().unwrap();
    assert_eq!(sent.to, "visitor@example.com");
    assert_eq!(sent.subject, LOGIN_SUBJECT);
    assert!(sent.html_body.contains("123456"));
}

#[tokio::test]
async fn test_dispatch_backend_error_is_folded_into_result() {
    let backend = MockEmailBackend::failing("The from field is invalid");
    let service = service(backend.clone());

    let result = service
        .dispatch("visitor@example.com", "123456", "Officer Reyes", OtpPurpose::PasswordReset)
        .await;

    assert!(!result.success);
    assert!(result.message_id.is_none());
    assert_eq!(result.error.as_deref(), Some("The from field is invalid"));

    let sent = backend.last_message().unwrap();
    assert_eq!(sent.subject, PASSWORD_RESET_SUBJECT);
}

#[tokio::test]
async fn test_dispatch_without_provider_fails_for_every_input() {
    let backend = MockEmailBackend::unconfigured();
    let service = service(backend.clone());

    for (recipient, code) in [
        ("a@example.com", "100000"),
        ("b@example.com", "999999"),
        ("not-an-address", "abc"),
    ] {
        let result = service
            .dispatch(recipient, code, "Officer Reyes", OtpPurpose::Login)
            .await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Email service not configured"));
    }
}

#[tokio::test]
async fn test_dispatch_forwards_code_unchecked() {
    // Dispatch does not enforce the 6-digit contract; the entity does
    let backend = MockEmailBackend::delivering();
    let service = service(backend.clone());

    let result = service
        .dispatch("visitor@example.com", "not-a-code", "Officer Reyes", OtpPurpose::Login)
        .await;

    assert!(result.success);
    assert!(backend.last_message().unwrap().html_body.contains("not-a-code"));
}

#[tokio::test]
async fn test_send_new_code_issues_entity_and_delivers() {
    let backend = MockEmailBackend::delivering();
    let service = service(backend.clone());

    let (otp, result) = service
        .send_new_code("visitor@example.com", "Officer Reyes", OtpPurpose::Login)
        .await;

    assert!(result.success);
    assert_eq!(otp.email, "visitor@example.com");
    assert!(otp.is_valid());
    assert!(backend.last_message().unwrap().html_body.contains(&otp.code));
}

#[tokio::test]
async fn test_health_reflects_backend_configuration() {
    let configured = service(MockEmailBackend::delivering());
    let health = configured.health();
    assert!(health.configured);
    assert_eq!(health.provider, "smtp");
    assert!(health.smtp_configured);
    assert!(!health.sendgrid_configured && !health.resend_configured);

    let unconfigured = service(MockEmailBackend::unconfigured());
    let health = unconfigured.health();
    assert!(!health.configured);
    assert_eq!(health.provider, "none");
}
