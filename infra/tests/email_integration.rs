//! Integration tests for email delivery
//!
//! The HTTP backends are exercised against a local wiremock server; no real
//! provider is contacted.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{any, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gp_core::services::notification::{NotificationService, NotificationServiceConfig};
use gp_core::OtpPurpose;
use gp_shared::config::{Environment, LoggingConfig};
use gp_infra::config::EmailConfig;
use gp_infra::email::{
    create_email_service, EmailService, EmailServiceAdapter, MockEmailService, ResendConfig,
    ResendEmailService, SendGridConfig, SendGridEmailService,
};

fn init_tracing() {
    let logging = LoggingConfig::for_environment(Environment::Staging);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(logging.level)
        .with_test_writer()
        .try_init();
}

fn sendgrid_service(server: &MockServer, from: Option<&str>) -> SendGridEmailService {
    let mut config = SendGridConfig::new("SG.test-key".to_string(), from.map(String::from));
    config.api_base_url = server.uri();
    SendGridEmailService::new(config)
}

fn resend_service(server: &MockServer, from: Option<&str>) -> ResendEmailService {
    let mut config = ResendConfig::new("re_test_key".to_string(), from.map(String::from));
    config.api_base_url = server.uri();
    ResendEmailService::new(config)
}

#[tokio::test]
async fn test_sendgrid_success_returns_placeholder_id() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mail/send"))
        .and(header("Authorization", "Bearer SG.test-key"))
        .and(body_partial_json(json!({
            "personalizations": [{"to": [{"email": "visitor@example.com"}]}],
            "from": {"email": "noreply@facility.gov.ph"}
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let service = sendgrid_service(&server, Some("noreply@facility.gov.ph"));
    let id = service
        .send_email("visitor@example.com", "Subject", "<p>body</p>")
        .await
        .unwrap();

    // The v3 send endpoint has no response body; the id is the fixed tag
    assert_eq!(id, "sendgrid");
}

#[tokio::test]
async fn test_sendgrid_error_status_is_surfaced() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mail/send"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{"message": "The provided authorization grant is invalid"}]
        })))
        .mount(&server)
        .await;

    let service = sendgrid_service(&server, Some("noreply@facility.gov.ph"));
    let error = service
        .send_email("visitor@example.com", "Subject", "<p>body</p>")
        .await
        .unwrap_err();

    let message = error.to_string();
    assert!(message.contains("401"));
    assert!(message.contains("authorization grant"));
}

#[tokio::test]
async fn test_sendgrid_missing_sender_makes_no_request() {
    init_tracing();
    let server = MockServer::start().await;

    // Any request at all is a failure
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = sendgrid_service(&server, None);
    let error = service
        .send_email("visitor@example.com", "Subject", "<p>body</p>")
        .await
        .unwrap_err();

    assert!(error.to_string().contains("SENDGRID_FROM"));
    server.verify().await;
}

#[tokio::test]
async fn test_resend_success_returns_backend_id() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("Authorization", "Bearer re_test_key"))
        .and(body_partial_json(json!({
            "from": "onboarding@resend.dev",
            "to": ["visitor@example.com"]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    // Sender unset: Resend falls back to its onboarding address
    let service = resend_service(&server, None);
    let id = service
        .send_email("visitor@example.com", "Subject", "<p>body</p>")
        .await
        .unwrap();

    assert_eq!(id, "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794");
}

#[tokio::test]
async fn test_resend_error_message_is_surfaced() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "statusCode": 422,
            "message": "The `from` field is invalid",
            "name": "validation_error"
        })))
        .mount(&server)
        .await;

    let service = resend_service(&server, Some("bogus"));
    let error = service
        .send_email("visitor@example.com", "Subject", "<p>body</p>")
        .await
        .unwrap_err();

    assert!(error.to_string().contains("The `from` field is invalid"));
}

#[tokio::test]
async fn test_dispatch_surfaces_resend_error_in_delivery_result() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "statusCode": 403,
            "message": "API key is not authorized to send",
            "name": "forbidden"
        })))
        .mount(&server)
        .await;

    let config = EmailConfig::from_parts(
        None,
        None,
        Some("re_test_key".to_string()),
        None,
        None,
        None,
        None,
        None,
    );
    let backend = resend_service(&server, None);
    let adapter = Arc::new(EmailServiceAdapter::new(Box::new(backend), config));
    let service = NotificationService::new(adapter, NotificationServiceConfig::default());

    let result = service
        .dispatch("visitor@example.com", "123456", "Officer Reyes", OtpPurpose::Login)
        .await;

    assert!(!result.success);
    assert!(result
        .error
        .as_deref()
        .unwrap()
        .contains("API key is not authorized to send"));

    let health = service.health();
    assert!(health.configured);
    assert_eq!(health.provider, "resend");
}

#[tokio::test]
async fn test_complete_mock_workflow() {
    init_tracing();

    // Unconfigured: the factory output fails every send
    let unconfigured = create_email_service(&EmailConfig::default()).await;
    assert_eq!(unconfigured.provider_name(), "None");
    assert!(unconfigured
        .send_email("visitor@example.com", "Subject", "<p>body</p>")
        .await
        .is_err());

    // The mock backend accepts and counts deliveries
    let mock = MockEmailService::new();
    let id = mock
        .send_email("visitor@example.com", "Subject", "<p>body</p>")
        .await
        .unwrap();
    assert!(id.starts_with("mock_"));
    assert_eq!(mock.message_count(), 1);
    assert!(mock.is_available().await);
}
