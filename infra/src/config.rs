//! Delivery configuration resolved from the environment
//!
//! Credentials are inspected once at process start in fixed priority order:
//! SendGrid, then Resend, then SMTP. The first fully-specified provider is
//! held for the process lifetime; there is no dynamic reconfiguration. With
//! no credentials at all the configuration stays in the "none" state and
//! every dispatch fails fast instead of silently dropping mail.

use gp_core::services::notification::DeliveryHealth;
use serde::{Deserialize, Serialize};

/// Default sender when Resend is active and `RESEND_FROM` is unset
pub const DEFAULT_RESEND_FROM: &str = "onboarding@resend.dev";

/// Default SMTP relay host when `SMTP_HOST` is unset
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP submission port when `SMTP_PORT` is unset
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// The active delivery backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProviderKind {
    SendGrid,
    Resend,
    Smtp,
    None,
}

impl EmailProviderKind {
    /// The lowercase tag used in health snapshots and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailProviderKind::SendGrid => "sendgrid",
            EmailProviderKind::Resend => "resend",
            EmailProviderKind::Smtp => "smtp",
            EmailProviderKind::None => "none",
        }
    }
}

impl std::fmt::Display for EmailProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email delivery configuration
///
/// Built once at startup and immutable afterwards. Constructed explicitly
/// (rather than read ambiently), so tests inject fake credentials through
/// [`EmailConfig::from_parts`] without touching the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    /// The provider selected by credential precedence
    pub provider: EmailProviderKind,

    /// SendGrid API key
    pub sendgrid_api_key: Option<String>,
    /// SendGrid sender address; required for sending, but its absence is a
    /// dispatch-time configuration error rather than a startup failure
    pub sendgrid_from: Option<String>,

    /// Resend API key
    pub resend_api_key: Option<String>,
    /// Resend sender address (defaulted when unset)
    pub resend_from: String,

    /// SMTP relay host
    pub smtp_host: String,
    /// SMTP relay port
    pub smtp_port: u16,
    /// SMTP account username (also the sender address)
    pub smtp_username: Option<String>,
    /// SMTP account password
    pub smtp_password: Option<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self::from_parts(None, None, None, None, None, None, None, None)
    }
}

impl EmailConfig {
    /// Resolve the configuration from environment variables
    ///
    /// Reads `SENDGRID_API_KEY`/`SENDGRID_FROM`, `RESEND_API_KEY`/
    /// `RESEND_FROM`, and `EMAIL_USER`/`EMAIL_PASSWORD` (with
    /// `SMTP_HOST`/`SMTP_PORT` overrides). A `.env` file is honored when
    /// present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        Self::from_parts(
            env("SENDGRID_API_KEY"),
            env("SENDGRID_FROM"),
            env("RESEND_API_KEY"),
            env("RESEND_FROM"),
            env("SMTP_HOST"),
            env("SMTP_PORT").and_then(|p| p.parse().ok()),
            env("EMAIL_USER"),
            env("EMAIL_PASSWORD"),
        )
    }

    /// Resolve the configuration from explicit credential values
    ///
    /// Applies the provider precedence: SendGrid, then Resend, then the SMTP
    /// username/password pair, then none.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        sendgrid_api_key: Option<String>,
        sendgrid_from: Option<String>,
        resend_api_key: Option<String>,
        resend_from: Option<String>,
        smtp_host: Option<String>,
        smtp_port: Option<u16>,
        smtp_username: Option<String>,
        smtp_password: Option<String>,
    ) -> Self {
        let smtp_configured = smtp_username.is_some() && smtp_password.is_some();

        let provider = if sendgrid_api_key.is_some() {
            EmailProviderKind::SendGrid
        } else if resend_api_key.is_some() {
            EmailProviderKind::Resend
        } else if smtp_configured {
            EmailProviderKind::Smtp
        } else {
            tracing::warn!(
                "Email credentials not configured; set SENDGRID_API_KEY, RESEND_API_KEY, \
                 or EMAIL_USER/EMAIL_PASSWORD"
            );
            EmailProviderKind::None
        };

        Self {
            provider,
            // SendGrid falls back to the SMTP account address as sender
            sendgrid_from: sendgrid_from.or_else(|| smtp_username.clone()),
            sendgrid_api_key,
            resend_api_key,
            resend_from: resend_from.unwrap_or_else(|| DEFAULT_RESEND_FROM.to_string()),
            smtp_host: smtp_host.unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: smtp_port.unwrap_or(DEFAULT_SMTP_PORT),
            smtp_username,
            smtp_password,
        }
    }

    /// Whether the SMTP username/password pair is present
    pub fn smtp_configured(&self) -> bool {
        self.smtp_username.is_some() && self.smtp_password.is_some()
    }

    /// The sender address resolved for the active provider
    pub fn sender_address(&self) -> Option<String> {
        match self.provider {
            EmailProviderKind::SendGrid => self.sendgrid_from.clone(),
            EmailProviderKind::Resend => Some(self.resend_from.clone()),
            EmailProviderKind::Smtp => self.smtp_username.clone(),
            EmailProviderKind::None => None,
        }
    }

    /// Snapshot for the admin surface; pure read, no network call
    pub fn health(&self) -> DeliveryHealth {
        DeliveryHealth {
            provider: self.provider.as_str().to_string(),
            configured: self.provider != EmailProviderKind::None,
            sendgrid_configured: self.sendgrid_api_key.is_some(),
            resend_configured: self.resend_api_key.is_some(),
            smtp_configured: self.smtp_configured(),
            from_address: self.sender_address(),
        }
    }
}
