//! CLI error types with miette diagnostics.
//!
//! Maps `panel_api::Error` variants into user-facing errors with actionable
//! help text.

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the panel at {url}")]
    #[diagnostic(
        code(panelctl::connection_failed),
        help(
            "Check that the panel is running and accessible.\n\
             URL: {url}"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("TLS error: {reason}")]
    #[diagnostic(
        code(panelctl::tls_error),
        help(
            "If the panel uses a self-signed certificate, pass --insecure (-k)\n\
             or configure ca_cert in your profile."
        )
    )]
    TlsError { reason: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed")]
    #[diagnostic(
        code(panelctl::auth_failed),
        help("Verify the admin token for profile '{profile}' (PANEL_TOKEN or config.toml).")
    )]
    AuthFailed { profile: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(panelctl::no_credentials),
        help(
            "Set the PANEL_TOKEN environment variable, pass --token,\n\
             or add a token to the profile in config.toml."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("Redeem code '{identifier}' not found")]
    #[diagnostic(
        code(panelctl::not_found),
        help("Run: panelctl redeem list to see existing codes")
    )]
    NotFound { identifier: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error("API error ({code}): {message}")]
    #[diagnostic(code(panelctl::api_error))]
    ApiError { code: String, message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(panelctl::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("No panel server configured")]
    #[diagnostic(
        code(panelctl::no_config),
        help(
            "Pass --server, set PANEL_SERVER, or create a profile at:\n\
             {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(panelctl::config))]
    Config(Box<figment::Error>),

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON output failed: {0}")]
    #[diagnostic(code(panelctl::json))]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::TlsError { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── panel_api::Error → CliError mapping ──────────────────────────────

impl From<panel_api::Error> for CliError {
    fn from(err: panel_api::Error) -> Self {
        match err {
            panel_api::Error::InvalidToken | panel_api::Error::Authentication { .. } => {
                CliError::AuthFailed {
                    profile: "current".into(),
                }
            }

            panel_api::Error::Transport(e) => {
                let url = e
                    .url()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "(unknown)".into());
                CliError::ConnectionFailed {
                    url,
                    source: e.into(),
                }
            }

            panel_api::Error::InvalidUrl(e) => CliError::Validation {
                field: "server".into(),
                reason: e.to_string(),
            },

            panel_api::Error::Tls(reason) => CliError::TlsError { reason },

            panel_api::Error::Api {
                status: 404,
                message,
                ..
            } => CliError::NotFound {
                identifier: message,
            },

            panel_api::Error::Api {
                message,
                code,
                status,
            } => CliError::ApiError {
                code: code.unwrap_or_else(|| format!("http_{status}")),
                message,
            },

            panel_api::Error::Deserialization { message, .. } => CliError::ApiError {
                code: "decode".into(),
                message,
            },
        }
    }
}
