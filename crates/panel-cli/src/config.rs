//! CLI-owned configuration: TOML profiles and credential resolution.
//!
//! The API crate never sees these types -- it receives a server URL, a
//! token, and a pre-built `TransportConfig`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use panel_api::{TlsMode, TransportConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── TOML config structs ──────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name (used when --profile is not specified).
    pub default_profile: Option<String>,

    /// Named panel profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Panel server URL (e.g. "https://panel.example.com").
    pub server: String,

    /// Admin token (plaintext -- prefer token_env).
    pub token: Option<String>,

    /// Environment variable name containing the admin token.
    pub token_env: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout in seconds.
    pub timeout: Option<u64>,
}

/// Applied when neither --timeout nor the profile sets one.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ── Resolved connection settings ─────────────────────────────────────

/// Everything needed to construct an `AdminClient`.
pub struct Connection {
    pub server: String,
    pub token: SecretString,
    pub transport: TransportConfig,
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "panelctl", "panelctl")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("panelctl");
            p.push("config.toml");
            p
        })
}

// ── Config loading ───────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("PANELCTL_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Profile resolution ───────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Translate a `Profile` + global flags into connection settings.
///
/// Resolution order for each field: CLI flag > env var > profile.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<Connection, CliError> {
    let server = global
        .server
        .clone()
        .unwrap_or_else(|| profile.server.clone());
    validate_server_url(&server)?;

    let token = resolve_token(profile, profile_name, global)?;

    let tls = if global.insecure || profile.insecure.unwrap_or(false) {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsMode::CustomCa(ca_path.clone())
    } else {
        TlsMode::System
    };

    let timeout = global
        .timeout
        .or(profile.timeout)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(Connection {
        server,
        token,
        transport: TransportConfig {
            tls,
            timeout: Duration::from_secs(timeout),
        },
    })
}

/// Build connection settings from CLI flags / env vars alone (no profile).
pub fn resolve_from_flags(profile_name: &str, global: &GlobalOpts) -> Result<Connection, CliError> {
    let server = global.server.clone().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;
    validate_server_url(&server)?;

    let token = global
        .token
        .clone()
        .map(SecretString::from)
        .ok_or_else(|| CliError::NoCredentials {
            profile: profile_name.to_owned(),
        })?;

    let tls = if global.insecure {
        TlsMode::DangerAcceptInvalid
    } else {
        TlsMode::System
    };

    Ok(Connection {
        server,
        token,
        transport: TransportConfig {
            tls,
            timeout: Duration::from_secs(global.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        },
    })
}

fn validate_server_url(server: &str) -> Result<(), CliError> {
    server
        .parse::<url::Url>()
        .map_err(|_| CliError::Validation {
            field: "server".into(),
            reason: format!("invalid URL: {server}"),
        })
        .map(|_| ())
}

// ── Credential helpers ───────────────────────────────────────────────

/// Resolve the admin token from the credential chain.
fn resolve_token(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<SecretString, CliError> {
    // 1. CLI flag / PANEL_TOKEN
    if let Some(ref token) = global.token {
        return Ok(SecretString::from(token.clone()));
    }

    // 2. Profile's token_env -> env var lookup
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 3. Plaintext in config
    if let Some(ref token) = profile.token {
        return Ok(SecretString::from(token.clone()));
    }

    Err(CliError::NoCredentials {
        profile: profile_name.into(),
    })
}
