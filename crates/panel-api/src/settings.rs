//! Settings API surface.
//!
//! Placeholder: the public settings document is currently fetched through
//! the auth flow, not through a dedicated settings client. This module only
//! declares the response shape so consumers can type against it.

use serde::{Deserialize, Serialize};

/// Publicly visible panel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicSettings {
    pub site_name: String,
    #[serde(default)]
    pub registration_enabled: bool,
    #[serde(default)]
    pub announcement: Option<String>,
}
