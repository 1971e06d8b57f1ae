//! Request and response types for the admin redeem-code endpoints.
//!
//! All wire shapes use snake_case keys, matching the panel backend. Response
//! types keep a flattened catch-all map so fields added server-side survive a
//! round trip without a client release.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// ── Enumerations ─────────────────────────────────────────────────────

/// Kind of redeem code. Closed set: branching on the subscription special
/// case is an exhaustive `match`, so a new variant forces a review of the
/// generate payload rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedeemCodeType {
    /// Credits the redeeming account's balance by `value`.
    Balance,
    /// Grants a subscription; carries a group and an optional validity window.
    Subscription,
}

impl RedeemCodeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Subscription => "subscription",
        }
    }
}

/// Lifecycle status of a redeem code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedeemCodeStatus {
    Active,
    Used,
    Expired,
    Unused,
}

impl RedeemCodeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Used => "used",
            Self::Expired => "expired",
            Self::Unused => "unused",
        }
    }
}

/// Status filter accepted by the export endpoint.
///
/// Deliberately narrower than [`RedeemCodeStatus`]: the server does not
/// support filtering exports by `unused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStatus {
    Active,
    Used,
    Expired,
}

impl ExportStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Used => "used",
            Self::Expired => "expired",
        }
    }
}

// ── Pagination ───────────────────────────────────────────────────────

/// Generic pagination envelope returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

// ── Redeem codes ─────────────────────────────────────────────────────

/// A server-issued redeem code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedeemCode {
    pub id: i64,
    pub code: String,
    #[serde(rename = "type")]
    pub code_type: RedeemCodeType,
    pub value: f64,
    pub status: RedeemCodeStatus,
    /// Subscription group, when the code is subscription-typed.
    #[serde(default)]
    pub group_id: Option<i64>,
    /// Validity window in days, when one was set at generation time.
    #[serde(default)]
    pub validity_days: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub used_at: Option<DateTime<Utc>>,
    /// Account that redeemed the code, once used.
    #[serde(default)]
    pub used_by: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Catch-all for additional fields not modeled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Aggregate counts — from `GET /admin/redeem-codes/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedeemCodeStats {
    pub total_codes: i64,
    pub active_codes: i64,
    pub used_codes: i64,
    pub expired_codes: i64,
    pub total_value_distributed: f64,
    /// Count per code type; keys cover every known [`RedeemCodeType`].
    pub by_type: HashMap<RedeemCodeType, i64>,
}

/// Confirmation from a single delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

/// Result of a batch delete. `deleted` may be less than the number of ids
/// submitted when some of them were invalid; the server is the authority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchDeleteResult {
    pub deleted: i64,
    pub message: String,
}

// ── Generate request ─────────────────────────────────────────────────

/// Batch-generation request for `POST /admin/redeem-codes/generate`.
///
/// The wire payload is built from the mandatory fields only, with optional
/// keys inserted conditionally — an absent key is the contract, never an
/// explicit null or zero standing in for one. The single exception is
/// `group_id`, which for subscription codes is always transmitted, null
/// meaning "no group".
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRedeemCodes {
    count: u32,
    code_type: RedeemCodeType,
    value: f64,
    group_id: Option<i64>,
    validity_days: Option<i64>,
}

impl GenerateRedeemCodes {
    pub fn new(count: u32, code_type: RedeemCodeType, value: f64) -> Self {
        Self {
            count,
            code_type,
            value,
            group_id: None,
            validity_days: None,
        }
    }

    /// Associate generated codes with a subscription group.
    ///
    /// Ignored on the wire unless the code type is subscription.
    pub fn group(mut self, group_id: i64) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Set a validity window in days.
    ///
    /// Ignored on the wire unless the code type is subscription and the
    /// value is strictly positive.
    pub fn validity_days(mut self, days: i64) -> Self {
        self.validity_days = Some(days);
        self
    }

    /// Build the outgoing JSON payload.
    pub fn payload(&self) -> Value {
        let mut body = json!({
            "count": self.count,
            "type": self.code_type,
            "value": self.value,
        });

        match self.code_type {
            RedeemCodeType::Subscription => {
                // group_id is always sent for subscription codes, null = no group
                body["group_id"] = json!(self.group_id);
                if let Some(days) = self.validity_days {
                    if days > 0 {
                        body["validity_days"] = json!(days);
                    }
                }
            }
            RedeemCodeType::Balance => {}
        }

        body
    }
}

// ── Filters ──────────────────────────────────────────────────────────

/// Optional filters for the list endpoint. Absent fields are not
/// transmitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RedeemCodeQuery {
    pub code_type: Option<RedeemCodeType>,
    pub status: Option<RedeemCodeStatus>,
    /// Free-text search over codes.
    pub search: Option<String>,
}

impl RedeemCodeQuery {
    /// Append the present filter fields as snake_case query pairs.
    pub(crate) fn append_params(&self, params: &mut Vec<(&'static str, String)>) {
        if let Some(t) = self.code_type {
            params.push(("type", t.as_str().to_owned()));
        }
        if let Some(s) = self.status {
            params.push(("status", s.as_str().to_owned()));
        }
        if let Some(ref q) = self.search {
            params.push(("search", q.clone()));
        }
    }
}

/// Optional filters for the export endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportQuery {
    pub code_type: Option<RedeemCodeType>,
    pub status: Option<ExportStatus>,
}

impl ExportQuery {
    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(t) = self.code_type {
            params.push(("type", t.as_str().to_owned()));
        }
        if let Some(s) = self.status {
            params.push(("status", s.as_str().to_owned()));
        }
        params
    }
}

// ── Tests ────────────────────────────────────────────────────────────
