// Redeem-code endpoints.
//
// Thin wrappers: each method shapes one request against a fixed path under
// /admin/redeem-codes and returns the decoded payload verbatim. No retries,
// no caching, no local reconciliation of server-reported counts.

use serde_json::json;

use crate::admin::client::AdminClient;
use crate::admin::types::{
    BatchDeleteResult, DeleteConfirmation, ExportQuery, GenerateRedeemCodes, Paginated,
    RedeemCode, RedeemCodeQuery, RedeemCodeStats,
};
use crate::error::Error;

impl AdminClient {
    /// List redeem codes, paginated and filterable.
    ///
    /// `GET /admin/redeem-codes`
    ///
    /// `page` starts at 1. Absent filter fields are not transmitted; an
    /// out-of-range page is forwarded as-is — the server decides how to
    /// signal it.
    pub async fn list_redeem_codes(
        &self,
        page: u32,
        page_size: u32,
        query: &RedeemCodeQuery,
    ) -> Result<Paginated<RedeemCode>, Error> {
        let mut params = vec![
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];
        query.append_params(&mut params);

        self.get_with_params("admin/redeem-codes", &params).await
    }

    /// Fetch one redeem code by id.
    ///
    /// `GET /admin/redeem-codes/{id}`
    pub async fn get_redeem_code(&self, id: i64) -> Result<RedeemCode, Error> {
        self.get(&format!("admin/redeem-codes/{id}")).await
    }

    /// Generate a batch of redeem codes.
    ///
    /// `POST /admin/redeem-codes/generate`
    ///
    /// Returns the newly created codes. The server assigns identifiers and
    /// guarantees the count; this layer does not enforce it.
    pub async fn generate_redeem_codes(
        &self,
        request: &GenerateRedeemCodes,
    ) -> Result<Vec<RedeemCode>, Error> {
        self.post("admin/redeem-codes/generate", &request.payload())
            .await
    }

    /// Delete one redeem code.
    ///
    /// `DELETE /admin/redeem-codes/{id}`
    ///
    /// Deleting an already-deleted id surfaces the server's error.
    pub async fn delete_redeem_code(&self, id: i64) -> Result<DeleteConfirmation, Error> {
        self.delete(&format!("admin/redeem-codes/{id}")).await
    }

    /// Delete many redeem codes by id.
    ///
    /// `POST /admin/redeem-codes/batch-delete`
    ///
    /// Ids are passed through un-deduplicated; the result's `deleted` count
    /// reflects what the server actually removed.
    pub async fn batch_delete_redeem_codes(&self, ids: &[i64]) -> Result<BatchDeleteResult, Error> {
        self.post("admin/redeem-codes/batch-delete", &json!({ "ids": ids }))
            .await
    }

    /// Force-expire one redeem code.
    ///
    /// `POST /admin/redeem-codes/{id}/expire`
    ///
    /// Returns the updated code. Re-expiring an already-expired code is the
    /// server's call.
    pub async fn expire_redeem_code(&self, id: i64) -> Result<RedeemCode, Error> {
        self.post_empty(&format!("admin/redeem-codes/{id}/expire"))
            .await
    }

    /// Fetch aggregate redeem-code statistics.
    ///
    /// `GET /admin/redeem-codes/stats`
    pub async fn redeem_code_stats(&self) -> Result<RedeemCodeStats, Error> {
        self.get("admin/redeem-codes/stats").await
    }

    /// Export redeem codes as CSV.
    ///
    /// `GET /admin/redeem-codes/export`
    ///
    /// The response is an opaque byte payload suitable for writing to a
    /// file; it is never JSON-decoded.
    pub async fn export_redeem_codes(&self, query: &ExportQuery) -> Result<bytes::Bytes, Error> {
        self.get_bytes("admin/redeem-codes/export", &query.to_params())
            .await
    }
}
