// Integration tests for `AdminClient` using wiremock.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use panel_api::admin::types::{
    ExportQuery, ExportStatus, GenerateRedeemCodes, RedeemCodeQuery, RedeemCodeStatus,
    RedeemCodeType,
};
use panel_api::{AdminClient, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, AdminClient) {
    let server = MockServer::start().await;
    let client = AdminClient::from_reqwest(&server.uri(), reqwest::Client::new())
        .expect("client should build");
    (server, client)
}

fn code_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "code": format!("CODE-{id:04}"),
        "type": "balance",
        "value": 10.0,
        "status": "active",
        "created_at": "2025-06-01T12:00:00Z"
    })
}

// ── List ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_sends_snake_case_pagination_and_filters() {
    let (server, client) = setup().await;

    let body = json!({
        "items": [code_json(1), code_json(2)],
        "total": 12,
        "page": 2,
        "page_size": 10
    });

    Mock::given(method("GET"))
        .and(path("/admin/redeem-codes"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "10"))
        .and(query_param("status", "used"))
        .and(query_param_is_missing("type"))
        .and(query_param_is_missing("search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let query = RedeemCodeQuery {
        status: Some(RedeemCodeStatus::Used),
        ..Default::default()
    };
    let page = client.list_redeem_codes(2, 10, &query).await.unwrap();

    assert_eq!(page.total, 12);
    assert_eq!(page.page, 2);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].code, "CODE-0001");
}

#[tokio::test]
async fn test_list_empty_page() {
    let (server, client) = setup().await;

    let body = json!({ "items": [], "total": 0, "page": 1, "page_size": 20 });

    Mock::given(method("GET"))
        .and(path("/admin/redeem-codes"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let page = client
        .list_redeem_codes(1, 20, &RedeemCodeQuery::default())
        .await
        .unwrap();

    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());
}

// ── Generate ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_generate_balance_omits_subscription_fields() {
    let (server, client) = setup().await;

    // Exact body match: any extra key (group_id, validity_days) fails.
    Mock::given(method("POST"))
        .and(path("/admin/redeem-codes/generate"))
        .and(body_json(json!({ "count": 3, "type": "balance", "value": 10.0 })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([code_json(1), code_json(2), code_json(3)])),
        )
        .mount(&server)
        .await;

    let req = GenerateRedeemCodes::new(3, RedeemCodeType::Balance, 10.0)
        .group(99)
        .validity_days(30);
    let codes = client.generate_redeem_codes(&req).await.unwrap();

    assert_eq!(codes.len(), 3);
    assert_eq!(codes[0].code_type, RedeemCodeType::Balance);
}

#[tokio::test]
async fn test_generate_subscription_sends_null_group_without_validity() {
    let (server, client) = setup().await;

    let response = json!([{
        "id": 7,
        "code": "SUB-0007",
        "type": "subscription",
        "value": 1.0,
        "status": "unused",
        "group_id": null
    }]);

    Mock::given(method("POST"))
        .and(path("/admin/redeem-codes/generate"))
        .and(body_json(json!({
            "count": 1,
            "type": "subscription",
            "value": 1.0,
            "group_id": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    // validity_days of zero must vanish from the wire, group_id stays as null
    let req = GenerateRedeemCodes::new(1, RedeemCodeType::Subscription, 1.0).validity_days(0);
    let codes = client.generate_redeem_codes(&req).await.unwrap();

    assert_eq!(codes[0].id, 7);
    assert_eq!(codes[0].group_id, None);
}

#[tokio::test]
async fn test_generate_subscription_with_validity() {
    let (server, client) = setup().await;

    let response = json!([{
        "id": 8,
        "code": "SUB-0008",
        "type": "subscription",
        "value": 1.0,
        "status": "unused",
        "group_id": 5,
        "validity_days": 30
    }]);

    Mock::given(method("POST"))
        .and(path("/admin/redeem-codes/generate"))
        .and(body_json(json!({
            "count": 1,
            "type": "subscription",
            "value": 1.0,
            "group_id": 5,
            "validity_days": 30
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let req = GenerateRedeemCodes::new(1, RedeemCodeType::Subscription, 1.0)
        .group(5)
        .validity_days(30);
    let codes = client.generate_redeem_codes(&req).await.unwrap();

    assert_eq!(codes[0].group_id, Some(5));
    assert_eq!(codes[0].validity_days, Some(30));
}

#[tokio::test]
async fn test_generated_code_retrievable_by_id() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/admin/redeem-codes/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([code_json(42)])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin/redeem-codes/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(code_json(42)))
        .mount(&server)
        .await;

    let req = GenerateRedeemCodes::new(1, RedeemCodeType::Balance, 10.0);
    let generated = client.generate_redeem_codes(&req).await.unwrap();
    let fetched = client.get_redeem_code(generated[0].id).await.unwrap();

    assert_eq!(fetched, generated[0]);
}

// ── Delete / expire ─────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_returns_confirmation() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/redeem-codes/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "deleted" })))
        .mount(&server)
        .await;

    let confirmation = client.delete_redeem_code(5).await.unwrap();
    assert_eq!(confirmation.message, "deleted");
}

#[tokio::test]
async fn test_delete_already_deleted_surfaces_error() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/redeem-codes/5"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "message": "redeem code not found" })),
        )
        .mount(&server)
        .await;

    let result = client.delete_redeem_code(5).await;

    match result {
        Err(Error::Api { status, ref message, .. }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "redeem code not found");
        }
        other => panic!("expected Api 404 error, got: {other:?}"),
    }
    assert!(result.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_batch_delete_sends_ids_unmodified() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/admin/redeem-codes/batch-delete"))
        .and(body_json(json!({ "ids": [1, 2, 3, 2] })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "deleted": 3, "message": "3 codes deleted" })),
        )
        .mount(&server)
        .await;

    // Duplicates pass through; the server decides what actually got removed.
    let result = client
        .batch_delete_redeem_codes(&[1, 2, 3, 2])
        .await
        .unwrap();

    assert_eq!(result.deleted, 3);
    assert_eq!(result.message, "3 codes deleted");
}

#[tokio::test]
async fn test_expire_returns_updated_code() {
    let (server, client) = setup().await;

    let mut expired = code_json(9);
    expired["status"] = json!("expired");

    Mock::given(method("POST"))
        .and(path("/admin/redeem-codes/9/expire"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&expired))
        .mount(&server)
        .await;

    let code = client.expire_redeem_code(9).await.unwrap();
    assert_eq!(code.status, RedeemCodeStatus::Expired);
}

// ── Stats ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_stats() {
    let (server, client) = setup().await;

    let body = json!({
        "total_codes": 100,
        "active_codes": 40,
        "used_codes": 50,
        "expired_codes": 10,
        "total_value_distributed": 1234.5,
        "by_type": { "balance": 70, "subscription": 30 }
    });

    Mock::given(method("GET"))
        .and(path("/admin/redeem-codes/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let stats = client.redeem_code_stats().await.unwrap();

    assert_eq!(stats.total_codes, 100);
    assert_eq!(stats.total_value_distributed, 1234.5);
    assert_eq!(stats.by_type[&RedeemCodeType::Subscription], 30);
}

// ── Export ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_export_returns_opaque_bytes() {
    let (server, client) = setup().await;

    let csv = "id,code,type,value,status\n1,CODE-0001,subscription,1.0,active\n";

    Mock::given(method("GET"))
        .and(path("/admin/redeem-codes/export"))
        .and(query_param("type", "subscription"))
        .and(query_param_is_missing("status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(csv, "text/csv"),
        )
        .mount(&server)
        .await;

    let query = ExportQuery {
        code_type: Some(RedeemCodeType::Subscription),
        status: None,
    };
    let bytes = client.export_redeem_codes(&query).await.unwrap();

    // Returned verbatim, never JSON-decoded
    assert_eq!(bytes.as_ref(), csv.as_bytes());
}

#[tokio::test]
async fn test_export_status_filter() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/redeem-codes/export"))
        .and(query_param("status", "expired"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("id,code\n", "text/csv"))
        .mount(&server)
        .await;

    let query = ExportQuery {
        code_type: None,
        status: Some(ExportStatus::Expired),
    };
    let bytes = client.export_redeem_codes(&query).await.unwrap();
    assert!(!bytes.is_empty());
}

// ── Auth / errors ───────────────────────────────────────────────────

#[tokio::test]
async fn test_from_token_sends_bearer_header() {
    let server = MockServer::start().await;
    let token = secrecy::SecretString::from("s3cret");
    let client = AdminClient::from_token(&server.uri(), &token, &TransportConfig::default())
        .expect("client should build");

    Mock::given(method("GET"))
        .and(path("/admin/redeem-codes/1"))
        .and(header("authorization", "Bearer s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(code_json(1)))
        .mount(&server)
        .await;

    let code = client.get_redeem_code(1).await.unwrap();
    assert_eq!(code.id, 1);
}

#[tokio::test]
async fn test_error_401_invalid_token() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.redeem_code_stats().await;

    assert!(
        matches!(result, Err(Error::InvalidToken)),
        "expected InvalidToken, got: {result:?}"
    );
}

#[tokio::test]
async fn test_error_422_with_code() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/admin/redeem-codes/generate"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "count must be at least 1",
            "code": "VALIDATION_ERROR"
        })))
        .mount(&server)
        .await;

    let req = GenerateRedeemCodes::new(0, RedeemCodeType::Balance, 1.0);
    let result = client.generate_redeem_codes(&req).await;

    match result {
        Err(Error::Api { status, ref message, ref code }) => {
            assert_eq!(status, 422);
            assert_eq!(message, "count must be at least 1");
            assert_eq!(code.as_deref(), Some("VALIDATION_ERROR"));
        }
        other => panic!("expected Api 422 error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_500_without_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.redeem_code_stats().await;

    match result {
        Err(Error::Api { status, ref code, .. }) => {
            assert_eq!(status, 500);
            assert!(code.is_none());
        }
        other => panic!("expected Api 500 error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_deserialization_error_with_long_multibyte_body() {
    let (server, client) = setup().await;

    // Long enough that the error-message preview must truncate mid-body,
    // with every char multibyte so a byte-indexed cut would be invalid.
    let body = "€".repeat(100);

    Mock::given(method("GET"))
        .and(path("/admin/redeem-codes/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
        .mount(&server)
        .await;

    let result = client.redeem_code_stats().await;

    match result {
        Err(Error::Deserialization { body: ref b, .. }) => assert_eq!(b, &body),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_deserialization_error_keeps_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/redeem-codes/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = client.redeem_code_stats().await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert_eq!(body, "<html>not json</html>");
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
