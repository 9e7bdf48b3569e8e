//! Scan API tests.

mod common;

use axum_test::TestServer;

use common::fixtures;
use common::TestContext;

/// Test the health check endpoint.
#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}

/// Test scanning one well-formed record.
#[tokio::test]
async fn test_scan_valid_record() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/scan")
        .json(&fixtures::scan_request(&fixtures::valid_record()))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert!(body.get("scan_id").is_some());
    assert_eq!(body["source"], "pasted");
    assert!(body.get("filename").is_none());
    assert_eq!(body["stats"]["total"], 1);
    assert_eq!(body["stats"]["valid"], 1);
    assert_eq!(body["stats"]["invalid"], 0);

    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["number"], fixtures::VALID_NUMBER);
    assert_eq!(entries[0]["exp_month"], "12");
    assert_eq!(entries[0]["cvv"], "123");
    assert_eq!(entries[0]["valid"], true);
    assert!(entries[0].get("reason").is_none());
}

/// Test that text without matches yields an empty result, not an error.
#[tokio::test]
async fn test_scan_no_matches() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/scan")
        .json(&fixtures::scan_request("no card details in this text"))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["entries"].as_array().unwrap().len(), 0);
    assert_eq!(body["stats"]["total"], 0);
    assert_eq!(body["stats"]["valid"], 0);
    assert_eq!(body["stats"]["invalid"], 0);
}

/// Test that empty text is a valid request.
#[tokio::test]
async fn test_scan_empty_text() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.post("/api/scan").json(&fixtures::scan_request("")).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["stats"]["total"], 0);
}

/// Test that a month out of range is flagged, not dropped.
#[tokio::test]
async fn test_scan_flags_bad_month() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/scan")
        .json(&fixtures::scan_request(&fixtures::bad_month_record()))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["stats"]["invalid"], 1);
    assert_eq!(body["entries"][0]["valid"], false);
    assert_eq!(body["entries"][0]["reason"], "month_out_of_range");
}

/// Test that a past expiry year is flagged as expired.
#[tokio::test]
async fn test_scan_flags_expired() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/scan")
        .json(&fixtures::scan_request(&fixtures::expired_record()))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["entries"][0]["reason"], "expired");
}

/// Test that a 2-digit CVV is found and flagged.
#[tokio::test]
async fn test_scan_flags_short_cvv() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/scan")
        .json(&fixtures::scan_request(&fixtures::short_cvv_record()))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["stats"]["total"], 1);
    assert_eq!(body["entries"][0]["valid"], false);
    assert_eq!(body["entries"][0]["reason"], "cvv_length");
}

/// Test that entries keep input order and duplicates.
#[tokio::test]
async fn test_scan_preserves_order_and_duplicates() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let text = format!(
        "5500005555555559|01|{}|999\n{}\n{}",
        fixtures::future_year(),
        fixtures::valid_record(),
        fixtures::valid_record()
    );

    let response = server.post("/api/scan").json(&fixtures::scan_request(&text)).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["number"], "5500005555555559");
    assert_eq!(entries[1]["number"], fixtures::VALID_NUMBER);
    assert_eq!(entries[2]["number"], fixtures::VALID_NUMBER);
}

/// Test that entries report the line the match was found on.
#[tokio::test]
async fn test_scan_reports_line_numbers() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/scan")
        .json(&fixtures::scan_request(&fixtures::mixed_log()))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["line_number"], 1);
    assert_eq!(entries[1]["line_number"], 3);
}

/// Test that scanning the same text twice yields identical entries.
#[tokio::test]
async fn test_scan_is_deterministic() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();
    let request = fixtures::scan_request(&fixtures::mixed_log());

    let first = server.post("/api/scan").json(&request).await;
    let second = server.post("/api/scan").json(&request).await;

    first.assert_status_ok();
    second.assert_status_ok();

    let first_body: serde_json::Value = first.json();
    let second_body: serde_json::Value = second.json();

    assert_eq!(first_body["entries"], second_body["entries"]);
    assert_eq!(first_body["stats"], second_body["stats"]);
    assert_ne!(first_body["scan_id"], second_body["scan_id"]);
}
