mod common;

use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{Value, json};
use shortlink::domain::repositories::LinkRepository;
use shortlink::routes;

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_link_generates_code() {
    let (state, _repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com/docs" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    let code = body["code"].as_str().unwrap();

    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["targetUrl"], "https://example.com/docs");
    assert_eq!(body["shortUrl"], format!("{}/r/{}", common::BASE_URL, code));
    assert!(body["id"].is_i64());
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_link_with_custom_code() {
    let (state, repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com/docs", "customCode": "docs" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["code"], "docs");
    assert_eq!(body["shortUrl"], "http://sho.rt/r/docs");
    assert!(repo.exists("docs").await.unwrap());
}

#[tokio::test]
async fn test_create_link_trims_inputs() {
    let (state, _repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "  https://example.com  ", "customCode": "  docs  " }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["code"], "docs");
    assert_eq!(body["targetUrl"], "https://example.com");
}

#[tokio::test]
async fn test_blank_custom_code_means_generated() {
    let (state, _repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com", "customCode": "   " }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["code"].as_str().unwrap().len(), 8);
}

#[tokio::test]
async fn test_duplicate_custom_code_conflicts() {
    let (state, repo) = common::create_memory_state();
    common::create_test_link(repo.as_ref(), "taken", "https://first.example").await;

    let server = common::create_test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://second.example", "customCode": "taken" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "conflict");
    assert_eq!(body["error"]["details"]["code"], "taken");

    let stored = repo.find_by_code("taken").await.unwrap().unwrap();
    assert_eq!(stored.target_url, "https://first.example");
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_blank_target_rejected() {
    let (state, repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "   " }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_missing_target_rejected() {
    let (state, _repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let response = server.post("/api/links").json(&json!({})).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_overlong_target_rejected() {
    let (state, repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let target = format!("https://example.com/{}", "a".repeat(2048));
    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": target }))
        .await;

    response.assert_status_bad_request();
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_target_at_length_limit_accepted() {
    let (state, _repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let prefix = "https://example.com/";
    let target = format!("{}{}", prefix, "a".repeat(2048 - prefix.len()));
    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": target }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_padded_inputs_at_length_limits_accepted() {
    let (state, repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let prefix = "https://example.com/";
    let target = format!("{}{}", prefix, "a".repeat(2048 - prefix.len()));
    let code = "c".repeat(64);

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": format!("{target}\n"), "customCode": format!(" {code} ") }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["code"], code);
    assert_eq!(body["targetUrl"], target);
    assert!(repo.exists(&code).await.unwrap());
}

#[tokio::test]
async fn test_malformed_custom_code_rejected() {
    let (state, repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    for code in ["a/b", "with space", "q?x", "frag#1"] {
        let response = server
            .post("/api/links")
            .json(&json!({ "targetUrl": "https://example.com", "customCode": code }))
            .await;

        response.assert_status_bad_request();
    }

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com", "customCode": "x".repeat(65) }))
        .await;
    response.assert_status_bad_request();

    assert!(repo.is_empty());
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_links_empty() {
    let (state, _repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_list_links_newest_first() {
    let (state, _repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    for code in ["r1", "r2", "r3"] {
        server
            .post("/api/links")
            .json(&json!({ "targetUrl": format!("https://example.com/{code}"), "customCode": code }))
            .await
            .assert_status_ok();
    }

    let response = server.get("/api/links").await;
    response.assert_status_ok();

    let body: Vec<Value> = response.json();
    let codes: Vec<&str> = body.iter().map(|l| l["code"].as_str().unwrap()).collect();

    assert_eq!(codes, vec!["r3", "r2", "r1"]);
    assert_eq!(body[0]["shortUrl"], "http://sho.rt/r/r3");
    assert_eq!(body[2]["targetUrl"], "https://example.com/r1");
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let state = shortlink::state::AppState::new(
        std::sync::Arc::new(common::UnavailableRepository),
        common::BASE_URL,
    );
    let server = common::create_test_server(state);

    let response = server.get("/api/links").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "internal_error");
    assert!(!body.to_string().contains("connection refused"));
}

// ─── CORS ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let (state, _repo) = common::create_memory_state();
    let origin = HeaderValue::from_static("http://localhost:5173");
    let server = TestServer::new(routes::router(state, Some(origin))).unwrap();

    let response = server
        .get("/api/links")
        .add_header("Origin", "http://localhost:5173")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header("access-control-allow-origin"),
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn test_no_cors_headers_without_origin_config() {
    let (state, _repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let response = server
        .get("/api/links")
        .add_header("Origin", "http://localhost:5173")
        .await;

    response.assert_status_ok();
    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_none()
    );
}
