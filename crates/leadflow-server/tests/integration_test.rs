//! End-to-end integration tests for the intake HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! LeadService -> store -> HTTP response.
//!
//! Tests use `tower::ServiceExt::oneshot` to send requests directly to the
//! router without starting a network server. File-backed tests get a fresh
//! temp directory each.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use leadflow_server::router::build_router;
use leadflow_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn test_app() -> Router {
    build_router(AppState::in_memory())
}

/// Sends a POST request with a JSON body and returns (status, json).
async fn post_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

/// Sends a POST request with raw bytes labelled as JSON and returns (status, json).
async fn post_raw(app: &Router, path: &str, body: &'static str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

/// Sends a GET request and returns (status, json).
async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

fn scenario_lead() -> serde_json::Value {
    json!({
        "fullName": "A B",
        "email": "a@b.com",
        "phone": "+1 (555) 123-4567",
        "country": "US",
        "consent": true,
        "timestamp": "2026-10-18T09:30:00.000Z"
    })
}

// ---------------------------------------------------------------------------
// Intake
// ---------------------------------------------------------------------------

#[tokio::test]
async fn intake_returns_lead_id() {
    let app = test_app();
    let (status, body) = post_json(&app, "/api/leads", scenario_lead()).await;

    assert_eq!(status, StatusCode::OK, "intake failed: {:?}", body);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Lead saved successfully");
    assert!(!body["leadId"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn intake_rejects_each_missing_field() {
    let app = test_app();
    for field in ["fullName", "email", "phone", "country"] {
        let mut lead = scenario_lead();
        lead[field] = json!("");
        let (status, body) = post_json(&app, "/api/leads", lead).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "field {field}");
        assert_eq!(body, json!({ "success": false, "message": "Missing required fields" }));

        let mut lead = scenario_lead();
        lead.as_object_mut().unwrap().remove(field);
        let (status, _) = post_json(&app, "/api/leads", lead).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "absent field {field}");
    }

    let (_, body) = get_json(&app, "/api/leads").await;
    assert_eq!(body["leads"], json!([]));
}

#[tokio::test]
async fn intake_is_not_idempotent() {
    let app = test_app();
    let (_, first) = post_json(&app, "/api/leads", scenario_lead()).await;
    let (_, second) = post_json(&app, "/api/leads", scenario_lead()).await;
    assert_ne!(first["leadId"], second["leadId"]);

    let (status, body) = get_json(&app, "/api/leads").await;
    assert_eq!(status, StatusCode::OK);
    let leads = body["leads"].as_array().unwrap();
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0]["id"], first["leadId"]);
    assert_eq!(leads[1]["id"], second["leadId"]);
}

#[tokio::test]
async fn server_assigns_id_and_receipt_time() {
    let app = test_app();
    let mut lead = scenario_lead();
    lead["id"] = json!("client-chosen");
    lead["receivedAt"] = json!("1999-01-01T00:00:00Z");
    let (_, reply) = post_json(&app, "/api/leads", lead).await;
    assert_ne!(reply["leadId"], "client-chosen");

    let (_, body) = get_json(&app, "/api/leads").await;
    let stored = &body["leads"][0];
    assert_eq!(stored["id"], reply["leadId"]);
    assert!(!stored["receivedAt"].as_str().unwrap().starts_with("1999"));
    assert_eq!(stored["fullName"], "A B");
    assert_eq!(stored["phone"], "+1 (555) 123-4567");
    assert_eq!(stored["consent"], true);
}

#[tokio::test]
async fn unparseable_body_gets_failure_envelope() {
    let app = test_app();
    for body in ["{not json", "\"just a string\"", ""] {
        let (status, reply) = post_raw(&app, "/api/leads", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(reply, json!({ "success": false, "message": "Invalid request body" }));
    }

    let (_, body) = get_json(&app, "/api/leads").await;
    assert_eq!(body["leads"], json!([]));
}

#[tokio::test]
async fn checkbox_style_consent_is_accepted() {
    let app = test_app();
    let mut lead = scenario_lead();
    lead["consent"] = json!("on");
    let (status, reply) = post_json(&app, "/api/leads", lead).await;
    assert_eq!(status, StatusCode::OK, "intake failed: {:?}", reply);

    let (_, body) = get_json(&app, "/api/leads").await;
    assert_eq!(body["leads"][0]["consent"], true);
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn file_store_persists_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.json");

    let app = build_router(AppState::new(&path));
    let (_, reply) = post_json(&app, "/api/leads", scenario_lead()).await;
    drop(app);

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk[0]["id"], reply["leadId"]);

    let app = build_router(AppState::new(&path));
    let (_, body) = get_json(&app, "/api/leads").await;
    assert_eq!(body["leads"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unreadable_store_lists_empty_but_fails_intake() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be read or replaced as a file.
    let app = build_router(AppState::new(dir.path()));

    let (status, body) = get_json(&app, "/api/leads").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "leads": [] }));

    let (status, body) = post_json(&app, "/api/leads", scenario_lead()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "message": "Error saving lead" }));
}

#[cfg(unix)]
#[tokio::test]
async fn write_protected_store_keeps_existing_leads() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.json");
    let app = build_router(AppState::new(&path));
    let (_, first) = post_json(&app, "/api/leads", scenario_lead()).await;

    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();
    if std::fs::OpenOptions::new().write(true).open(&path).is_ok() {
        // Permission bits are not enforced for this user.
        return;
    }

    let (status, body) = post_json(&app, "/api/leads", scenario_lead()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "message": "Error saving lead" }));

    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600)).unwrap();
    let (_, body) = get_json(&app, "/api/leads").await;
    let leads = body["leads"].as_array().unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0]["id"], first["leadId"]);
}

#[tokio::test]
async fn corrupt_store_is_replaced_on_next_intake() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.json");
    std::fs::write(&path, "not json").unwrap();
    let app = build_router(AppState::new(&path));

    let (_, body) = get_json(&app, "/api/leads").await;
    assert_eq!(body["leads"], json!([]));

    let (status, _) = post_json(&app, "/api/leads", scenario_lead()).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = get_json(&app, "/api/leads").await;
    assert_eq!(body["leads"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Webhook and health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn webhook_acknowledges_booking_without_persisting() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/calendly-webhook",
        json!({
            "event": "invitee.created",
            "payload": {
                "invitee": {
                    "name": "A B",
                    "email": "a@b.com",
                    "scheduled_event": { "start_time": "2026-11-02T15:00:00.000000Z" }
                },
                "event_type": { "name": "Discovery Call" }
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (_, body) = get_json(&app, "/api/leads").await;
    assert_eq!(body["leads"], json!([]));
}

#[tokio::test]
async fn webhook_acknowledges_unknown_events() {
    let app = test_app();
    let (status, body) =
        post_json(&app, "/api/calendly-webhook", json!({ "event": "routing_form.submitted" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn webhook_with_malformed_booking_fails() {
    let app = test_app();
    let (status, body) =
        post_json(&app, "/api/calendly-webhook", json!({ "event": "invitee.created" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "message": "Error processing webhook" }));
}

#[tokio::test]
async fn webhook_with_unparseable_body_fails() {
    let app = test_app();
    let (status, body) = post_raw(&app, "/api/calendly-webhook", "{not json").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "message": "Error processing webhook" }));
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].as_str().is_some());
}
