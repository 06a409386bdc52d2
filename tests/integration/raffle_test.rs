//! Integration tests for progress, by-email lookups, number ownership,
//! and the free-entry sub-flow.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_progress_counts_confirmed_only() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/raffle/progress", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["sold"], 0);
    assert_eq!(
        response.data()["total"],
        app.config.raffle.pool_size() as i64
    );

    app.create_reservation("PX1", "ana@example.com", 10).await;
    let response = app.request("GET", "/api/raffle/progress", None).await;
    assert_eq!(response.data()["sold"], 0, "pending tickets are not sold");

    app.confirm_reservation("PX1").await;
    let response = app.request("GET", "/api/raffle/progress", None).await;
    assert_eq!(response.data()["sold"], 10);
}

#[tokio::test]
async fn test_by_email_pending_hides_numbers() {
    let app = TestApp::new();
    app.create_reservation("PX1", "ana@example.com", 3).await;

    let response = app
        .request(
            "GET",
            "/api/raffle/reservations/by-email/ana@example.com",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["status"], "pending");
    let entries = data["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["status"], "pending");
    assert!(entries[0].get("assigned_numbers").is_none());
}

#[tokio::test]
async fn test_by_email_confirmed_exposes_numbers() {
    let app = TestApp::new();
    app.create_reservation("PX1", "ana@example.com", 3).await;
    app.confirm_reservation("PX1").await;
    app.create_reservation("PX2", "ana@example.com", 2).await;

    let response = app
        .request(
            "GET",
            "/api/raffle/reservations/by-email/ana@example.com",
            None,
        )
        .await;

    let data = response.data();
    assert_eq!(data["status"], "ok");
    let entries = data["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);

    let confirmed = entries.iter().find(|e| e["code"] == "PX1").unwrap();
    assert_eq!(confirmed["status"], "ok");
    assert_eq!(confirmed["assigned_numbers"].as_array().unwrap().len(), 3);

    let pending = entries.iter().find(|e| e["code"] == "PX2").unwrap();
    assert_eq!(pending["status"], "pending");
    assert!(pending.get("assigned_numbers").is_none());
}

#[tokio::test]
async fn test_by_email_unknown_address() {
    let app = TestApp::new();

    let response = app
        .request(
            "GET",
            "/api/raffle/reservations/by-email/ghost@example.com",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "not-found");
    assert!(response.data()["entries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_number_owner_lookup() {
    let app = TestApp::new();
    let created = app.create_reservation("PX1", "ana@example.com", 1).await;
    let number = created.data()["assigned_numbers"][0].as_i64().unwrap();

    // Unconfirmed numbers have no owner.
    let response = app
        .request("GET", &format!("/api/raffle/numbers/{number}/owner"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    app.confirm_reservation("PX1").await;
    let response = app
        .request("GET", &format!("/api/raffle/numbers/{number}/owner"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["code"], "PX1");
    assert_eq!(response.data()["buyer_name"], "Ana");

    // Out-of-pool numbers are a caller fault, not a miss.
    let response = app
        .request("GET", "/api/raffle/numbers/9999/owner", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_free_entry_flow() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/raffle/free-entries",
            Some(serde_json::json!({
                "buyer_name": "Ana",
                "phone": "999111222",
                "city": "Lima",
                "email": "ana@example.com",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = response.data();
    assert!(data["code"].as_str().unwrap().starts_with("FREE-"));
    assert_eq!(data["assigned_numbers"].as_array().unwrap().len(), 1);

    // A free entry is confirmed immediately, so it owns its number.
    let number = data["assigned_numbers"][0].as_i64().unwrap();
    let owner = app
        .request("GET", &format!("/api/raffle/numbers/{number}/owner"), None)
        .await;
    assert_eq!(owner.status, StatusCode::OK);

    // And it counts toward progress.
    let progress = app.request("GET", "/api/raffle/progress", None).await;
    assert_eq!(progress.data()["sold"], 1);
}

#[tokio::test]
async fn test_free_entry_once_per_email() {
    let app = TestApp::new();
    let body = serde_json::json!({
        "buyer_name": "Ana",
        "phone": "999111222",
        "city": "Lima",
        "email": "ana@example.com",
    });

    let first = app
        .request("POST", "/api/raffle/free-entries", Some(body.clone()))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", "/api/raffle/free-entries", Some(body))
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.reason(), Some("FREE_ENTRY_EXISTS"));
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
}
