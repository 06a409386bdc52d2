//! Integration tests for reservation creation and confirmation.

use http::StatusCode;
use std::collections::HashSet;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_reservation_assigns_numbers() {
    let app = TestApp::new();

    let response = app.create_reservation("PX123456", "ana@example.com", 5).await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = response.data();
    assert_eq!(data["code"], "PX123456");
    assert_eq!(data["confirmed"], false);

    let numbers: Vec<i64> = data["assigned_numbers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n.as_i64().unwrap())
        .collect();
    assert_eq!(numbers.len(), 5);
    let distinct: HashSet<i64> = numbers.iter().copied().collect();
    assert_eq!(distinct.len(), 5);
    assert!(numbers.iter().all(|n| (1..=150).contains(n)));
    assert!(numbers.windows(2).all(|w| w[0] < w[1]), "numbers not ascending");
}

#[tokio::test]
async fn test_duplicate_code_rejected() {
    let app = TestApp::new();

    let first = app.create_reservation("PX123456", "ana@example.com", 2).await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app.create_reservation("PX123456", "luis@example.com", 2).await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.reason(), Some("DUPLICATE_CODE"));
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let app = TestApp::new();

    let response = app.create_reservation("PX1", "not-an-email", 1).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.reason(), Some("INVALID_EMAIL"));
}

#[tokio::test]
async fn test_invalid_combo_rejected() {
    let app = TestApp::new();

    let response = app.create_reservation("PX1", "ana@example.com", 0).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.reason(), Some("INVALID_COMBO"));

    let response = app.create_reservation("PX2", "ana@example.com", 151).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.reason(), Some("INVALID_COMBO"));
}

#[tokio::test]
async fn test_capacity_exceeded_after_pool_fills() {
    let app = TestApp::new();

    let first = app.create_reservation("BIG", "ana@example.com", 100).await;
    assert_eq!(first.status, StatusCode::CREATED);
    let confirmed = app.confirm_reservation("BIG").await;
    assert_eq!(confirmed.status, StatusCode::OK);

    let second = app.create_reservation("NEXT", "luis@example.com", 60).await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.reason(), Some("CAPACITY_EXCEEDED"));
}

#[tokio::test]
async fn test_confirm_flow() {
    let app = TestApp::new();
    app.create_reservation("PX1", "ana@example.com", 3).await;

    let response = app.confirm_reservation("PX1").await;
    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["code"], "PX1");
    assert_eq!(data["assigned_numbers"].as_array().unwrap().len(), 3);
    // The test deployment delivers through the log mailer.
    assert_eq!(data["notification"], "sent");
}

#[tokio::test]
async fn test_confirm_twice_rejected() {
    let app = TestApp::new();
    app.create_reservation("PX1", "ana@example.com", 1).await;

    let first = app.confirm_reservation("PX1").await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.confirm_reservation("PX1").await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.reason(), Some("ALREADY_CONFIRMED"));
}

#[tokio::test]
async fn test_confirm_unknown_code() {
    let app = TestApp::new();

    let response = app.confirm_reservation("GHOST").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_code_exists() {
    let app = TestApp::new();
    app.create_reservation("PX1", "ana@example.com", 1).await;

    let response = app
        .request("GET", "/api/raffle/reservations/PX1/exists", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["exists"], true);

    let response = app
        .request("GET", "/api/raffle/reservations/GHOST/exists", None)
        .await;
    assert_eq!(response.data()["exists"], false);
}
