//! Integration tests for notification fan-out and the feed API.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn create_inspection(app: &TestApp, client: uuid::Uuid, listing: uuid::Uuid) -> String {
    let token = app.create_session(client).await;
    let response = app
        .request(
            "POST",
            "/api/inspections",
            Some(json!({
                "propertyId": listing,
                "inspectionType": "VIRTUAL",
                "scheduledAt": TestApp::future_time(48),
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["inspection"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_creation_fans_out_to_every_verified_inspector() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("nagent1", "agent", "verified").await;
    let client = app.create_test_user("nclient1", "client", "verified").await;
    let verified_a = app
        .create_test_user("ninspector1a", "inspector", "verified")
        .await;
    let verified_b = app
        .create_test_user("ninspector1b", "inspector", "verified")
        .await;
    let pending = app
        .create_test_user("ninspector1c", "inspector", "pending")
        .await;
    let listing = app.create_listing(agent, "active").await;

    let inspection = create_inspection(&app, client, listing).await;

    for inspector in [verified_a, verified_b] {
        let token = app.create_session(inspector).await;
        let response = app
            .request("GET", "/api/notifications", None, Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        let rows = response.body["notifications"].as_array().unwrap();
        let row = rows
            .iter()
            .find(|n| n["inspectionId"] == inspection.as_str())
            .expect("verified inspector should be notified");
        assert_eq!(row["kind"], "NEW_JOB_AVAILABLE");
        assert_eq!(row["isRead"], false);
    }

    let token = app.create_session(pending).await;
    let response = app
        .request("GET", "/api/notifications", None, Some(&token))
        .await;
    let rows = response.body["notifications"].as_array().unwrap();
    assert!(!rows.iter().any(|n| n["inspectionId"] == inspection.as_str()));
}

#[tokio::test]
async fn test_creation_notifies_client_and_agent() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("nagent2", "agent", "verified").await;
    let client = app.create_test_user("nclient2", "client", "verified").await;
    let listing = app.create_listing(agent, "active").await;

    create_inspection(&app, client, listing).await;

    for user in [client, agent] {
        let token = app.create_session(user).await;
        let response = app
            .request("GET", "/api/notifications", None, Some(&token))
            .await;
        let rows = response.body["notifications"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["kind"], "INSPECTION_SCHEDULED");
    }
}

#[tokio::test]
async fn test_unread_count_and_mark_read() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("nagent3", "agent", "verified").await;
    let client = app.create_test_user("nclient3", "client", "verified").await;
    let listing = app.create_listing(agent, "active").await;
    create_inspection(&app, client, listing).await;

    let token = app.create_session(client).await;
    let response = app
        .request("GET", "/api/notifications/unread-count", None, Some(&token))
        .await;
    assert_eq!(response.body["count"], 1);

    let feed = app
        .request("GET", "/api/notifications", None, Some(&token))
        .await;
    let id = feed.body["notifications"][0]["id"].as_str().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{id}/read"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/notifications/unread-count", None, Some(&token))
        .await;
    assert_eq!(response.body["count"], 0);
}

#[tokio::test]
async fn test_foreign_notification_is_not_found() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("nagent4", "agent", "verified").await;
    let client = app.create_test_user("nclient4", "client", "verified").await;
    let intruder = app
        .create_test_user("nclient4b", "client", "verified")
        .await;
    let listing = app.create_listing(agent, "active").await;
    create_inspection(&app, client, listing).await;

    let owner_token = app.create_session(client).await;
    let feed = app
        .request("GET", "/api/notifications", None, Some(&owner_token))
        .await;
    let id = feed.body["notifications"][0]["id"].as_str().unwrap();

    let intruder_token = app.create_session(intruder).await;
    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{id}/read"),
            None,
            Some(&intruder_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "DELETE",
            &format!("/api/notifications/{id}"),
            None,
            Some(&intruder_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dismiss_removes_row() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("nagent5", "agent", "verified").await;
    let client = app.create_test_user("nclient5", "client", "verified").await;
    let listing = app.create_listing(agent, "active").await;
    create_inspection(&app, client, listing).await;

    let token = app.create_session(client).await;
    let feed = app
        .request("GET", "/api/notifications", None, Some(&token))
        .await;
    let id = feed.body["notifications"][0]["id"].as_str().unwrap();

    let response = app
        .request(
            "DELETE",
            &format!("/api/notifications/{id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let feed = app
        .request("GET", "/api/notifications", None, Some(&token))
        .await;
    assert!(feed.body["notifications"].as_array().unwrap().is_empty());
}
