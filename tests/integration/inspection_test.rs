//! Integration tests for the inspection lifecycle.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_inspection_as_client() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("agent1", "agent", "verified").await;
    let client = app.create_test_user("client1", "client", "verified").await;
    let listing = app.create_listing(agent, "active").await;
    let token = app.create_session(client).await;

    let response = app
        .request(
            "POST",
            "/api/inspections",
            Some(json!({
                "propertyId": listing,
                "inspectionType": "VIRTUAL",
                "scheduledAt": TestApp::future_time(48),
                "notes": "prefer mornings",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let inspection = &response.body["inspection"];
    assert_eq!(inspection["fee"], 15_000);
    assert_eq!(inspection["durationMinutes"], 30);
    assert_eq!(inspection["paid"], false);
    assert!(inspection["inspectorId"].is_null());
    assert_eq!(inspection["clients"][0]["notes"], "prefer mornings");
}

#[tokio::test]
async fn test_create_inspection_unauthenticated() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/inspections", Some(json!({})), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_inspection_forbidden_for_agent() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("agent2", "agent", "verified").await;
    let listing = app.create_listing(agent, "active").await;
    let token = app.create_session(agent).await;

    let response = app
        .request(
            "POST",
            "/api/inspections",
            Some(json!({
                "propertyId": listing,
                "inspectionType": "PHYSICAL",
                "scheduledAt": TestApp::future_time(48),
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_inspection_rejects_past_date() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("agent3", "agent", "verified").await;
    let client = app.create_test_user("client3", "client", "verified").await;
    let listing = app.create_listing(agent, "active").await;
    let token = app.create_session(client).await;

    let response = app
        .request(
            "POST",
            "/api/inspections",
            Some(json!({
                "propertyId": listing,
                "inspectionType": "VIRTUAL",
                "scheduledAt": TestApp::future_time(-2),
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["message"]
        .as_str()
        .unwrap()
        .contains("future date"));
}

#[tokio::test]
async fn test_create_inspection_missing_listing() {
    let app = TestApp::new().await;
    let client = app.create_test_user("client4", "client", "verified").await;
    let token = app.create_session(client).await;

    let response = app
        .request(
            "POST",
            "/api/inspections",
            Some(json!({
                "propertyId": "00000000-0000-0000-0000-999999999999",
                "inspectionType": "VIRTUAL",
                "scheduledAt": TestApp::future_time(48),
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_inspection_inactive_listing() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("agent5", "agent", "verified").await;
    let client = app.create_test_user("client5", "client", "verified").await;
    let listing = app.create_listing(agent, "sold").await;
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

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_inspection_rejects_unknown_type() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("agent6", "agent", "verified").await;
    let client = app.create_test_user("client6", "client", "verified").await;
    let listing = app.create_listing(agent, "active").await;
    let token = app.create_session(client).await;

    let response = app
        .request(
            "POST",
            "/api/inspections",
            Some(json!({
                "propertyId": listing,
                "inspectionType": "DRIVE_BY",
                "scheduledAt": TestApp::future_time(48),
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

async fn seed_inspection(app: &TestApp, client: uuid::Uuid, listing: uuid::Uuid) -> String {
    let token = app.create_session(client).await;
    let response = app
        .request(
            "POST",
            "/api/inspections",
            Some(json!({
                "propertyId": listing,
                "inspectionType": "PHYSICAL",
                "scheduledAt": TestApp::future_time(12),
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
async fn test_list_inspections_is_role_scoped() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("agent7", "agent", "verified").await;
    let client = app.create_test_user("client7", "client", "verified").await;
    let other = app.create_test_user("client7b", "client", "verified").await;
    let listing = app.create_listing(agent, "active").await;
    seed_inspection(&app, client, listing).await;

    let client_token = app.create_session(client).await;
    let response = app
        .request("GET", "/api/inspections", None, Some(&client_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["inspections"].as_array().unwrap().len(), 1);

    let other_token = app.create_session(other).await;
    let response = app
        .request("GET", "/api/inspections", None, Some(&other_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["inspections"].as_array().unwrap().is_empty());

    let agent_token = app.create_session(agent).await;
    let response = app
        .request("GET", "/api/inspections", None, Some(&agent_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["inspections"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_available_jobs_requires_inspector() {
    let app = TestApp::new().await;
    let client = app.create_test_user("client8", "client", "verified").await;
    let token = app.create_session(client).await;

    let response = app
        .request(
            "GET",
            "/api/inspections/available-jobs",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_available_jobs_carries_urgency_and_payment() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("agent9", "agent", "verified").await;
    let client = app.create_test_user("client9", "client", "verified").await;
    let inspector = app
        .create_test_user("inspector9", "inspector", "verified")
        .await;
    let listing = app.create_listing(agent, "active").await;
    let inspection = seed_inspection(&app, client, listing).await;

    let token = app.create_session(inspector).await;
    let response = app
        .request(
            "GET",
            "/api/inspections/available-jobs",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["jobs"].is_null());
    let jobs = response.body["availableJobs"].as_array().unwrap();
    let job = jobs
        .iter()
        .find(|j| j["id"] == inspection.as_str())
        .expect("seeded job should be on the board");
    // Scheduled 12h out: within the 24h window.
    assert_eq!(job["urgency"], "HIGH");
    assert_eq!(job["payment"]["status"], "PENDING");
    assert_eq!(job["payment"]["amount"], 30_000);
    assert_eq!(job["property"]["city"], "Lagos");
}

#[tokio::test]
async fn test_accept_job_then_conflict_on_second_accept() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("agent10", "agent", "verified").await;
    let client = app.create_test_user("client10", "client", "verified").await;
    let first = app
        .create_test_user("inspector10a", "inspector", "verified")
        .await;
    let second = app
        .create_test_user("inspector10b", "inspector", "verified")
        .await;
    let listing = app.create_listing(agent, "active").await;
    let inspection = seed_inspection(&app, client, listing).await;

    let first_token = app.create_session(first).await;
    let response = app
        .request(
            "POST",
            &format!("/api/inspections/{inspection}/accept"),
            None,
            Some(&first_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body["inspection"]["inspectorId"],
        first.to_string()
    );

    let second_token = app.create_session(second).await;
    let response = app
        .request(
            "POST",
            &format!("/api/inspections/{inspection}/accept"),
            None,
            Some(&second_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_accept_job_requires_verification() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("agent11", "agent", "verified").await;
    let client = app.create_test_user("client11", "client", "verified").await;
    let inspector = app
        .create_test_user("inspector11", "inspector", "pending")
        .await;
    let listing = app.create_listing(agent, "active").await;
    let inspection = seed_inspection(&app, client, listing).await;

    let token = app.create_session(inspector).await;
    let response = app
        .request(
            "POST",
            &format!("/api/inspections/{inspection}/accept"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_accept_missing_inspection_is_not_found() {
    let app = TestApp::new().await;
    let inspector = app
        .create_test_user("inspector12", "inspector", "verified")
        .await;
    let token = app.create_session(inspector).await;

    let response = app
        .request(
            "POST",
            "/api/inspections/00000000-0000-0000-0000-999999999999/accept",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_status_lifecycle_and_bad_transition() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("agent13", "agent", "verified").await;
    let client = app.create_test_user("client13", "client", "verified").await;
    let inspector = app
        .create_test_user("inspector13", "inspector", "verified")
        .await;
    let listing = app.create_listing(agent, "active").await;
    let inspection = seed_inspection(&app, client, listing).await;

    let token = app.create_session(inspector).await;
    app.request(
        "POST",
        &format!("/api/inspections/{inspection}/accept"),
        None,
        Some(&token),
    )
    .await;

    // Scheduled → completed skips in_progress.
    let response = app
        .request(
            "PUT",
            &format!("/api/inspections/{inspection}/status"),
            Some(json!({"status": "COMPLETED"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let response = app
        .request(
            "PUT",
            &format!("/api/inspections/{inspection}/status"),
            Some(json!({"status": "IN_PROGRESS"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let response = app
        .request(
            "PUT",
            &format!("/api/inspections/{inspection}/status"),
            Some(json!({"status": "COMPLETED"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["inspection"]["status"], "COMPLETED");
}

#[tokio::test]
async fn test_cancel_forbidden_for_stranger() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("agent14", "agent", "verified").await;
    let client = app.create_test_user("client14", "client", "verified").await;
    let stranger = app
        .create_test_user("client14b", "client", "verified")
        .await;
    let listing = app.create_listing(agent, "active").await;
    let inspection = seed_inspection(&app, client, listing).await;

    let token = app.create_session(stranger).await;
    let response = app
        .request(
            "PUT",
            &format!("/api/inspections/{inspection}/status"),
            Some(json!({"status": "CANCELLED"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let client_token = app.create_session(client).await;
    let response = app
        .request(
            "PUT",
            &format!("/api/inspections/{inspection}/status"),
            Some(json!({"status": "CANCELLED"})),
            Some(&client_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
