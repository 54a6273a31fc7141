//! Integration tests for listings, uploads, and the health endpoint.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_and_fetch_listing() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("lagent1", "agent", "verified").await;
    let token = app.create_session(agent).await;

    let response = app
        .request(
            "POST",
            "/api/listings",
            Some(json!({
                "title": "2BR Flat",
                "address": "4 Allen Ave",
                "city": "Ikeja",
                "state": "Lagos",
                "listingType": "apartment",
                "price": 45_000_000,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["listing"]["status"], "ACTIVE");
    let id = response.body["listing"]["id"].as_str().unwrap().to_string();

    let response = app
        .request("GET", &format!("/api/listings/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["listing"]["city"], "Ikeja");
}

#[tokio::test]
async fn test_create_listing_forbidden_for_client() {
    let app = TestApp::new().await;
    let client = app.create_test_user("lclient1", "client", "verified").await;
    let token = app.create_session(client).await;

    let response = app
        .request(
            "POST",
            "/api/listings",
            Some(json!({
                "title": "2BR Flat",
                "address": "4 Allen Ave",
                "city": "Ikeja",
                "state": "Lagos",
                "listingType": "apartment",
                "price": 45_000_000,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_list_listings_filters_by_city() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("lagent2", "agent", "verified").await;
    let listing = app.create_listing(agent, "active").await;
    let id = listing.to_string();

    let response = app
        .request("GET", "/api/listings?city=lagos", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let listings = response.body["listings"].as_array().unwrap();
    assert!(listings.iter().any(|l| l["id"] == id.as_str()));

    let response = app
        .request("GET", "/api/listings?city=abuja", None, None)
        .await;
    let listings = response.body["listings"].as_array().unwrap();
    assert!(!listings.iter().any(|l| l["id"] == id.as_str()));
}

#[tokio::test]
async fn test_upload_register_and_delete() {
    let app = TestApp::new().await;
    let agent = app.create_test_user("lagent3", "agent", "verified").await;
    let other = app.create_test_user("lagent3b", "agent", "verified").await;
    let token = app.create_session(agent).await;

    let response = app
        .request(
            "POST",
            "/api/uploads",
            Some(json!({
                "filename": "front.jpg",
                "url": "https://cdn.example.com/front.jpg",
                "sizeBytes": 1024,
                "mimeType": "image/jpeg",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let id = response.body["upload"]["id"].as_str().unwrap().to_string();

    // Another agent may not delete it.
    let other_token = app.create_session(other).await;
    let response = app
        .request(
            "DELETE",
            &format!("/api/uploads/{id}"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("DELETE", &format!("/api/uploads/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("DELETE", &format!("/api/uploads/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_is_unauthenticated() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["database"], true);
    assert_eq!(response.body["status"], "ok");
}
