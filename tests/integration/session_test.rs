//! Integration tests for session validation and expired-session cleanup.

use http::StatusCode;

use haven_database::repositories::session::SessionRepository;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_expired_session_is_unauthorized() {
    let app = TestApp::new().await;
    let client = app.create_test_user("sclient1", "client", "verified").await;
    let token = app.create_session_expiring(client, -1).await;

    let response = app
        .request("GET", "/api/notifications", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_expired_purges_only_stale_sessions() {
    let app = TestApp::new().await;
    let client = app.create_test_user("sclient2", "client", "verified").await;
    let stale = app.create_session_expiring(client, -2).await;
    let live = app.create_session(client).await;

    let sessions = SessionRepository::new(app.db_pool.clone());
    let removed = sessions.delete_expired().await.unwrap();
    assert!(removed >= 1, "the stale session should be purged");

    let found = sessions.find_active_by_token(&stale).await.unwrap();
    assert!(found.is_none());

    let response = app
        .request("GET", "/api/notifications", None, Some(&live))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
