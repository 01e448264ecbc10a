//! Requests routed through the full application stack.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use crewhub::server::router;
use crewhub_test_utils::prelude::*;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::{json_body, TestSetupExt};

fn app(test: &TestSetup) -> Router {
    router::routes()
        .with_state(test.into_app_state())
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

/// Expect the gate to report NO_SESSION for a request without a session cookie
#[tokio::test]
async fn status_without_session() -> Result<(), TestError> {
    let test = test_setup_with_applicant_tables!()?;

    let resp = app(&test)
        .oneshot(
            Request::get("/api/applicant/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["decision"], "NO_SESSION");
    assert_eq!(body["redirect_to"], "/sign-up");

    Ok(())
}

/// Expect the entry point to redirect anonymous visitors to sign up
#[tokio::test]
async fn entry_redirects_to_sign_up() -> Result<(), TestError> {
    let test = test_setup_with_applicant_tables!()?;

    let resp = app(&test)
        .oneshot(
            Request::get("/api/applicant/entry")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(resp.status().is_redirection());
    assert_eq!(resp.headers()[header::LOCATION], "/sign-up");

    Ok(())
}

#[tokio::test]
async fn lists_events() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_table()
        .with_event("Beach cleanup", 3)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(Request::get("/api/events").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body[0]["title"], "Beach cleanup");

    Ok(())
}

/// Expect a malformed JSON body to be rejected before reaching the handler
#[tokio::test]
async fn rejects_malformed_sign_in_body() -> Result<(), TestError> {
    let test = test_setup_with_applicant_tables!()?;

    let resp = app(&test)
        .oneshot(
            Request::post("/api/auth/session")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"token\":"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(resp.status().is_client_error());

    Ok(())
}

#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = app(&test)
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert!(body["paths"]["/api/applicant/status"].is_object());

    Ok(())
}
