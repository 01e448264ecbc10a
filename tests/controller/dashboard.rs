//! Tests for the volunteer dashboard endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use crewhub::server::controller::dashboard::get_dashboard;
use entity::sea_orm_active_enums::ReviewStatus;

use super::*;

/// Expect approved volunteers to see only events which have not ended
#[tokio::test]
async fn shows_upcoming_events_to_approved_volunteer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_applicant_tables()
        .with_event_table()
        .with_applicant("u3", ReviewStatus::Approved)
        .with_event("Last week", -7)
        .with_event("Next week", 7)
        .build()
        .await?;
    session::sign_in_volunteer(&test.session, "u3").await;

    let result = get_dashboard(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["user_id"], "u3");
    let events = body["upcoming_events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "Next week");

    Ok(())
}

/// Expect 403 with the gate's redirect target for applicants not yet approved
#[tokio::test]
async fn refuses_unapproved_applicants() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_applicant_tables()
        .with_event_table()
        .with_profile("u1", false, None)
        .with_applicant("u2", ReviewStatus::Pending)
        .with_applicant("u4", ReviewStatus::Rejected)
        .build()
        .await?;

    let cases = [
        ("u1", "/volunteerForm"),
        ("u2", "/confirmation"),
        ("u4", "/rejected"),
    ];

    for (user_id, redirect_to) in cases {
        session::sign_in_volunteer(&test.session, user_id).await;

        let result = get_dashboard(State(test.into_app_state()), test.session.clone()).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "user {}", user_id);
        let body = json_body(resp).await;
        assert_eq!(body["redirect_to"], redirect_to, "user {}", user_id);
    }

    Ok(())
}

/// Expect 401 without a signed in user
#[tokio::test]
async fn requires_sign_in() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_applicant_tables()
        .with_event_table()
        .build()
        .await?;

    let result = get_dashboard(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
