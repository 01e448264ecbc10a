use axum::{extract::State, http::StatusCode, response::IntoResponse};
use crewhub::server::controller::applicant::get_status;
use entity::sea_orm_active_enums::ReviewStatus;

use super::*;

/// Expect NO_SESSION for an anonymous session
#[tokio::test]
async fn reports_no_session() -> Result<(), TestError> {
    let test = test_setup_with_applicant_tables!()?;

    let result = get_status(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["decision"], "NO_SESSION");
    assert_eq!(body["redirect_to"], "/sign-up");

    Ok(())
}

/// Expect each lifecycle stage to be reported with its target page
#[tokio::test]
async fn reports_decision_for_each_stage() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_applicant_tables()
        .with_profile("u1", false, None)
        .with_applicant("u2", ReviewStatus::Pending)
        .with_applicant("u3", ReviewStatus::Approved)
        .with_applicant("u4", ReviewStatus::Rejected)
        .build()
        .await?;

    let cases = [
        ("u1", "NEEDS_FORM", "/volunteerForm"),
        ("u2", "AWAITING_REVIEW", "/confirmation"),
        ("u3", "APPROVED", "/dashboard"),
        ("u4", "REJECTED", "/rejected"),
    ];

    for (user_id, decision, redirect_to) in cases {
        session::sign_in_volunteer(&test.session, user_id).await;

        let result = get_status(State(test.into_app_state()), test.session.clone()).await;

        let body = json_body(result.unwrap().into_response()).await;
        assert_eq!(body["decision"], decision, "user {}", user_id);
        assert_eq!(body["redirect_to"], redirect_to, "user {}", user_id);
    }

    Ok(())
}

/// Expect 500 rather than a routing decision when the lookup fails
#[tokio::test]
async fn fails_when_lookup_fails() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    session::sign_in_volunteer(&test.session, "u1").await;

    let result = get_status(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
