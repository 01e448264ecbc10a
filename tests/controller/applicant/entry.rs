use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use crewhub::server::controller::applicant::entry;
use entity::sea_orm_active_enums::ReviewStatus;

use super::*;

fn location(resp: &axum::response::Response) -> &str {
    resp.headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// Expect anonymous users to be redirected to sign-up
#[tokio::test]
async fn redirects_anonymous_user_to_sign_up() -> Result<(), TestError> {
    let test = test_setup_with_applicant_tables!()?;

    let result = entry(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/sign-up");

    Ok(())
}

/// Expect a signed in user without a profile to be sent to the form
#[tokio::test]
async fn redirects_user_without_profile_to_form() -> Result<(), TestError> {
    let test = test_setup_with_applicant_tables!()?;
    session::sign_in_volunteer(&test.session, "u1").await;

    let result = entry(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(location(&resp), "/volunteerForm");

    Ok(())
}

#[tokio::test]
async fn redirects_approved_volunteer_to_dashboard() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_applicant_tables()
        .with_applicant("u3", ReviewStatus::Approved)
        .build()
        .await?;
    session::sign_in_volunteer(&test.session, "u3").await;

    let result = entry(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(location(&resp), "/dashboard");

    Ok(())
}

/// Expect a failed lookup to redirect to the error page, not to any lifecycle page
#[tokio::test]
async fn redirects_to_error_page_when_lookup_fails() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    session::sign_in_volunteer(&test.session, "u1").await;

    let result = entry(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/error");

    Ok(())
}
