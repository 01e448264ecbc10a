use axum::{extract::State, http::StatusCode, response::IntoResponse};
use crewhub::server::controller::applicant::get_application;
use entity::sea_orm_active_enums::ReviewStatus;

use super::*;

#[tokio::test]
async fn returns_own_application() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_applicant_tables()
        .with_applicant("u2", ReviewStatus::Pending)
        .build()
        .await?;
    session::sign_in_volunteer(&test.session, "u2").await;

    let result = get_application(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["email"], "u2@example.org");

    Ok(())
}

/// Expect 404 before the form has been submitted
#[tokio::test]
async fn not_found_before_submission() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_applicant_tables()
        .with_profile("u1", false, None)
        .build()
        .await?;
    session::sign_in_volunteer(&test.session, "u1").await;

    let result = get_application(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
