use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crewhub::{
    model::applicant::{ApplicationStatusDto, ReviewDto},
    server::controller::{admin::review_applicant, applicant::get_status},
};
use entity::sea_orm_active_enums::ReviewStatus;

use super::*;

/// Expect 204 and the applicant's gate decision to follow the review
#[tokio::test]
async fn approves_applicant() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_applicant_tables()
        .with_applicant("u2", ReviewStatus::Pending)
        .build()
        .await?;
    session::sign_in_admin(&test.session, "admin-1").await;

    let result = review_applicant(
        State(test.into_app_state()),
        test.session.clone(),
        Path("u2".to_string()),
        Json(ReviewDto {
            status: ApplicationStatusDto::Approved,
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // The applicant is routed to the dashboard on their next check
    session::sign_in_volunteer(&test.session, "u2").await;
    let status = get_status(State(test.into_app_state()), test.session.clone()).await;
    let body = json_body(status.unwrap().into_response()).await;
    assert_eq!(body["decision"], "APPROVED");

    Ok(())
}

/// Expect 409 when reviewing an applicant who has not submitted the form
#[tokio::test]
async fn conflicts_before_form_submission() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_applicant_tables()
        .with_profile("u1", false, None)
        .build()
        .await?;
    session::sign_in_admin(&test.session, "admin-1").await;

    let result = review_applicant(
        State(test.into_app_state()),
        test.session.clone(),
        Path("u1".to_string()),
        Json(ReviewDto {
            status: ApplicationStatusDto::Approved,
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn not_found_for_unknown_applicant() -> Result<(), TestError> {
    let test = test_setup_with_applicant_tables!()?;
    session::sign_in_admin(&test.session, "admin-1").await;

    let result = review_applicant(
        State(test.into_app_state()),
        test.session.clone(),
        Path("missing".to_string()),
        Json(ReviewDto {
            status: ApplicationStatusDto::Rejected,
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 403 for volunteers, without changing the applicant
#[tokio::test]
async fn forbidden_for_volunteer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_applicant_tables()
        .with_applicant("u2", ReviewStatus::Pending)
        .build()
        .await?;
    session::sign_in_volunteer(&test.session, "u2").await;

    let result = review_applicant(
        State(test.into_app_state()),
        test.session.clone(),
        Path("u2".to_string()),
        Json(ReviewDto {
            status: ApplicationStatusDto::Approved,
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
