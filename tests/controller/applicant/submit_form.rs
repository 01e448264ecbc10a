use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crewhub::{model::applicant::VolunteerFormDto, server::controller::applicant::submit_form};
use entity::sea_orm_active_enums::ReviewStatus;

use super::*;

fn form() -> VolunteerFormDto {
    VolunteerFormDto {
        full_name: "Katherine Johnson".to_string(),
        email: "katherine@example.org".to_string(),
        phone: "757-555-0100".to_string(),
        city: "Hampton".to_string(),
        availability: "Sundays".to_string(),
        skills: None,
        motivation: "Happy to help with logistics on event days.".to_string(),
        agreed_to_terms: true,
    }
}

/// Expect 201 and the form as submitted
#[tokio::test]
async fn submits_form() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_applicant_tables()
        .with_profile("u1", false, None)
        .build()
        .await?;
    session::sign_in_volunteer(&test.session, "u1").await;

    let result = submit_form(
        State(test.into_app_state()),
        test.session.clone(),
        Json(form()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["full_name"], "Katherine Johnson");

    Ok(())
}

/// Expect 401 without a signed in user
#[tokio::test]
async fn requires_sign_in() -> Result<(), TestError> {
    let test = test_setup_with_applicant_tables!()?;

    let result = submit_form(
        State(test.into_app_state()),
        test.session.clone(),
        Json(form()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 409 when the form was already submitted
#[tokio::test]
async fn conflicts_on_second_submission() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_applicant_tables()
        .with_applicant("u2", ReviewStatus::Pending)
        .build()
        .await?;
    session::sign_in_volunteer(&test.session, "u2").await;

    let result = submit_form(
        State(test.into_app_state()),
        test.session.clone(),
        Json(form()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 422 listing every invalid field
#[tokio::test]
async fn reports_every_invalid_field() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_applicant_tables()
        .with_profile("u1", false, None)
        .build()
        .await?;
    session::sign_in_volunteer(&test.session, "u1").await;

    let invalid = VolunteerFormDto {
        phone: "call me".to_string(),
        motivation: "Too short".to_string(),
        ..form()
    };
    let result = submit_form(
        State(test.into_app_state()),
        test.session.clone(),
        Json(invalid),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(resp).await;
    let fields: Vec<_> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["phone", "motivation"]);

    Ok(())
}
