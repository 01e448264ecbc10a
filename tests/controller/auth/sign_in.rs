use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crewhub::{
    model::auth::SignInDto,
    server::{
        controller::auth::sign_in,
        model::session::user::{SessionUserId, SessionUserRole, UserRole},
    },
};
use entity::sea_orm_active_enums::ReviewStatus;

use super::*;

/// Expect 200 with the form as next step for a first-time user
#[tokio::test]
async fn signs_in_new_user() -> Result<(), TestError> {
    let test = test_setup_with_applicant_tables!()?;
    let access_token = auth_factory::signed_access_token("u1", false)?;

    let result = sign_in(
        State(test.into_app_state()),
        test.session.clone(),
        Json(SignInDto { access_token }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["user_id"], "u1");
    assert_eq!(body["admin"], false);
    assert_eq!(body["gate"]["decision"], "NEEDS_FORM");
    assert_eq!(body["gate"]["redirect_to"], "/volunteerForm");

    // Ensure the user is now in session
    let user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(user_id.as_deref(), Some("u1"));

    Ok(())
}

/// Expect an admin role claim to be stored in session
#[tokio::test]
async fn stores_admin_role() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_applicant_tables()
        .with_applicant("admin-1", ReviewStatus::Approved)
        .build()
        .await?;
    let access_token = auth_factory::signed_access_token("admin-1", true)?;

    let result = sign_in(
        State(test.into_app_state()),
        test.session.clone(),
        Json(SignInDto { access_token }),
    )
    .await;

    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body["admin"], true);
    assert_eq!(body["gate"]["decision"], "APPROVED");
    let role = SessionUserRole::get(&test.session).await.unwrap();
    assert_eq!(role, Some(UserRole::Admin));

    Ok(())
}

/// Expect 401 and an untouched session for an expired token
#[tokio::test]
async fn rejects_expired_token() -> Result<(), TestError> {
    let test = test_setup_with_applicant_tables!()?;
    let access_token = auth_factory::expired_access_token("u1")?;

    let result = sign_in(
        State(test.into_app_state()),
        test.session.clone(),
        Json(SignInDto { access_token }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(user_id.is_none());

    Ok(())
}

/// Expect 500 when the applicant tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let access_token = auth_factory::signed_access_token("u1", false)?;

    let result = sign_in(
        State(test.into_app_state()),
        test.session.clone(),
        Json(SignInDto { access_token }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
