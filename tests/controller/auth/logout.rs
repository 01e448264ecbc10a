use axum::{http::StatusCode, response::IntoResponse};
use crewhub::server::{controller::auth::logout, model::session::user::SessionUserId};

use super::*;

#[tokio::test]
/// Expect 307 temporary redirect after logout with a user ID in session
async fn returns_redirect_on_logout_with_user_id() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    session::sign_in_volunteer(&test.session, "u1").await;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    // Ensure user was cleared from session
    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 temporary redirect after logout even without session data
///
/// Clearing a session without any data in it fails, so the endpoint only clears the
/// session when a user is present and redirects regardless.
async fn returns_redirect_on_logout_with_no_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
