use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{SessionDto, SignInDto},
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            session::user::{SessionUserId, SessionUserRole, UserRole},
        },
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Sign in with an access token issued by the auth provider
///
/// Verifies the token, creates the user's applicant profile on first sign-in and stores the
/// user in session. The response includes where the applicant status gate routes the user.
///
/// # Responses
/// - 200 (OK): Signed in
/// - 401 (Unauthorized): Token has a bad signature, is expired, or has the wrong audience
/// - 500 (Internal Server Error): Database or session store failure
#[utoipa::path(
    post,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Signed in", body = SessionDto),
        (status = 401, description = "Access token failed verification", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignInDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.access_token_keys);

    let user = auth_service.sign_in(&payload.access_token).await?;

    // New session ID on privilege change
    session.cycle_id().await?;
    SessionUserId::insert(&session, &user.user_id).await?;
    SessionUserRole::insert(&session, user.role).await?;

    Ok(Json(SessionDto {
        user_id: user.user_id,
        admin: user.role == UserRole::Admin,
        gate: user.decision.into(),
    }))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Successfully logged out, redirect to the home page
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Signed out, redirecting to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear session if there is actually a user in session
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}
