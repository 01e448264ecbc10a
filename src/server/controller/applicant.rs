use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        applicant::{ApplicationDto, GateDecisionDto, VolunteerFormDto},
    },
    server::{
        controller::util::session_user::require_user,
        error::{gate::GateError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::applicant::{
            gate::{self, LOOKUP_FAILED_REDIRECT},
            ApplicantService,
        },
    },
};

pub static APPLICANT_TAG: &str = "applicant";

/// Applicant status gate decision for the current session
///
/// Reports where the user should be routed: sign-up, volunteer form, confirmation,
/// dashboard, or rejected. Anonymous sessions are a routing decision, not an error.
///
/// # Responses
/// - 200 (OK): Decision and target page
/// - 500 (Internal Server Error): The applicant profile could not be looked up
#[utoipa::path(
    get,
    path = "/api/applicant/status",
    tag = APPLICANT_TAG,
    responses(
        (status = 200, description = "Routing decision for the current user", body = GateDecisionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session).await?;

    let applicant_service = ApplicantService::new(&state.db);
    let decision = gate::evaluate(&applicant_service, user_id.as_deref()).await?;

    Ok(Json(GateDecisionDto::from(decision)))
}

/// Entry point which redirects the user to the page the applicant status gate picks
///
/// # Responses
/// - 307 (Temporary Redirect): To the gate's target page, or to the error page if the
///   applicant profile could not be looked up
/// - 500 (Internal Server Error): Session store failure
#[utoipa::path(
    get,
    path = "/api/applicant/entry",
    tag = APPLICANT_TAG,
    responses(
        (status = 307, description = "Redirect to the page for the user's application status"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn entry(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session).await?;

    let applicant_service = ApplicantService::new(&state.db);
    let target = match gate::evaluate(&applicant_service, user_id.as_deref()).await {
        Ok(decision) => decision.redirect_to(),
        // Already logged by the gate
        Err(GateError::LookupFailed { .. }) => LOOKUP_FAILED_REDIRECT,
    };

    Ok(Redirect::temporary(target))
}

/// Submit the volunteer application form
///
/// The form can only be submitted once. On success the application awaits admin review.
///
/// # Responses
/// - 201 (Created): Form stored, application pending review
/// - 401 (Unauthorized): Not signed in
/// - 404 (Not Found): The user has no applicant profile
/// - 409 (Conflict): The form was already submitted
/// - 422 (Unprocessable Entity): Validation failed, every invalid field is listed
/// - 500 (Internal Server Error): Database or session store failure
#[utoipa::path(
    post,
    path = "/api/applicant/form",
    tag = APPLICANT_TAG,
    request_body = VolunteerFormDto,
    responses(
        (status = 201, description = "Volunteer form submitted", body = ApplicationDto),
        (status = 401, description = "Sign in required", body = ErrorDto),
        (status = 404, description = "Applicant not found", body = ErrorDto),
        (status = 409, description = "Volunteer form already submitted", body = ErrorDto),
        (status = 422, description = "Volunteer form failed validation", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_form(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<VolunteerFormDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user(&session).await?;

    let application = ApplicantService::new(&state.db)
        .submit_form(&user_id, form)
        .await?;

    Ok((StatusCode::CREATED, Json(application)))
}

/// Get the volunteer application submitted by the signed in user
///
/// # Responses
/// - 200 (OK): The submitted application
/// - 401 (Unauthorized): Not signed in
/// - 404 (Not Found): The user has not submitted the form
/// - 500 (Internal Server Error): Database or session store failure
#[utoipa::path(
    get,
    path = "/api/applicant/application",
    tag = APPLICANT_TAG,
    responses(
        (status = 200, description = "Submitted volunteer application", body = ApplicationDto),
        (status = 401, description = "Sign in required", body = ErrorDto),
        (status = 404, description = "Volunteer application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_application(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user(&session).await?;

    let application = ApplicantService::new(&state.db)
        .get_application(&user_id)
        .await?;

    Ok(Json(application))
}
