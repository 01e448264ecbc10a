use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        applicant::{ApplicantDto, ApplicationStatusDto, ReviewDto},
    },
    server::{
        controller::util::session_user::require_admin, error::Error, model::app::AppState,
        service::applicant::ApplicantService,
    },
};

pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct ApplicantFilterParams {
    /// Only list applicants in this review status
    pub status: Option<ApplicationStatusDto>,
}

/// List applicants who submitted the volunteer form, newest first
///
/// # Responses
/// - 200 (OK): Applicants with their submitted forms
/// - 401 (Unauthorized): Not signed in
/// - 403 (Forbidden): Signed in without the admin role
/// - 500 (Internal Server Error): Database or session store failure
#[utoipa::path(
    get,
    path = "/api/admin/applicants",
    tag = ADMIN_TAG,
    params(ApplicantFilterParams),
    responses(
        (status = 200, description = "Applicants", body = Vec<ApplicantDto>),
        (status = 401, description = "Sign in required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_applicants(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ApplicantFilterParams>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let applicants = ApplicantService::new(&state.db)
        .list_applicants(params.status.map(Into::into))
        .await?;

    Ok(Json(applicants))
}

/// Review an applicant by setting their application status
///
/// Reviews may be repeated; the latest review wins.
///
/// # Responses
/// - 204 (No Content): Review recorded
/// - 401 (Unauthorized): Not signed in
/// - 403 (Forbidden): Signed in without the admin role
/// - 404 (Not Found): No applicant with the user ID
/// - 409 (Conflict): The applicant has not submitted the volunteer form
/// - 500 (Internal Server Error): Database or session store failure
#[utoipa::path(
    put,
    path = "/api/admin/applicants/{user_id}/status",
    tag = ADMIN_TAG,
    params(("user_id" = String, Path, description = "User ID of the applicant")),
    request_body = ReviewDto,
    responses(
        (status = 204, description = "Review recorded"),
        (status = 401, description = "Sign in required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Applicant not found", body = ErrorDto),
        (status = 409, description = "Applicant has not submitted the volunteer form", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_applicant(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Json(review): Json<ReviewDto>,
) -> Result<impl IntoResponse, Error> {
    let admin_id = require_admin(&session).await?;

    ApplicantService::new(&state.db)
        .review(&user_id, review.status.into(), &admin_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
