use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, RedirectErrorDto},
        event::DashboardDto,
    },
    server::{
        controller::util::session_user::require_user,
        error::{auth::AuthError, Error},
        model::app::AppState,
        service::{
            applicant::{
                gate::{self, GateDecision},
                ApplicantService,
            },
            event::EventService,
        },
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Volunteer dashboard with upcoming events
///
/// Only approved volunteers may view the dashboard; everyone else is told where the
/// applicant status gate routes them instead.
///
/// # Responses
/// - 200 (OK): Dashboard for an approved volunteer
/// - 401 (Unauthorized): Not signed in
/// - 403 (Forbidden): Not approved, body carries the page to redirect to
/// - 500 (Internal Server Error): Database or session store failure
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Volunteer dashboard", body = DashboardDto),
        (status = 401, description = "Sign in required", body = ErrorDto),
        (status = 403, description = "Applicant is not an approved volunteer", body = RedirectErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user(&session).await?;

    let applicant_service = ApplicantService::new(&state.db);
    let decision = gate::evaluate(&applicant_service, Some(&user_id)).await?;

    if decision != GateDecision::Approved {
        return Err(AuthError::NotApproved {
            user_id,
            redirect_to: decision.redirect_to(),
        }
        .into());
    }

    let upcoming_events = EventService::new(&state.db)
        .list_upcoming(Utc::now().naive_utc())
        .await?;

    Ok(Json(DashboardDto {
        user_id,
        upcoming_events,
    }))
}
