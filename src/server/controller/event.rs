use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        event::{EventDto, EventInputDto},
    },
    server::{
        controller::util::session_user::require_admin, error::Error, model::app::AppState,
        service::event::EventService,
    },
};

pub static EVENT_TAG: &str = "event";

/// List all events ordered by start time
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let events = EventService::new(&state.db).list().await?;

    Ok(Json(events))
}

/// Get a single event
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let event = EventService::new(&state.db).get(id).await?;

    Ok(Json(event))
}

/// Create an event
///
/// # Responses
/// - 201 (Created): The created event
/// - 401 (Unauthorized): Not signed in
/// - 403 (Forbidden): Signed in without the admin role
/// - 422 (Unprocessable Entity): Validation failed
/// - 500 (Internal Server Error): Database or session store failure
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = EventInputDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 401, description = "Sign in required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 422, description = "Event failed validation", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<EventInputDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let event = EventService::new(&state.db).create(input).await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// Update an event
///
/// # Responses
/// - 200 (OK): The updated event
/// - 401 (Unauthorized): Not signed in
/// - 403 (Forbidden): Signed in without the admin role
/// - 404 (Not Found): No event with the ID
/// - 422 (Unprocessable Entity): Validation failed
/// - 500 (Internal Server Error): Database or session store failure
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = EventInputDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 401, description = "Sign in required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 422, description = "Event failed validation", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(input): Json<EventInputDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let event = EventService::new(&state.db).update(id, input).await?;

    Ok(Json(event))
}

/// Delete an event
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Sign in required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    EventService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
