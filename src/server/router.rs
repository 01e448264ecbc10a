//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected into
/// a unified OpenAPI document served at `/api/docs/openapi.json`, with Swagger UI at
/// `/api/docs`.
///
/// # Registered Endpoints
/// - `POST /api/auth/session` - Sign in with an auth provider access token
/// - `GET /api/auth/logout` - Sign out
/// - `GET /api/applicant/status` - Applicant status gate decision
/// - `GET /api/applicant/entry` - Redirect to the gate's target page
/// - `POST /api/applicant/form` - Submit the volunteer form
/// - `GET /api/applicant/application` - Get own submitted application
/// - `GET /api/dashboard` - Approved volunteer dashboard
/// - `GET /api/admin/applicants` - List applicants (admin)
/// - `PUT /api/admin/applicants/{user_id}/status` - Review an applicant (admin)
/// - `GET|POST /api/events`, `GET|PUT|DELETE /api/events/{id}` - Events, writes are admin only
///
/// # Returns
/// An Axum `Router<AppState>` ready to have state & the session layer applied.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(app_state).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Crewhub", description = "Crewhub volunteer management API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Sign-in routes"),
        (name = controller::applicant::APPLICANT_TAG, description = "Volunteer application routes"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Approved volunteer routes"),
        (name = controller::admin::ADMIN_TAG, description = "Applicant review routes"),
        (name = controller::event::EVENT_TAG, description = "Volunteer event routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::sign_in))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::applicant::get_status))
        .routes(routes!(controller::applicant::entry))
        .routes(routes!(controller::applicant::submit_form))
        .routes(routes!(controller::applicant::get_application))
        .routes(routes!(controller::dashboard::get_dashboard))
        .routes(routes!(controller::admin::list_applicants))
        .routes(routes!(controller::admin::review_applicant))
        .routes(routes!(
            controller::event::list_events,
            controller::event::create_event
        ))
        .routes(routes!(
            controller::event::get_event,
            controller::event::update_event,
            controller::event::delete_event
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
