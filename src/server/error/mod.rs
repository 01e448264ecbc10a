//! Error types for the Crewhub server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, configuration, applicants, events, and the applicant status gate).
//! All errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! ergonomic error definitions with automatic `Display` and `Error` trait implementations.

pub mod applicant;
pub mod auth;
pub mod config;
pub mod event;
pub mod gate;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, FieldErrorDto, ValidationErrorDto},
    server::error::{
        applicant::ApplicantError, auth::AuthError, config::ConfigError, event::EventError,
        gate::GateError,
    },
};

/// Main error type for the Crewhub server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (session, access token, role checks)
/// - Applicant errors (profile lifecycle, form validation, review)
/// - Event errors (missing events, validation)
/// - Gate errors (profile lookup failures surfaced by the applicant status gate)
/// - External library errors (database, sessions, session store, IO)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, access token, role checks).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Applicant lifecycle error (profile, form submission, review).
    #[error(transparent)]
    ApplicantError(#[from] ApplicantError),
    /// Event management error.
    #[error(transparent)]
    EventError(#[from] EventError),
    /// Applicant status gate could not look up the profile.
    #[error(transparent)]
    GateError(#[from] GateError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// IO error (binding the HTTP listener, serving requests).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Errors without a specific mapping are treated as internal server errors (500) and logged.
///
/// # Returns
/// - 401 Unauthorized - Not signed in or invalid access token
/// - 403 Forbidden - Missing admin role or applicant not approved
/// - 404 Not Found - Missing profile, application or event
/// - 409 Conflict - Form already submitted, review before form submission
/// - 422 Unprocessable Entity - Form or event validation failures
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ApplicantError(err) => err.into_response(),
            Self::EventError(err) => err.into_response(),
            Self::GateError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// A single validation failure for a named input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Builds a 422 response listing every field that failed validation.
pub(crate) fn validation_response(error: &str, fields: Vec<FieldError>) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationErrorDto {
            error: error.to_string(),
            fields: fields
                .into_iter()
                .map(|f| FieldErrorDto {
                    field: f.field.to_string(),
                    message: f.message,
                })
                .collect(),
        }),
    )
        .into_response()
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, error: &str) -> Response {
    (
        status,
        Json(ErrorDto {
            error: error.to_string(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
