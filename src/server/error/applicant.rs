//! Applicant lifecycle error types.
//!
//! Errors raised while creating profiles, submitting the volunteer form, and reviewing
//! applicants. Each maps to a client-facing status; none of them are retryable.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, validation_response, FieldError};

#[derive(Error, Debug)]
pub enum ApplicantError {
    /// No applicant profile exists for the user.
    #[error("Applicant profile for user ID {0:?} not found")]
    ProfileNotFound(String),
    /// The user has not submitted a volunteer application.
    #[error("Volunteer application for user ID {0:?} not found")]
    ApplicationNotFound(String),
    /// The volunteer form may only be submitted once per profile.
    #[error("User ID {0:?} has already submitted the volunteer form")]
    FormAlreadySubmitted(String),
    /// A review status cannot exist before the form has been submitted.
    #[error("User ID {0:?} cannot be reviewed before submitting the volunteer form")]
    FormNotSubmitted(String),
    /// The submitted volunteer form failed validation.
    #[error("Volunteer form failed validation on {} field(s)", .0.len())]
    InvalidForm(Vec<FieldError>),
}

impl IntoResponse for ApplicantError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::ProfileNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Applicant not found")
            }
            Self::ApplicationNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Volunteer application not found")
            }
            Self::FormAlreadySubmitted(_) => error_response(
                StatusCode::CONFLICT,
                "Your volunteer application has already been submitted",
            ),
            Self::FormNotSubmitted(_) => error_response(
                StatusCode::CONFLICT,
                "Applicant has not submitted the volunteer form yet",
            ),
            Self::InvalidForm(fields) => {
                validation_response("Please correct the highlighted fields", fields)
            }
        }
    }
}
