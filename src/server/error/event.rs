use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, validation_response, FieldError};

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Event ID {0} not found")]
    NotFound(i32),
    #[error("Event failed validation on {} field(s)", .0.len())]
    InvalidEvent(Vec<FieldError>),
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(event_id) => {
                tracing::debug!(event_id, "Event not found");

                error_response(StatusCode::NOT_FOUND, "Event not found")
            }
            Self::InvalidEvent(fields) => {
                validation_response("Please correct the highlighted fields", fields)
            }
        }
    }
}
