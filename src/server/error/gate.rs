use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::{Error as ServerError, InternalServerError};

/// Failure of the applicant status gate.
///
/// Only raised when the profile store fails for a reason other than "not found"; a missing
/// profile is a routing decision, never an error.
#[derive(Error, Debug)]
pub enum GateError {
    #[error("Failed to look up applicant profile for user ID {user_id:?}: {source}")]
    LookupFailed {
        user_id: String,
        #[source]
        source: Box<ServerError>,
    },
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
