use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::RedirectErrorDto, server::error::error_response};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("Access token failed verification: {0}")]
    InvalidAccessToken(#[source] jsonwebtoken::errors::Error),
    #[error("User ID {0:?} attempted an admin action without the admin role")]
    AdminRequired(String),
    #[error("User ID {user_id:?} is not an approved volunteer")]
    NotApproved {
        user_id: String,
        redirect_to: &'static str,
    },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Sign in required")
            }
            Self::InvalidAccessToken(ref err) => {
                tracing::debug!(reason = %err, "Rejected access token");

                error_response(
                    StatusCode::UNAUTHORIZED,
                    "There was an issue signing you in, please try again.",
                )
            }
            Self::AdminRequired(ref user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                error_response(StatusCode::FORBIDDEN, "Admin access required")
            }
            Self::NotApproved {
                ref user_id,
                redirect_to,
            } => {
                tracing::debug!(user_id = %user_id, redirect_to, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(RedirectErrorDto {
                        error: "Dashboard is only available to approved volunteers".to_string(),
                        redirect_to: redirect_to.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
