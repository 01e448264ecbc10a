use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when request input fails validation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ValidationErrorDto {
    /// Summary of the failure
    pub error: String,
    /// Every field that failed validation
    pub fields: Vec<FieldErrorDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// The response when a user must be sent elsewhere before accessing a resource
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RedirectErrorDto {
    pub error: String,
    /// Page the user should be navigated to instead
    pub redirect_to: String,
}
