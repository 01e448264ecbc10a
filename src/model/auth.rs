use serde::{Deserialize, Serialize};

use crate::model::applicant::GateDecisionDto;

/// Sign-in request carrying the access token issued by the auth provider
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SignInDto {
    pub access_token: String,
}

/// Session established after a successful sign-in
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SessionDto {
    pub user_id: String,
    pub admin: bool,
    /// Where the applicant status gate routes the user right now
    pub gate: GateDecisionDto,
}
