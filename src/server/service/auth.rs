//! Sign-in service.
//!
//! Identities are owned by the hosted auth provider; signing in here means verifying an
//! access token the provider issued, making sure the user has an applicant profile, and
//! telling the caller where the applicant status gate routes them.

use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{auth::AccessTokenKeys, session::user::UserRole},
    service::applicant::{
        gate::{self, GateDecision},
        ApplicantService,
    },
};

/// User identity established by a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedInUser {
    pub user_id: String,
    pub role: UserRole,
    pub decision: GateDecision,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    access_token_keys: &'a AccessTokenKeys,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of AuthService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `access_token_keys` - Keys used to verify access tokens from the auth provider
    pub fn new(db: &'a DatabaseConnection, access_token_keys: &'a AccessTokenKeys) -> Self {
        Self {
            db,
            access_token_keys,
        }
    }

    /// Signs a user in with an access token issued by the auth provider.
    ///
    /// Verifies the token, creates the applicant profile on first sign-in, then evaluates
    /// the applicant status gate for the user.
    ///
    /// # Arguments
    /// - `access_token` - Encoded JWT access token
    ///
    /// # Returns
    /// - `Ok(SignedInUser)` - User ID, role and current gate decision
    /// - `Err(AuthError::InvalidAccessToken)` - Bad signature, expired, or wrong audience
    /// - `Err(GateError::LookupFailed)` - Profile could not be read back
    /// - `Err(Error::DbErr)` - Profile creation failed after retries
    pub async fn sign_in(&self, access_token: &str) -> Result<SignedInUser, Error> {
        let claims = self
            .access_token_keys
            .decode(access_token)
            .map_err(AuthError::InvalidAccessToken)?;

        let role = if claims.is_admin() {
            UserRole::Admin
        } else {
            UserRole::Volunteer
        };

        let applicant_service = ApplicantService::new(self.db);
        applicant_service.ensure_profile(&claims.sub).await?;

        let decision = gate::evaluate(&applicant_service, Some(&claims.sub)).await?;

        tracing::info!(user_id = %claims.sub, role = ?role, "User signed in");

        Ok(SignedInUser {
            user_id: claims.sub,
            role,
            decision,
        })
    }
}
