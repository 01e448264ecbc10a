//! Access tokens issued by the hosted auth provider.
//!
//! The auth provider signs HS256 JWTs with a secret shared with this server. Only the claims
//! needed to identify the user and their role are decoded; everything else is ignored.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Audience the auth provider stamps on tokens for signed-in users.
pub const DEFAULT_JWT_AUDIENCE: &str = "authenticated";

/// Role value in `app_metadata` that grants admin access.
pub const ADMIN_ROLE: &str = "admin";

/// Claims of an access token issued by the auth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Opaque user identifier
    pub sub: String,
    /// Expiry as seconds since the Unix epoch
    pub exp: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub app_metadata: AppMetadata,
}

/// Provider-managed metadata that users cannot edit themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default)]
    pub role: Option<String>,
}

impl AccessTokenClaims {
    pub fn is_admin(&self) -> bool {
        self.app_metadata.role.as_deref() == Some(ADMIN_ROLE)
    }
}

/// Key material and validation rules for verifying access tokens.
#[derive(Clone)]
pub struct AccessTokenKeys {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AccessTokenKeys {
    pub fn new(secret: &str, audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verifies the token signature, expiry and audience, returning its claims.
    pub fn decode(&self, token: &str) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
        decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
    }
}
