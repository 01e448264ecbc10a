//! Factory functions for generating signed access tokens.
//!
//! Provides pure functions for creating HS256 access tokens shaped like the ones issued by
//! the hosted auth provider. Tokens are signed with [`TEST_JWT_SECRET`] unless noted otherwise.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};

use crate::{
    constant::{TEST_JWT_AUDIENCE, TEST_JWT_SECRET},
    error::TestError,
};

/// Build access token claims with standard test values.
///
/// # Arguments
/// - `user_id` - Subject of the token
/// - `admin` - Whether `app_metadata.role` is set to `admin`
/// - `expires_in` - Offset from now for the `exp` claim (negative for expired tokens)
///
/// # Returns
/// - `Value` - JSON claims ready to be signed
pub fn mock_access_token_claims(user_id: &str, admin: bool, expires_in: Duration) -> Value {
    let now = Utc::now();
    let app_metadata = if admin {
        json!({ "provider": "email", "role": "admin" })
    } else {
        json!({ "provider": "email" })
    };

    json!({
        "sub": user_id,
        "aud": TEST_JWT_AUDIENCE,
        "role": "authenticated",
        "email": format!("{}@example.org", user_id),
        "iat": now.timestamp(),
        "exp": (now + expires_in).timestamp(),
        "app_metadata": app_metadata,
    })
}

/// Sign arbitrary claims with the given secret.
pub fn sign_claims(claims: &Value, secret: &str) -> Result<String, TestError> {
    Ok(encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

/// Create a valid access token for the given user, expiring in one hour.
///
/// # Arguments
/// - `user_id` - Subject of the token
/// - `admin` - Whether the token grants the admin role
///
/// # Returns
/// - `Ok(String)` - Encoded token
/// - `Err(TestError::JwtError)` - Token encoding failed
pub fn signed_access_token(user_id: &str, admin: bool) -> Result<String, TestError> {
    sign_claims(
        &mock_access_token_claims(user_id, admin, Duration::hours(1)),
        TEST_JWT_SECRET,
    )
}

/// Create an access token which expired an hour ago.
pub fn expired_access_token(user_id: &str) -> Result<String, TestError> {
    sign_claims(
        &mock_access_token_claims(user_id, false, Duration::hours(-1)),
        TEST_JWT_SECRET,
    )
}

/// Create an otherwise valid access token signed with a secret the server does not know.
pub fn foreign_access_token(user_id: &str) -> Result<String, TestError> {
    sign_claims(
        &mock_access_token_claims(user_id, false, Duration::hours(1)),
        "some-other-projects-secret",
    )
}
