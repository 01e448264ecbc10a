//! Test configuration constants for access token signing.
//!
//! These values are not real credentials but placeholder values shared between the fixtures
//! that sign access tokens and the application state that verifies them.

/// Shared secret used to sign and verify test access tokens.
pub static TEST_JWT_SECRET: &str = "test-jwt-secret-with-enough-entropy";

/// Audience stamped on test access tokens, matching the server default.
pub static TEST_JWT_AUDIENCE: &str = "authenticated";

/// User ID of the admin used by fixtures that review applicants.
pub static TEST_ADMIN_USER_ID: &str = "admin-1";
