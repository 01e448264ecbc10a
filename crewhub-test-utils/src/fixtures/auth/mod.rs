//! Access token fixture utilities.
//!
//! The auth provider is never contacted in tests; instead tokens are signed locally with
//! the shared test secret so the server verifies them exactly like production tokens.

pub mod factory;
