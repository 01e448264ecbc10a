//! Utility functions for controller request handling.
//!
//! This module provides reusable helpers used across controllers, such as retrieving the
//! signed in user from session for protected endpoints.

pub mod session_user;
