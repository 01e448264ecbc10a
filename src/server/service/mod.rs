//! Service layer for business logic.
//!
//! This module contains the service layer that implements business logic and coordinates
//! between repositories. Services include sign-in, the applicant lifecycle with its status
//! gate, event management, and the retry logic wrapping database operations.

pub mod applicant;
pub mod auth;
pub mod event;
pub mod retry;
