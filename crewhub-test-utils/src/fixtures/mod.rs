//! Test fixture modules for database records and access tokens.
//!
//! Each submodule provides fixtures for a different part of the system:
//!
//! - `applicant` - Applicant profiles and submitted volunteer applications
//! - `auth` - Signed access tokens as issued by the hosted auth provider
//! - `event` - Volunteer events

pub mod applicant;
pub mod auth;
pub mod event;
