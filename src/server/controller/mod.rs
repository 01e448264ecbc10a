//! HTTP controller endpoints for the Crewhub web API.
//!
//! This module contains Axum handlers for sign-in, the applicant flow, the volunteer
//! dashboard, admin review, and events. Controllers read the user from the session, call
//! services, and return HTTP responses. Only the applicant entry endpoint performs a
//! redirect; every other endpoint reports decisions as JSON. OpenAPI documentation is
//! generated with utoipa.

pub mod admin;
pub mod applicant;
pub mod auth;
pub mod dashboard;
pub mod event;
pub mod util;
