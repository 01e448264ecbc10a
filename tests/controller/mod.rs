//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with state, session and extracted input, verifying
//! response status, body, and session side effects.

mod admin;
mod applicant;
mod auth;
mod dashboard;
mod event;

use crewhub_test_utils::prelude::*;

use crate::util::{json_body, session, TestSetupExt};
