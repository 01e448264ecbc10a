//! Tests for the applicant flow endpoints.

mod entry;
mod get_application;
mod get_status;
mod submit_form;

use super::*;
