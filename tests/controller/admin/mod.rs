//! Tests for applicant review endpoints.

mod review_applicant;

use super::*;
