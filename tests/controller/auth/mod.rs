//! Tests for sign-in controller endpoints.

mod logout;
mod sign_in;

use super::*;
