//! Crewhub volunteer management backend.
//!
//! Serves the crew application flow, the applicant status gate that decides where each
//! user is routed, admin review of applicants, and event management.

pub mod model;
pub mod server;
