//! Database model type aliases for test utilities.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the test utilities. These aliases match those in the main crewhub crate
//! to ensure consistency across tests.

/// Type alias for the applicant profile database model.
pub type ApplicantProfileModel = entity::applicant_profile::Model;

/// Type alias for the volunteer application database model.
pub type VolunteerApplicationModel = entity::volunteer_application::Model;

/// Type alias for the event database model.
pub type EventModel = entity::event::Model;
