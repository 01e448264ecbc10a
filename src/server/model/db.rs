//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application. These aliases simplify type signatures and provide a single
//! point of reference for database model types.

/// Type alias for the applicant profile database model.
///
/// Tracks whether a user has submitted the volunteer form and where their review stands.
///
/// # Fields (from `entity::applicant_profile::Model`)
/// - `user_id` - Primary key, identifier issued by the auth provider
/// - `form_completed` - Whether the volunteer form has been submitted
/// - `status` - Review status, `None` until the form is submitted
/// - `reviewed_by` - User ID of the admin who last reviewed the applicant
/// - `reviewed_at` - Timestamp of the last review
/// - `created_at` - Timestamp when the profile was created
/// - `updated_at` - Timestamp of the last profile update
pub type ApplicantProfileModel = entity::applicant_profile::Model;

/// Type alias for the volunteer application database model.
///
/// The volunteer form answers submitted by an applicant, one per profile.
pub type VolunteerApplicationModel = entity::volunteer_application::Model;

/// Type alias for the event database model.
pub type EventModel = entity::event::Model;
