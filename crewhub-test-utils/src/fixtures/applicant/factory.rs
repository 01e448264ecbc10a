//! Factory functions for generating mock applicant models.
//!
//! Provides pure functions for creating applicant profile and volunteer application models
//! with standard test values. These are in-memory model instances that don't require
//! database interaction, suitable for unit tests.

use chrono::Utc;
use entity::sea_orm_active_enums::ReviewStatus;

use crate::model::{ApplicantProfileModel, VolunteerApplicationModel};

/// Create a mock applicant profile model.
///
/// # Arguments
/// - `user_id` - Identifier issued by the auth provider
/// - `form_completed` - Whether the volunteer form has been submitted
/// - `status` - Review status, `None` when never reviewed
///
/// # Returns
/// - `ApplicantProfileModel` - A profile model with test data
pub fn mock_profile_model(
    user_id: &str,
    form_completed: bool,
    status: Option<ReviewStatus>,
) -> ApplicantProfileModel {
    let now = Utc::now().naive_utc();
    ApplicantProfileModel {
        user_id: user_id.to_string(),
        form_completed,
        status,
        reviewed_by: None,
        reviewed_at: None,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock volunteer application model whose fields pass form validation.
pub fn mock_application_model(user_id: &str) -> VolunteerApplicationModel {
    VolunteerApplicationModel {
        id: 1,
        user_id: user_id.to_string(),
        full_name: "Test Volunteer".to_string(),
        email: format!("{}@example.org", user_id),
        phone: "+1 (555) 010-2030".to_string(),
        city: "Springfield".to_string(),
        availability: "Weekends".to_string(),
        skills: Some("First aid, driving".to_string()),
        motivation: "I would like to help out at community events.".to_string(),
        created_at: Utc::now().naive_utc(),
    }
}
