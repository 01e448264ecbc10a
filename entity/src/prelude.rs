pub use super::applicant_profile::Entity as ApplicantProfile;
pub use super::event::Entity as Event;
pub use super::volunteer_application::Entity as VolunteerApplication;
