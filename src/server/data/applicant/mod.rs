//! Applicant repositories.
//!
//! Profiles and submitted volunteer applications live in separate tables; the profile is
//! the lifecycle record the applicant status gate reads, the application is the form body.

pub mod application;
pub mod profile;

pub use application::ApplicationRepository;
pub use profile::ProfileRepository;
