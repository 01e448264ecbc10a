use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::ReviewStatus;
use serde::{Deserialize, Serialize};

use crate::server::service::applicant::gate::GateDecision;

/// Review status of a submitted volunteer application
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatusDto {
    Pending,
    Approved,
    Rejected,
}

impl From<ReviewStatus> for ApplicationStatusDto {
    fn from(status: ReviewStatus) -> Self {
        match status {
            ReviewStatus::Pending => Self::Pending,
            ReviewStatus::Approved => Self::Approved,
            ReviewStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<ApplicationStatusDto> for ReviewStatus {
    fn from(status: ApplicationStatusDto) -> Self {
        match status {
            ApplicationStatusDto::Pending => Self::Pending,
            ApplicationStatusDto::Approved => Self::Approved,
            ApplicationStatusDto::Rejected => Self::Rejected,
        }
    }
}

/// Routing decision of the applicant status gate
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GateDecisionDto {
    pub decision: GateDecision,
    /// Page the caller should navigate to for this decision
    pub redirect_to: String,
}

impl From<GateDecision> for GateDecisionDto {
    fn from(decision: GateDecision) -> Self {
        Self {
            decision,
            redirect_to: decision.redirect_to().to_string(),
        }
    }
}

/// Volunteer application form as submitted by an applicant
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VolunteerFormDto {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    /// Free-form availability, e.g. "weekends" or "Tuesday evenings"
    pub availability: String,
    pub skills: Option<String>,
    pub motivation: String,
    pub agreed_to_terms: bool,
}

/// A submitted volunteer application
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplicationDto {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub availability: String,
    pub skills: Option<String>,
    pub motivation: String,
    pub submitted_at: NaiveDateTime,
}

/// An applicant as seen by admins reviewing applications
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplicantDto {
    pub user_id: String,
    pub form_completed: bool,
    pub status: Option<ApplicationStatusDto>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<NaiveDateTime>,
    pub application: Option<ApplicationDto>,
}

/// Admin review decision for an applicant
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReviewDto {
    pub status: ApplicationStatusDto,
}
