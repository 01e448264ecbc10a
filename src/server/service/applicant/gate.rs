//! Applicant status gate.
//!
//! Classifies a user's applicant profile into the page they are allowed to see next. The
//! gate is a pure decision: it never redirects, never writes, and never retries. Callers
//! map the [`GateDecision`] to navigation through [`GateDecision::redirect_to`].

use async_trait::async_trait;
use entity::sea_orm_active_enums::ReviewStatus;
use serde::{Deserialize, Serialize};

use crate::server::error::{gate::GateError, Error};

/// Page served when the profile lookup itself fails.
pub const LOOKUP_FAILED_REDIRECT: &str = "/error";

/// The parts of an applicant profile the gate decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub form_completed: bool,
    /// `None` until a review record exists
    pub status: Option<ReviewStatus>,
}

/// Storage for applicant profiles.
///
/// Implementations own their retry policy; the gate calls each method at most once.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the profile for a user, `Ok(None)` when the user has no profile yet.
    async fn get(&self, user_id: &str) -> Result<Option<ProfileSnapshot>, Error>;

    /// Create an empty profile for the user. Existing profiles are left untouched.
    async fn insert(&self, user_id: &str) -> Result<(), Error>;

    /// Record an admin review of the user's application. Last write wins.
    async fn update_status(
        &self,
        user_id: &str,
        status: ReviewStatus,
        reviewer_id: &str,
    ) -> Result<(), Error>;
}

/// Where the applicant status gate routes a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateDecision {
    /// No authenticated user
    NoSession,
    /// No profile yet, or the volunteer form has not been submitted
    NeedsForm,
    /// Form submitted, waiting on an admin
    AwaitingReview,
    Approved,
    Rejected,
}

impl GateDecision {
    /// Page the caller should navigate to for this decision.
    pub fn redirect_to(&self) -> &'static str {
        match self {
            Self::NoSession => "/sign-up",
            Self::NeedsForm => "/volunteerForm",
            Self::AwaitingReview => "/confirmation",
            Self::Approved => "/dashboard",
            Self::Rejected => "/rejected",
        }
    }
}

impl From<ProfileSnapshot> for GateDecision {
    fn from(profile: ProfileSnapshot) -> Self {
        if !profile.form_completed {
            return Self::NeedsForm;
        }

        match profile.status {
            None | Some(ReviewStatus::Pending) => Self::AwaitingReview,
            Some(ReviewStatus::Approved) => Self::Approved,
            Some(ReviewStatus::Rejected) => Self::Rejected,
        }
    }
}

/// Decide where a user should be routed based on their applicant profile.
///
/// Rules are applied in order and the first match wins:
/// 1. No user ID: [`GateDecision::NoSession`] without touching the store
/// 2. No profile, or form not submitted: [`GateDecision::NeedsForm`] whatever the status
/// 3. Otherwise by review status: none or pending awaits review, approved & rejected map
///    to their own decisions
///
/// # Arguments
/// - `store` - Profile store to read from
/// - `user_id` - Authenticated user ID, if any
///
/// # Returns
/// - `Ok(GateDecision)` - Routing decision for the user
/// - `Err(GateError::LookupFailed)` - The store failed for a reason other than a missing profile
pub async fn evaluate<S>(store: &S, user_id: Option<&str>) -> Result<GateDecision, GateError>
where
    S: ProfileStore + ?Sized,
{
    let Some(user_id) = user_id else {
        return Ok(GateDecision::NoSession);
    };

    let profile = store.get(user_id).await.map_err(|err| {
        tracing::error!(user_id, error = %err, "Applicant status gate lookup failed");

        GateError::LookupFailed {
            user_id: user_id.to_string(),
            source: Box::new(err),
        }
    })?;

    Ok(profile.map_or(GateDecision::NeedsForm, GateDecision::from))
}
