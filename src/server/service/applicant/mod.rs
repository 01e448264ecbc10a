//! Applicant service layer.
//!
//! Implements the volunteer application lifecycle: profile creation at first sign-in,
//! one-time form submission, and admin review. [`ApplicantService`] is also the
//! database-backed [`ProfileStore`] read by the applicant status gate.

pub mod form;
pub mod gate;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use entity::sea_orm_active_enums::ReviewStatus;
use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    model::applicant::{ApplicantDto, ApplicationDto, VolunteerFormDto},
    server::{
        data::applicant::{ApplicationRepository, ProfileRepository},
        error::{applicant::ApplicantError, Error},
        model::db::{ApplicantProfileModel, VolunteerApplicationModel},
        service::{
            applicant::gate::{ProfileSnapshot, ProfileStore},
            retry::RetryContext,
        },
    },
};

/// Service for applicant profiles and volunteer applications.
///
/// Every operation runs inside a [`RetryContext`] so transient database failures are
/// retried with exponential backoff.
pub struct ApplicantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicantService<'a> {
    /// Creates a new instance of ApplicantService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Makes sure the user has an applicant profile, creating an empty one if needed.
    ///
    /// Called on every sign-in; an existing profile is never modified.
    ///
    /// # Returns
    /// - `Ok(true)` - A new profile was created
    /// - `Ok(false)` - The user already had a profile
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn ensure_profile(&self, user_id: &str) -> Result<bool, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let user_id = user_id.to_string();

        ctx.execute_with_retry(&format!("ensure profile for user ID {}", user_id), |_| {
            let db = db.clone();
            let user_id = user_id.clone();

            Box::pin(async move {
                let created = ProfileRepository::new(&db)
                    .create_if_absent(&user_id)
                    .await?;

                if created {
                    tracing::info!(user_id = %user_id, "Created applicant profile");
                }

                Ok(created)
            })
        })
        .await
    }

    /// Submits the volunteer form for a user.
    ///
    /// The application is stored, `form_completed` is set and the review opens as pending
    /// within a single transaction. The form may only be submitted once.
    ///
    /// # Arguments
    /// - `user_id` - ID of the submitting user
    /// - `form` - Volunteer form as entered by the user
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)` - The stored application
    /// - `Err(ApplicantError::InvalidForm)` - Validation failed, lists every invalid field
    /// - `Err(ApplicantError::ProfileNotFound)` - The user has no profile
    /// - `Err(ApplicantError::FormAlreadySubmitted)` - The user already submitted the form
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn submit_form(
        &self,
        user_id: &str,
        form: VolunteerFormDto,
    ) -> Result<ApplicationDto, Error> {
        form::validate(&form).map_err(ApplicantError::InvalidForm)?;

        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let user_id = user_id.to_string();

        ctx.execute_with_retry(&format!("submit form for user ID {}", user_id), |_| {
            let db = db.clone();
            let user_id = user_id.clone();
            let form = form.clone();

            Box::pin(async move {
                let txn = db.begin().await?;

                let profile = ProfileRepository::new(&txn)
                    .get(&user_id)
                    .await?
                    .ok_or_else(|| ApplicantError::ProfileNotFound(user_id.clone()))?;

                if profile.form_completed {
                    return Err(ApplicantError::FormAlreadySubmitted(user_id).into());
                }

                let application = ApplicationRepository::new(&txn)
                    .create(&user_id, &form)
                    .await
                    .map_err(|err| match err.sql_err() {
                        // Lost a race against a concurrent submission
                        Some(SqlErr::UniqueConstraintViolation(_)) => {
                            ApplicantError::FormAlreadySubmitted(user_id.clone()).into()
                        }
                        _ => Error::from(err),
                    })?;

                ProfileRepository::new(&txn)
                    .mark_form_submitted(&user_id)
                    .await?
                    .ok_or_else(|| ApplicantError::ProfileNotFound(user_id.clone()))?;

                txn.commit().await?;

                tracing::info!(user_id = %user_id, "Volunteer form submitted");

                Ok(application_dto(application))
            })
        })
        .await
    }

    /// Records an admin review of a submitted application.
    ///
    /// Reviews may be repeated in any direction; concurrent reviews resolve as last write
    /// wins.
    ///
    /// # Arguments
    /// - `user_id` - ID of the applicant being reviewed
    /// - `status` - New review status
    /// - `reviewer_id` - ID of the reviewing admin
    ///
    /// # Returns
    /// - `Ok(())` - Review recorded
    /// - `Err(ApplicantError::ProfileNotFound)` - The applicant has no profile
    /// - `Err(ApplicantError::FormNotSubmitted)` - The applicant has not submitted the form
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn review(
        &self,
        user_id: &str,
        status: ReviewStatus,
        reviewer_id: &str,
    ) -> Result<(), Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let user_id = user_id.to_string();
        let reviewer_id = reviewer_id.to_string();

        ctx.execute_with_retry(&format!("review applicant user ID {}", user_id), |_| {
            let db = db.clone();
            let user_id = user_id.clone();
            let reviewer_id = reviewer_id.clone();

            Box::pin(async move {
                let profile_repo = ProfileRepository::new(&db);

                let profile = profile_repo
                    .get(&user_id)
                    .await?
                    .ok_or_else(|| ApplicantError::ProfileNotFound(user_id.clone()))?;

                if !profile.form_completed {
                    return Err(ApplicantError::FormNotSubmitted(user_id).into());
                }

                profile_repo
                    .update_status(&user_id, status, &reviewer_id)
                    .await?
                    .ok_or_else(|| ApplicantError::ProfileNotFound(user_id.clone()))?;

                tracing::info!(
                    user_id = %user_id,
                    reviewer_id = %reviewer_id,
                    status = ?status,
                    "Applicant reviewed"
                );

                Ok(())
            })
        })
        .await
    }

    /// Lists applicants who submitted the form, newest submission first.
    ///
    /// # Arguments
    /// - `status` - Only include applicants in this review status, or all if `None`
    pub async fn list_applicants(
        &self,
        status: Option<ReviewStatus>,
    ) -> Result<Vec<ApplicantDto>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry("list applicants", |_| {
            let db = db.clone();

            Box::pin(async move {
                let applicants = ProfileRepository::new(&db).list_applicants(status).await?;

                Ok(applicants
                    .into_iter()
                    .map(|(profile, application)| applicant_dto(profile, application))
                    .collect())
            })
        })
        .await
    }

    /// Retrieves the volunteer application submitted by the user.
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)` - The stored application
    /// - `Err(ApplicantError::ApplicationNotFound)` - The user has not submitted the form
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_application(&self, user_id: &str) -> Result<ApplicationDto, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let user_id = user_id.to_string();

        ctx.execute_with_retry(&format!("get application for user ID {}", user_id), |_| {
            let db = db.clone();
            let user_id = user_id.clone();

            Box::pin(async move {
                let application = ApplicationRepository::new(&db)
                    .get_by_user_id(&user_id)
                    .await?
                    .ok_or_else(|| ApplicantError::ApplicationNotFound(user_id.clone()))?;

                Ok(application_dto(application))
            })
        })
        .await
    }
}

#[async_trait]
impl ProfileStore for ApplicantService<'_> {
    async fn get(&self, user_id: &str) -> Result<Option<ProfileSnapshot>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let user_id = user_id.to_string();

        ctx.execute_with_retry(&format!("get profile for user ID {}", user_id), |_| {
            let db = db.clone();
            let user_id = user_id.clone();

            Box::pin(async move {
                let profile: Option<ApplicantProfileModel> =
                    ProfileRepository::new(&db).get(&user_id).await?;

                Ok(profile.map(|profile| ProfileSnapshot {
                    form_completed: profile.form_completed,
                    status: profile.status,
                }))
            })
        })
        .await
    }

    async fn insert(&self, user_id: &str) -> Result<(), Error> {
        self.ensure_profile(user_id).await.map(|_| ())
    }

    async fn update_status(
        &self,
        user_id: &str,
        status: ReviewStatus,
        reviewer_id: &str,
    ) -> Result<(), Error> {
        self.review(user_id, status, reviewer_id).await
    }
}

fn application_dto(application: VolunteerApplicationModel) -> ApplicationDto {
    ApplicationDto {
        full_name: application.full_name,
        email: application.email,
        phone: application.phone,
        city: application.city,
        availability: application.availability,
        skills: application.skills,
        motivation: application.motivation,
        submitted_at: application.created_at,
    }
}

fn applicant_dto(
    profile: ApplicantProfileModel,
    application: Option<VolunteerApplicationModel>,
) -> ApplicantDto {
    ApplicantDto {
        user_id: profile.user_id,
        form_completed: profile.form_completed,
        status: profile.status.map(Into::into),
        reviewed_by: profile.reviewed_by,
        reviewed_at: profile.reviewed_at,
        application: application.map(application_dto),
    }
}
