use chrono::Utc;
use entity::sea_orm_active_enums::ReviewStatus;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::{ApplicantProfileModel, VolunteerApplicationModel};

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a fresh profile (`form_completed = false`, no status) unless one exists.
    ///
    /// Returns `true` when a profile was created, `false` when the user already had one.
    /// An existing profile is never modified.
    pub async fn create_if_absent(&self, user_id: &str) -> Result<bool, DbErr> {
        let now = Utc::now().naive_utc();
        let profile = entity::applicant_profile::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            form_completed: ActiveValue::Set(false),
            status: ActiveValue::Set(None),
            reviewed_by: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        let rows_inserted = entity::prelude::ApplicantProfile::insert(profile)
            .on_conflict(
                OnConflict::column(entity::applicant_profile::Column::UserId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(rows_inserted > 0)
    }

    pub async fn get(&self, user_id: &str) -> Result<Option<ApplicantProfileModel>, DbErr> {
        entity::prelude::ApplicantProfile::find_by_id(user_id.to_string())
            .one(self.db)
            .await
    }

    /// Marks the volunteer form as submitted and opens the review record as pending.
    ///
    /// Returns `Ok(None)` if the profile does not exist.
    pub async fn mark_form_submitted(
        &self,
        user_id: &str,
    ) -> Result<Option<ApplicantProfileModel>, DbErr> {
        let Some(profile) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut profile_am = profile.into_active_model();
        profile_am.form_completed = ActiveValue::Set(true);
        profile_am.status = ActiveValue::Set(Some(ReviewStatus::Pending));
        profile_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(profile_am.update(self.db).await?))
    }

    /// Sets the review status along with the reviewing admin and review time.
    ///
    /// Unconditional, so concurrent reviews resolve as last write wins. Returns `Ok(None)`
    /// if the profile does not exist.
    pub async fn update_status(
        &self,
        user_id: &str,
        status: ReviewStatus,
        reviewer_id: &str,
    ) -> Result<Option<ApplicantProfileModel>, DbErr> {
        let Some(profile) = self.get(user_id).await? else {
            return Ok(None);
        };

        let now = Utc::now().naive_utc();
        let mut profile_am = profile.into_active_model();
        profile_am.status = ActiveValue::Set(Some(status));
        profile_am.reviewed_by = ActiveValue::Set(Some(reviewer_id.to_string()));
        profile_am.reviewed_at = ActiveValue::Set(Some(now));
        profile_am.updated_at = ActiveValue::Set(now);

        Ok(Some(profile_am.update(self.db).await?))
    }

    /// Lists profiles which have submitted the form along with their application, newest
    /// submission first.
    ///
    /// # Arguments
    /// - `status` - Only include profiles in this review status, or all applicants if `None`
    pub async fn list_applicants(
        &self,
        status: Option<ReviewStatus>,
    ) -> Result<Vec<(ApplicantProfileModel, Option<VolunteerApplicationModel>)>, DbErr> {
        let mut query = entity::prelude::ApplicantProfile::find()
            .filter(entity::applicant_profile::Column::FormCompleted.eq(true));

        if let Some(status) = status {
            query = query.filter(entity::applicant_profile::Column::Status.eq(status));
        }

        query
            .find_also_related(entity::prelude::VolunteerApplication)
            .order_by_desc(entity::volunteer_application::Column::CreatedAt)
            .order_by_asc(entity::applicant_profile::Column::UserId)
            .all(self.db)
            .await
    }
}
