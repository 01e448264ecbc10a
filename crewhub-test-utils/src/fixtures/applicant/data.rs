use chrono::Utc;
use entity::sea_orm_active_enums::ReviewStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::TEST_ADMIN_USER_ID,
    error::TestError,
    model::{ApplicantProfileModel, VolunteerApplicationModel},
    TestSetup,
};

impl TestSetup {
    pub fn applicant<'a>(&'a mut self) -> ApplicantFixtures<'a> {
        ApplicantFixtures { setup: self }
    }
}

pub struct ApplicantFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> ApplicantFixtures<'a> {
    /// Insert a profile row as-is, without any application.
    ///
    /// Reviewed statuses are stamped as reviewed by [`TEST_ADMIN_USER_ID`].
    pub async fn insert_profile(
        &self,
        user_id: &str,
        form_completed: bool,
        status: Option<ReviewStatus>,
    ) -> Result<ApplicantProfileModel, TestError> {
        let now = Utc::now().naive_utc();
        let reviewed = matches!(
            status,
            Some(ReviewStatus::Approved) | Some(ReviewStatus::Rejected)
        );

        Ok(
            entity::prelude::ApplicantProfile::insert(entity::applicant_profile::ActiveModel {
                user_id: ActiveValue::Set(user_id.to_string()),
                form_completed: ActiveValue::Set(form_completed),
                status: ActiveValue::Set(status),
                reviewed_by: ActiveValue::Set(reviewed.then(|| TEST_ADMIN_USER_ID.to_string())),
                reviewed_at: ActiveValue::Set(reviewed.then_some(now)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a volunteer application for an existing profile using factory form values.
    pub async fn insert_application(
        &self,
        user_id: &str,
    ) -> Result<VolunteerApplicationModel, TestError> {
        let mock = super::factory::mock_application_model(user_id);

        Ok(entity::prelude::VolunteerApplication::insert(
            entity::volunteer_application::ActiveModel {
                user_id: ActiveValue::Set(mock.user_id),
                full_name: ActiveValue::Set(mock.full_name),
                email: ActiveValue::Set(mock.email),
                phone: ActiveValue::Set(mock.phone),
                city: ActiveValue::Set(mock.city),
                availability: ActiveValue::Set(mock.availability),
                skills: ActiveValue::Set(mock.skills),
                motivation: ActiveValue::Set(mock.motivation),
                created_at: ActiveValue::Set(mock.created_at),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Insert a profile that has submitted the form, along with its application.
    pub async fn insert_applicant_with_application(
        &self,
        user_id: &str,
        status: ReviewStatus,
    ) -> Result<(ApplicantProfileModel, VolunteerApplicationModel), TestError> {
        let profile = self.insert_profile(user_id, true, Some(status)).await?;
        let application = self.insert_application(user_id).await?;

        Ok((profile, application))
    }
}
