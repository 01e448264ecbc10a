use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::{model::applicant::VolunteerFormDto, server::model::db::VolunteerApplicationModel};

pub struct ApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationRepository<'a, C> {
    /// Creates a new instance of [`ApplicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a submitted volunteer form for the user.
    ///
    /// Fails with a unique constraint violation if the user already has an application.
    /// Input is stored trimmed; blank optional skills are stored as `NULL`.
    pub async fn create(
        &self,
        user_id: &str,
        form: &VolunteerFormDto,
    ) -> Result<VolunteerApplicationModel, DbErr> {
        let skills = form
            .skills
            .as_deref()
            .map(str::trim)
            .filter(|skills| !skills.is_empty())
            .map(str::to_string);

        let application = entity::volunteer_application::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            full_name: ActiveValue::Set(form.full_name.trim().to_string()),
            email: ActiveValue::Set(form.email.trim().to_string()),
            phone: ActiveValue::Set(form.phone.trim().to_string()),
            city: ActiveValue::Set(form.city.trim().to_string()),
            availability: ActiveValue::Set(form.availability.trim().to_string()),
            skills: ActiveValue::Set(skills),
            motivation: ActiveValue::Set(form.motivation.trim().to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    pub async fn get_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<VolunteerApplicationModel>, DbErr> {
        entity::prelude::VolunteerApplication::find()
            .filter(entity::volunteer_application::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }
}
