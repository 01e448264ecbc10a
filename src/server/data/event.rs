use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::event::EventInputDto, server::model::db::EventModel};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: &EventInputDto) -> Result<EventModel, DbErr> {
        let now = Utc::now().naive_utc();
        let event = entity::event::ActiveModel {
            title: ActiveValue::Set(input.title.trim().to_string()),
            description: ActiveValue::Set(input.description.clone()),
            location: ActiveValue::Set(input.location.trim().to_string()),
            starts_at: ActiveValue::Set(input.starts_at),
            ends_at: ActiveValue::Set(input.ends_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    pub async fn get(&self, event_id: i32) -> Result<Option<EventModel>, DbErr> {
        entity::prelude::Event::find_by_id(event_id)
            .one(self.db)
            .await
    }

    /// Lists all events ordered by start time
    pub async fn list(&self) -> Result<Vec<EventModel>, DbErr> {
        entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::StartsAt)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists events which have not ended by `now`, ordered by start time
    pub async fn list_ending_after(&self, now: NaiveDateTime) -> Result<Vec<EventModel>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::EndsAt.gte(now))
            .order_by_asc(entity::event::Column::StartsAt)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every editable field of an event.
    ///
    /// Returns `Ok(None)` if the event does not exist.
    pub async fn update(
        &self,
        event_id: i32,
        input: &EventInputDto,
    ) -> Result<Option<EventModel>, DbErr> {
        let Some(event) = self.get(event_id).await? else {
            return Ok(None);
        };

        let mut event_am = event.into_active_model();
        event_am.title = ActiveValue::Set(input.title.trim().to_string());
        event_am.description = ActiveValue::Set(input.description.clone());
        event_am.location = ActiveValue::Set(input.location.trim().to_string());
        event_am.starts_at = ActiveValue::Set(input.starts_at);
        event_am.ends_at = ActiveValue::Set(input.ends_at);
        event_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(event_am.update(self.db).await?))
    }

    /// Deletes an event
    ///
    /// Returns OK regardless of the event existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, event_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Event::delete_by_id(event_id)
            .exec(self.db)
            .await
    }
}
