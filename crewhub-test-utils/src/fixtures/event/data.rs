use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::EventModel, TestSetup};

impl TestSetup {
    pub fn event<'a>(&'a mut self) -> EventFixtures<'a> {
        EventFixtures { setup: self }
    }
}

pub struct EventFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> EventFixtures<'a> {
    /// Insert a two hour event starting `starts_in_days` days from now.
    pub async fn insert_event(
        &self,
        title: &str,
        starts_in_days: i64,
    ) -> Result<EventModel, TestError> {
        let now = Utc::now().naive_utc();
        let starts_at = now + Duration::days(starts_in_days);

        Ok(entity::prelude::Event::insert(entity::event::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(format!("{} description", title)),
            location: ActiveValue::Set("Community Hall".to_string()),
            starts_at: ActiveValue::Set(starts_at),
            ends_at: ActiveValue::Set(starts_at + Duration::hours(2)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
