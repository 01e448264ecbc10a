//! Event service layer.
//!
//! Validation and CRUD for volunteer events. Reads are public; the controller layer
//! restricts writes to admins.

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::{
    model::event::{EventDto, EventInputDto},
    server::{
        data::event::EventRepository,
        error::{event::EventError, Error, FieldError},
        model::db::EventModel,
        service::retry::RetryContext,
    },
};

const MAX_TITLE_CHARS: usize = 200;
const MAX_LOCATION_CHARS: usize = 200;

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new instance of EventService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every event ordered by start time.
    pub async fn list(&self) -> Result<Vec<EventDto>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry("list events", |_| {
            let db = db.clone();

            Box::pin(async move {
                let events = EventRepository::new(&db).list().await?;

                Ok(events.into_iter().map(event_dto).collect())
            })
        })
        .await
    }

    /// Lists events which have not yet ended at `now`, ordered by start time.
    pub async fn list_upcoming(&self, now: NaiveDateTime) -> Result<Vec<EventDto>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry("list upcoming events", |_| {
            let db = db.clone();

            Box::pin(async move {
                let events = EventRepository::new(&db).list_ending_after(now).await?;

                Ok(events.into_iter().map(event_dto).collect())
            })
        })
        .await
    }

    /// Retrieves a single event.
    ///
    /// # Returns
    /// - `Ok(EventDto)` - The event
    /// - `Err(EventError::NotFound)` - No event with the ID exists
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get(&self, event_id: i32) -> Result<EventDto, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get event ID {}", event_id), |_| {
            let db = db.clone();

            Box::pin(async move {
                let event = EventRepository::new(&db)
                    .get(event_id)
                    .await?
                    .ok_or(EventError::NotFound(event_id))?;

                Ok(event_dto(event))
            })
        })
        .await
    }

    /// Creates an event after validating the input.
    ///
    /// # Returns
    /// - `Ok(EventDto)` - The created event
    /// - `Err(EventError::InvalidEvent)` - Validation failed, lists every invalid field
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn create(&self, input: EventInputDto) -> Result<EventDto, Error> {
        validate(&input).map_err(EventError::InvalidEvent)?;

        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        let event = ctx
            .execute_with_retry("create event", |_| {
                let db = db.clone();
                let input = input.clone();

                Box::pin(async move { Ok(EventRepository::new(&db).create(&input).await?) })
            })
            .await?;

        tracing::info!(event_id = event.id, "Created event");

        Ok(event_dto(event))
    }

    /// Replaces an event's fields after validating the input.
    ///
    /// # Returns
    /// - `Ok(EventDto)` - The updated event
    /// - `Err(EventError::InvalidEvent)` - Validation failed, lists every invalid field
    /// - `Err(EventError::NotFound)` - No event with the ID exists
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn update(&self, event_id: i32, input: EventInputDto) -> Result<EventDto, Error> {
        validate(&input).map_err(EventError::InvalidEvent)?;

        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("update event ID {}", event_id), |_| {
            let db = db.clone();
            let input = input.clone();

            Box::pin(async move {
                let event = EventRepository::new(&db)
                    .update(event_id, &input)
                    .await?
                    .ok_or(EventError::NotFound(event_id))?;

                Ok(event_dto(event))
            })
        })
        .await
    }

    /// Deletes an event.
    ///
    /// # Returns
    /// - `Ok(())` - The event was deleted
    /// - `Err(EventError::NotFound)` - No event with the ID exists
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn delete(&self, event_id: i32) -> Result<(), Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("delete event ID {}", event_id), |_| {
            let db = db.clone();

            Box::pin(async move {
                let result = EventRepository::new(&db).delete(event_id).await?;

                if result.rows_affected == 0 {
                    return Err(EventError::NotFound(event_id).into());
                }

                tracing::info!(event_id, "Deleted event");

                Ok(())
            })
        })
        .await
    }
}

/// Validate event input, collecting every invalid field.
pub fn validate(input: &EventInputDto) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    let title_chars = input.title.trim().chars().count();
    if title_chars == 0 {
        errors.push(FieldError::new("title", "Title is required"));
    } else if title_chars > MAX_TITLE_CHARS {
        errors.push(FieldError::new(
            "title",
            format!("Title must be at most {} characters", MAX_TITLE_CHARS),
        ));
    }

    if input.location.trim().chars().count() > MAX_LOCATION_CHARS {
        errors.push(FieldError::new(
            "location",
            format!("Location must be at most {} characters", MAX_LOCATION_CHARS),
        ));
    }

    if input.ends_at < input.starts_at {
        errors.push(FieldError::new("ends_at", "Event cannot end before it starts"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn event_dto(event: EventModel) -> EventDto {
    EventDto {
        id: event.id,
        title: event.title,
        description: event.description,
        location: event.location,
        starts_at: event.starts_at,
        ends_at: event.ends_at,
        created_at: event.created_at,
        updated_at: event.updated_at,
    }
}
