use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Fields accepted when creating or updating an event
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EventInputDto {
    pub title: String,
    pub description: String,
    pub location: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
}

/// Volunteer dashboard, only served to approved volunteers
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DashboardDto {
    pub user_id: String,
    pub upcoming_events: Vec<EventDto>,
}
