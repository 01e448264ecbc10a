//! Tests for event endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, Utc};
use crewhub::{
    model::event::EventInputDto,
    server::controller::event::{create_event, delete_event, get_event, list_events, update_event},
};

use super::*;

fn input(title: &str) -> EventInputDto {
    let starts_at = Utc::now().naive_utc() + Duration::days(14);
    EventInputDto {
        title: title.to_string(),
        description: "Meet at the north entrance".to_string(),
        location: "Botanical Garden".to_string(),
        starts_at,
        ends_at: starts_at + Duration::hours(2),
    }
}

/// Expect events to be publicly listed without a session
#[tokio::test]
async fn lists_events_publicly() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_table()
        .with_event("Tree planting", 5)
        .with_event("Book sale", 2)
        .build()
        .await?;

    let result = list_events(State(test.into_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body[0]["title"], "Book sale");
    assert_eq!(body[1]["title"], "Tree planting");

    Ok(())
}

#[tokio::test]
async fn get_event_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_table().build().await?;

    let result = get_event(State(test.into_app_state()), Path(99)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect admins to create, update, and delete events
#[tokio::test]
async fn admin_manages_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_table().build().await?;
    session::sign_in_admin(&test.session, "admin-1").await;

    let created = create_event(
        State(test.into_app_state()),
        test.session.clone(),
        Json(input("Tree planting")),
    )
    .await;
    let resp = created.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = json_body(resp).await["id"].as_i64().unwrap() as i32;

    let updated = update_event(
        State(test.into_app_state()),
        test.session.clone(),
        Path(id),
        Json(input("Spring tree planting")),
    )
    .await;
    let body = json_body(updated.unwrap().into_response()).await;
    assert_eq!(body["title"], "Spring tree planting");

    let deleted = delete_event(State(test.into_app_state()), test.session.clone(), Path(id)).await;
    assert_eq!(deleted.unwrap().into_response().status(), StatusCode::NO_CONTENT);

    let fetched = get_event(State(test.into_app_state()), Path(id)).await;
    assert_eq!(
        fetched.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 422 for an event ending before it starts
#[tokio::test]
async fn rejects_invalid_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_table().build().await?;
    session::sign_in_admin(&test.session, "admin-1").await;

    let valid = input("Tree planting");
    let invalid = EventInputDto {
        ends_at: valid.starts_at - Duration::hours(1),
        ..valid
    };
    let result = create_event(
        State(test.into_app_state()),
        test.session.clone(),
        Json(invalid),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect writes to be refused for volunteers and anonymous users
#[tokio::test]
async fn writes_require_admin() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_event_table().build().await?;
    let event = test.event().insert_event("Book sale", 2).await?;

    let anonymous = delete_event(
        State(test.into_app_state()),
        test.session.clone(),
        Path(event.id),
    )
    .await;
    assert_eq!(
        anonymous.err().unwrap().into_response().status(),
        StatusCode::UNAUTHORIZED
    );

    session::sign_in_volunteer(&test.session, "u3").await;
    let volunteer = delete_event(
        State(test.into_app_state()),
        test.session.clone(),
        Path(event.id),
    )
    .await;
    assert_eq!(
        volunteer.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    Ok(())
}
