//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use entity::sea_orm_active_enums::ReviewStatus;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and fixtures.
/// Methods can be chained together and finalized with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_applicant_tables: bool,
    include_event_table: bool,

    // Database fixtures to insert
    profiles: Vec<(String, bool, Option<ReviewStatus>)>, // (user_id, form_completed, status)
    applicants: Vec<(String, ReviewStatus)>,             // profiles with a submitted application
    events: Vec<(String, i64)>,                          // (title, starts in days from now)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_applicant_tables: false,
            include_event_table: false,
            profiles: Vec::new(),
            applicants: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Add the applicant profile & volunteer application tables to the test database.
    pub fn with_applicant_tables(mut self) -> Self {
        self.include_applicant_tables = true;
        self
    }

    /// Add the event table to the test database.
    pub fn with_event_table(mut self) -> Self {
        self.include_event_table = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use crewhub_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), crewhub_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(ApplicantProfile)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an applicant profile with the given form state and review status.
    ///
    /// Does not insert a volunteer application, so profiles which violate the
    /// "status requires a submitted form" invariant can be created on purpose.
    pub fn with_profile(
        mut self,
        user_id: impl Into<String>,
        form_completed: bool,
        status: Option<ReviewStatus>,
    ) -> Self {
        self.profiles.push((user_id.into(), form_completed, status));
        self
    }

    /// Insert an applicant who has submitted the volunteer form and is in the given review status.
    pub fn with_applicant(mut self, user_id: impl Into<String>, status: ReviewStatus) -> Self {
        self.applicants.push((user_id.into(), status));
        self
    }

    /// Insert an event starting the given number of days from now (negative for past events).
    pub fn with_event(mut self, title: impl Into<String>, starts_in_days: i64) -> Self {
        self.events.push((title.into(), starts_in_days));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (applicant & event tables if specified, then custom tables)
    /// 2. Inserts database fixtures (profiles, applicants, events)
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_applicant_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::ApplicantProfile));
            all_tables.push(schema.create_table_from_entity(entity::prelude::VolunteerApplication));
        }

        if self.include_event_table {
            all_tables.push(schema.create_table_from_entity(entity::prelude::Event));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (user_id, form_completed, status) in self.profiles {
            setup
                .applicant()
                .insert_profile(&user_id, form_completed, status)
                .await?;
        }

        for (user_id, status) in self.applicants {
            setup
                .applicant()
                .insert_applicant_with_application(&user_id, status)
                .await?;
        }

        for (title, starts_in_days) in self.events {
            setup.event().insert_event(&title, starts_in_days).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
