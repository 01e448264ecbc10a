pub use sea_orm_migration::prelude::*;

mod m20260301_000001_applicant_profile;
mod m20260301_000002_volunteer_application;
mod m20260301_000003_event;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_applicant_profile::Migration),
            Box::new(m20260301_000002_volunteer_application::Migration),
            Box::new(m20260301_000003_event::Migration),
        ]
    }
}
