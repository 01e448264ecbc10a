//! SeaORM entities for the Crewhub database schema.

pub mod prelude;

pub mod applicant_profile;
pub mod event;
pub mod sea_orm_active_enums;
pub mod volunteer_application;
