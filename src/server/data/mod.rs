//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organizing
//! data access by domain (applicants and events). Every repository is generic over
//! `ConnectionTrait` so it can run on a pooled connection or inside a transaction.

pub mod applicant;
pub mod event;
