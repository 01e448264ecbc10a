//! Applicant fixture utilities.
//!
//! Provides methods for inserting applicant profiles and volunteer applications, along
//! with factory functions for creating in-memory model instances.

pub mod data;
pub mod factory;
