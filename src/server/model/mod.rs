//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! access token keys and claims, database model type aliases, and session data structures.
//! These models bridge the gap between database entities, HTTP handlers, and services.

pub mod app;
pub mod auth;
pub mod db;
pub mod session;
