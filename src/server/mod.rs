//! Server application core modules.
//!
//! This module contains all server-side functionality for Crewhub: HTTP routing, sign-in,
//! the volunteer application lifecycle and its status gate, event management, and database
//! access.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
