//! Event fixture utilities.

pub mod data;
