//! Configuration and shared data models.

pub mod config;
pub mod models;
