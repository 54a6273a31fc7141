//! # haven-entity
//!
//! Domain entity models for HavenMart: users, sessions, listings,
//! inspections, notifications, and uploaded files. Models derive
//! `sqlx::FromRow` for repository use and serde for the API layer.

pub mod inspection;
pub mod listing;
pub mod notification;
pub mod session;
pub mod upload;
pub mod user;
