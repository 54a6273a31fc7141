//! # haven-database
//!
//! PostgreSQL connection management, migrations, and repository
//! implementations for HavenMart.

pub mod connection;
pub mod migration;
pub mod repositories;
