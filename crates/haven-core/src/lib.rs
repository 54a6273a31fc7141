//! # haven-core
//!
//! Core crate for HavenMart. Contains configuration schemas, the unified
//! error system, pagination types, and the trait seams shared across the
//! workspace (live push channel, outbound mailer, file store).
//!
//! This crate has **no** internal dependencies on other HavenMart crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
