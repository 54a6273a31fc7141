//! # haven-service
//!
//! Business services for HavenMart. Each service orchestrates repositories
//! from `haven-database` and the side-effect seams from `haven-core`
//! (live push, email, file store), and is handed a [`RequestContext`]
//! describing the authenticated caller.
//!
//! [`RequestContext`]: context::RequestContext

pub mod context;
pub mod email;
pub mod inspection;
pub mod listing;
pub mod notification;
pub mod upload;
