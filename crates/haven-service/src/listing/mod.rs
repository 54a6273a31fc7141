//! Listing queries and creation.

pub mod service;

pub use service::{CreateListing, ListingService};
