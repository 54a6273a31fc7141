//! Notification dispatch and read API.

pub mod service;
pub mod store;

pub use service::{NotificationService, Recipient};
pub use store::NotificationStore;
