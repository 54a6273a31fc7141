//! Repository implementations, one per aggregate.

pub mod inspection;
pub mod listing;
pub mod notification;
pub mod session;
pub mod upload;
pub mod user;
