//! HTTP and WebSocket handlers.

pub mod health;
pub mod inspection;
pub mod listing;
pub mod notification;
pub mod upload;
pub mod ws;
