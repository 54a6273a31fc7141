//! Outbound email implementations.

pub mod mailer;

pub use mailer::{mailer_from_config, HttpMailer, NoopMailer};
