//! Trait seams shared across the workspace.

pub mod file_store;
pub mod live_channel;
pub mod mailer;

pub use file_store::FileStore;
pub use live_channel::LiveChannel;
pub use mailer::{EmailMessage, Mailer};
