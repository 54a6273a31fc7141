//! Upload record management.

pub mod service;
pub mod store;

pub use service::{RegisterUpload, UploadService};
pub use store::NoopFileStore;
