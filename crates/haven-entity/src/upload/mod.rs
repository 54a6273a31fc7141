//! Uploaded file entity.

pub mod model;

pub use model::UploadedFile;
