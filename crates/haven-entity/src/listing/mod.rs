//! Listing entity.

pub mod model;
pub mod status;

pub use model::Listing;
pub use status::ListingStatus;
