//! Inspection entity: model, type, status, client join, and the derived
//! urgency classification.

pub mod kind;
pub mod model;
pub mod status;
pub mod urgency;

pub use kind::InspectionType;
pub use model::{Inspection, InspectionClient};
pub use status::InspectionStatus;
pub use urgency::Urgency;
