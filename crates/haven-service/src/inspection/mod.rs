//! Inspection lifecycle: creation, role-scoped listing, the inspector job
//! board, acceptance, and status transitions.

pub mod service;
pub mod views;

pub use service::{CreateInspection, InspectionQuery, InspectionService, JobQuery};
pub use views::{
    AvailableJobView, ClientSummary, InspectionDetails, PartySummary, PaymentStatus, PaymentView,
    PropertySummary,
};
