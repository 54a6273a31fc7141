//! User entity.

pub mod model;
pub mod role;
pub mod verification;

pub use model::User;
pub use role::UserRole;
pub use verification::VerificationStatus;
