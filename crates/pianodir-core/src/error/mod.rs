//! Domain errors

mod capability_error;
mod domain_error;

pub use capability_error::CapabilityError;
pub use domain_error::DomainError;
