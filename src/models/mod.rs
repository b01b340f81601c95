// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Acknowledgement, ContactField, Quote};
pub use requests::ContactSubmission;
pub use responses::{ErrorResponse, HealthResponse};
