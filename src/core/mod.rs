// Contact form exports
pub mod form;
pub mod validation;

pub use form::ContactForm;
pub use validation::{validate_submission, ContactValidationErrors, FieldError};
