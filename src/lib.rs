//! Awareness Site - backend for the Cancer Awareness community site
//!
//! Two independent pieces live here: a thin proxy that relays an
//! inspirational quote from a third-party provider, and the validation and
//! acknowledgement flow behind the site's contact form.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{validate_submission, ContactForm, ContactValidationErrors, FieldError};
pub use models::{Acknowledgement, ContactField, ContactSubmission, Quote};
pub use services::{QuoteClient, QuoteError, QuoteSource};
