use crate::core::validation::{validate_submission, ContactValidationErrors};
use crate::models::{Acknowledgement, ContactField, ContactSubmission};

/// State behind the "Get in Touch" form
///
/// Submitting never transmits or stores anything. An accepted submission
/// produces a local acknowledgement and the form starts over empty.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    submission: ContactSubmission,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        self.submission.set_field(field, value);
    }

    /// Validate the current input
    ///
    /// On failure the entered values are kept so they can be corrected.
    pub fn submit(&mut self) -> Result<Acknowledgement, ContactValidationErrors> {
        if let Err(errors) = validate_submission(&self.submission) {
            tracing::debug!("Contact form rejected with {} field error(s)", errors.len());
            return Err(errors);
        }

        tracing::info!("Contact form submission acknowledged");
        self.reset();

        Ok(Acknowledgement::default())
    }

    pub fn reset(&mut self) {
        self.submission = ContactSubmission::default();
    }
}
