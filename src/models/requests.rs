use validator::Validate;
use crate::models::domain::ContactField;

/// Candidate contact form submission
///
/// Never persisted and never sent anywhere: it is validated, acknowledged
/// and then replaced by an empty default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1, code = "required"))]
    pub name: String,
    #[validate(email(code = "invalid_format"))]
    pub email: String,
    #[validate(length(min = 1, code = "required"))]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// True when every field is still empty
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}
