use crate::models::{ContactField, ContactSubmission};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// A single field-level validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} is required")]
    RequiredField { field: ContactField },

    #[error("Please enter a valid email address")]
    InvalidFormat { field: ContactField },
}

impl FieldError {
    pub fn field(&self) -> ContactField {
        match self {
            FieldError::RequiredField { field } | FieldError::InvalidFormat { field } => *field,
        }
    }

    /// Stable machine-readable classification
    pub fn kind(&self) -> &'static str {
        match self {
            FieldError::RequiredField { .. } => "required_field",
            FieldError::InvalidFormat { .. } => "invalid_format",
        }
    }

    fn from_code(field: ContactField, code: &str) -> Self {
        match (code, field) {
            ("invalid_format" | "email", _) | (_, ContactField::Email) => FieldError::InvalidFormat { field },
            _ => FieldError::RequiredField { field },
        }
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldError", 3)?;
        state.serialize_field("field", &self.field())?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Every field that failed, in form order, at most one error per field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("contact submission has {} invalid field(s)", .errors.len())]
#[serde(transparent)]
pub struct ContactValidationErrors {
    errors: Vec<FieldError>,
}

impl ContactValidationErrors {
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: ContactField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl From<ValidationErrors> for ContactValidationErrors {
    fn from(errors: ValidationErrors) -> Self {
        let by_field = errors.field_errors();
        let errors = ContactField::ALL
            .into_iter()
            .filter_map(|field| {
                let first = by_field.get(field.as_str())?.first()?;
                Some(FieldError::from_code(field, &first.code))
            })
            .collect();

        Self { errors }
    }
}

/// Validate a candidate submission
///
/// Pure: no I/O and no state, so identical input always yields an
/// identical result.
pub fn validate_submission(submission: &ContactSubmission) -> Result<(), ContactValidationErrors> {
    submission.validate().map_err(ContactValidationErrors::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission() {
        let submission = ContactSubmission::new("Ada", "ada@example.com", "Hello");
        assert!(validate_submission(&submission).is_ok());
    }

    #[test]
    fn test_empty_email_is_format_error() {
        let submission = ContactSubmission::new("Ada", "", "Hello");
        let errors = validate_submission(&submission).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(ContactField::Email),
            Some(&FieldError::InvalidFormat { field: ContactField::Email })
        );
    }

    #[test]
    fn test_error_messages() {
        let required = FieldError::RequiredField { field: ContactField::Name };
        assert_eq!(required.to_string(), "Name is required");
        assert_eq!(required.kind(), "required_field");
    }

    #[test]
    fn test_errors_serialize_for_inline_display() {
        let errors = validate_submission(&ContactSubmission::new("", "ada@example.com", "Hi")).unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "field": "name", "kind": "required_field", "message": "Name is required" }
            ])
        );
    }
}
