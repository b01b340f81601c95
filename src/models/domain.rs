use serde::Serialize;
use std::fmt;

/// The three inputs of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// All fields in form order
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const ACKNOWLEDGEMENT_TITLE: &str = "Message Received";
pub const ACKNOWLEDGEMENT_DESCRIPTION: &str = "Thank you for reaching out. We'll get back to you soon.";

/// Local acknowledgement presented after an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub title: String,
    pub description: String,
}

impl Default for Acknowledgement {
    fn default() -> Self {
        Self {
            title: ACKNOWLEDGEMENT_TITLE.to_string(),
            description: ACKNOWLEDGEMENT_DESCRIPTION.to_string(),
        }
    }
}

/// A quote exactly as the upstream provider returned it
///
/// The body is only checked to be well-formed JSON; its fields are never
/// read, so whatever shape the provider uses is relayed untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    body: Vec<u8>,
}

impl Quote {
    /// Wrap an upstream body, rejecting anything that is not JSON
    pub fn from_json_bytes(body: impl Into<Vec<u8>>) -> Result<Self, serde_json::Error> {
        let body = body.into();
        serde_json::from_slice::<serde::de::IgnoredAny>(&body)?;
        Ok(Self { body })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }
}
