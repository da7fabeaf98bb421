//! Submission validation

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

/// Minimal address shape: something, `@`, something, `.`, something
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Raw, untrusted quote request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub product_name: Option<String>,

    /// Client address captured from the connection, not the body
    pub ip_address: Option<String>,
}

/// Per-field length bound applied during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    /// Maximum characters in any single field after trimming
    pub max_field_chars: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_field_chars: 2000,
        }
    }
}

/// A validated, trimmed submission ready to be written
///
/// Only constructed by [`validate`]. `name` and `email` are non-empty and
/// `email` has an address shape; every other field is a (possibly empty)
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRecord {
    name: String,
    company: String,
    email: String,
    phone: String,
    notes: String,
    product_name: String,
    ip_address: String,
}

impl CanonicalRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    /// Consume into `(name, company, email, phone, notes, product_name, ip_address)`
    pub(crate) fn into_parts(self) -> (String, String, String, String, String, String, String) {
        (
            self.name,
            self.company,
            self.email,
            self.phone,
            self.notes,
            self.product_name,
            self.ip_address,
        )
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Validate and normalize a raw submission
///
/// Rules are checked in order and the first failure wins:
/// name present, email present, email shape, field lengths.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first rule that fails.
pub fn validate(
    raw: Submission,
    limits: &ValidationLimits,
) -> Result<CanonicalRecord, ValidationError> {
    let name = trimmed(raw.name);
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    let email = trimmed(raw.email);
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_SHAPE.is_match(&email) {
        return Err(ValidationError::EmailInvalid);
    }

    let record = CanonicalRecord {
        name,
        company: trimmed(raw.company),
        email,
        phone: trimmed(raw.phone),
        notes: trimmed(raw.notes),
        product_name: trimmed(raw.product_name),
        ip_address: trimmed(raw.ip_address),
    };

    let fields = [
        ("name", &record.name),
        ("company", &record.company),
        ("email", &record.email),
        ("phone", &record.phone),
        ("notes", &record.notes),
        ("productName", &record.product_name),
        ("ipAddress", &record.ip_address),
    ];
    for (field, value) in fields {
        if value.chars().count() > limits.max_field_chars {
            return Err(ValidationError::FieldTooLong {
                field,
                max: limits.max_field_chars,
            });
        }
    }

    Ok(record)
}
