//! Contact form validation.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Why a contact submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// At least one field is empty after trimming
    #[error("missing required fields")]
    MissingFields,
    /// The email does not look like `local@domain.tld`
    #[error("invalid email address")]
    InvalidEmail,
}

/// Raw values read from the four contact fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message subject
    pub subject: String,
    /// Message body
    pub message: String,
}

/// Trimmed, validated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message subject
    pub subject: String,
    /// Message body
    pub message: String,
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        // Literal pattern, cannot fail to compile
        Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
    })
}

/// Returns true when `email` has the shape `local@domain.tld`.
///
/// No part may contain whitespace or `@`.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

impl ContactFields {
    /// Trims every field and validates the result.
    ///
    /// Missing fields are reported before a malformed email.
    pub fn validate(&self) -> Result<ContactSubmission, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let subject = self.subject.trim();
        let message = self.message.trim();

        if [name, email, subject, message].iter().any(|v| v.is_empty()) {
            return Err(ValidationError::MissingFields);
        }

        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, subject: &str, message: &str) -> ContactFields {
        ContactFields {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_email_accepts_simple_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("First.Last+tag@Example.COM"));
        assert!(is_valid_email("x@sub.domain.org"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b.c om"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn test_validate_trims_fields() {
        let submission = fields("  Ada ", " ada@example.com\t", " Hi ", "\nHello\n")
            .validate()
            .unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.subject, "Hi");
        assert_eq!(submission.message, "Hello");
    }

    #[test]
    fn test_validate_missing_each_field() {
        let valid = ["Ada", "ada@example.com", "Hi", "Hello"];
        for blank in 0..4 {
            let mut values = valid;
            values[blank] = "   ";
            let result = fields(values[0], values[1], values[2], values[3]).validate();
            assert_eq!(result, Err(ValidationError::MissingFields), "field {blank}");
        }
    }

    #[test]
    fn test_missing_fields_reported_before_bad_email() {
        let result = fields("", "not-an-email", "Hi", "Hello").validate();
        assert_eq!(result, Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_validate_invalid_email() {
        let result = fields("Ada", "ada@example", "Hi", "Hello").validate();
        assert_eq!(result, Err(ValidationError::InvalidEmail));
    }
}
