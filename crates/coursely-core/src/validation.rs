//! # Form Validation
//!
//! Checks that run before a request is sent. Only the registration form
//! and comment drafts are validated locally; star ratings go to the
//! backend as-is and the backend decides.

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::types::{Registration, Role};
use crate::MIN_PASSWORD_LENGTH;

/// Raw registration form input, including the confirmation field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl RegistrationForm {
    /// Validates the form and produces the payload sent to the backend.
    ///
    /// Checks run in form order: name, email, password length, then the
    /// confirmation.
    pub fn validate(&self) -> CoreResult<Registration> {
        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        if !email.contains('@') {
            return Err(ValidationError::InvalidFormat {
                field: "email".to_string(),
                reason: "missing @".to_string(),
            });
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::TooShort {
                field: "password".to_string(),
                min: MIN_PASSWORD_LENGTH,
            });
        }

        if self.password != self.confirm_password {
            return Err(ValidationError::Mismatch {
                field: "confirm_password".to_string(),
                other: "password".to_string(),
            });
        }

        Ok(Registration {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

/// Trims a comment draft, rejecting whitespace-only input.
pub fn comment_text(draft: &str) -> CoreResult<String> {
    required("comment", draft).map(str::to_string)
}

fn required<'a>(field: &str, value: &'a str) -> CoreResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::required(field))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            name: " A ".into(),
            email: "a@b.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            role: Role::Instructor,
        }
    }

    #[test]
    fn test_valid_form_produces_payload() {
        let registration = form().validate().unwrap();
        assert_eq!(registration.name, "A");
        assert_eq!(registration.role, Role::Instructor);
    }

    #[test]
    fn test_short_password_rejected() {
        let mut f = form();
        f.password = "12345".into();
        f.confirm_password = "12345".into();
        assert_eq!(
            f.validate(),
            Err(ValidationError::TooShort {
                field: "password".into(),
                min: 6
            })
        );
    }

    #[test]
    fn test_confirmation_mismatch_rejected() {
        let mut f = form();
        f.confirm_password = "secret2".into();
        assert!(matches!(f.validate(), Err(ValidationError::Mismatch { .. })));
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut f = form();
        f.email = "   ".into();
        assert_eq!(f.validate(), Err(ValidationError::required("email")));

        let mut f = form();
        f.email = "nobody".into();
        assert!(matches!(f.validate(), Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn test_comment_text() {
        assert_eq!(comment_text("  great course \n").unwrap(), "great course");
        assert_eq!(comment_text(" \t "), Err(ValidationError::required("comment")));
    }
}
