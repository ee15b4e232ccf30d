//! Validation logic for the login and register forms.
//!
//! Rules run synchronously on submit. A form that fails validation yields one
//! [`ValidationError`] per invalid field and is never sent to the backend.

use once_cell::sync::Lazy;
use regex::Regex;
use shared::models::{LoginRequest, RegisterRequest};
use std::collections::BTreeMap;
use std::fmt;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Form fields that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    AgreeToTerms,
}

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    /// Field is required but empty
    Required(Field),
    /// Email address does not look like `local@domain.tld`
    InvalidEmail,
    /// Password is shorter than [`MIN_PASSWORD_LEN`]
    PasswordTooShort,
    /// Password confirmation doesn't match password
    PasswordsDoNotMatch,
    /// Terms and conditions were not accepted
    TermsNotAccepted,
}

impl ValidationError {
    /// Message shown under the offending field.
    pub fn message(self) -> &'static str {
        match self {
            Self::Required(Field::FirstName) => "First name is required",
            Self::Required(Field::LastName) => "Last name is required",
            Self::Required(Field::Email) => "Email is required",
            Self::Required(Field::Password) => "Password is required",
            Self::Required(Field::ConfirmPassword) => "Please confirm your password",
            Self::Required(Field::AgreeToTerms) | Self::TermsNotAccepted => {
                "You must agree to the terms and conditions"
            }
            Self::InvalidEmail => "Invalid email format",
            Self::PasswordTooShort => "Password must be at least 6 characters",
            Self::PasswordsDoNotMatch => "Passwords must match",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// At most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    /// Message for `field`, if it is invalid.
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(ValidationError::message)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn check(&mut self, field: Field, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            self.0.insert(field, error);
        }
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Validates an email address.
///
/// # Validation rules
/// - Email must not be empty
/// - Email must match `local@domain.tld` with no whitespace
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(Field::Email));
    }

    if !EMAIL_PATTERN.is_match(trimmed) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates a password.
///
/// # Validation rules
/// - Password must not be empty
/// - Password must be at least [`MIN_PASSWORD_LEN`] characters long
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required(Field::Password));
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

/// Validates that the password confirmation matches the password.
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if confirm_password.is_empty() {
        return Err(ValidationError::Required(Field::ConfirmPassword));
    }

    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }

    Ok(())
}

/// Validates a required name field.
pub fn validate_name(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

/// Validates the terms-acceptance checkbox.
pub fn validate_terms(accepted: bool) -> Result<(), ValidationError> {
    if accepted {
        Ok(())
    } else {
        Err(ValidationError::TermsNotAccepted)
    }
}

/// Values of the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Shown on the form; the backend has no use for it.
    pub remember_me: bool,
}

impl LoginForm {
    /// Check every field and build the request body.
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check(Field::Email, validate_email(&self.email));
        errors.check(Field::Password, validate_password(&self.password));
        errors.into_result(|| LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Values of the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

impl RegisterForm {
    /// Check every field and build the request body.
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check(Field::FirstName, validate_name(Field::FirstName, &self.first_name));
        errors.check(Field::LastName, validate_name(Field::LastName, &self.last_name));
        errors.check(Field::Email, validate_email(&self.email));
        errors.check(Field::Password, validate_password(&self.password));
        errors.check(
            Field::ConfirmPassword,
            validate_confirm_password(&self.confirm_password, &self.password),
        );
        errors.check(Field::AgreeToTerms, validate_terms(self.agree_to_terms));
        errors.into_result(|| RegisterRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}
