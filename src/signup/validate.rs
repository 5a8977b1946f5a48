use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Shown after a successful registration. Nothing is sent anywhere.
pub const CONFIRMATION_MESSAGE: &str = "Registration successful! We look forward to seeing you on March 18th. Check your email for confirmation details.";

/// `localpart@domain.tld` with no whitespace and a single `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// The first check a signup form fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Please fill in all required fields.")]
    MissingRequiredField,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter your access code.")]
    MissingAccessCode,
}

/// Event registration details as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub access_code: String,
}

impl SignupForm {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        access_code: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            access_code: access_code.into(),
        }
    }

    /// Check the form, stopping at the first failure.
    ///
    /// Fields are trimmed before checking. Order: name and email present,
    /// email shape, access code present.
    pub fn validate(&self) -> Result<(), SignupError> {
        let full_name = self.full_name.trim();
        let email = self.email.trim();

        if full_name.is_empty() || email.is_empty() {
            return Err(SignupError::MissingRequiredField);
        }

        if !is_valid_email(email) {
            return Err(SignupError::InvalidEmail);
        }

        if self.access_code.trim().is_empty() {
            return Err(SignupError::MissingAccessCode);
        }

        Ok(())
    }
}

/// Whether a string has the `localpart@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate and locally "submit" a registration.
pub fn submit(form: &SignupForm) -> Result<&'static str, SignupError> {
    form.validate()?;
    tracing::info!(email = form.email.trim(), "signup accepted");
    Ok(CONFIRMATION_MESSAGE)
}
