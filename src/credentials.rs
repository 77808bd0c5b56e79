//! Credential value types validated at input time.

use crate::error::ValidationError;
use regex::Regex;
use std::fmt;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// Minimum password length accepted by [`Password::parse`].
pub const PASSWORD_MIN_LEN: usize = 6;

/// Email format check on already-trimmed input.
fn valid_email(email: &str) -> bool {
    Regex::new(EMAIL_PATTERN).is_ok_and(|re| re.is_match(email))
}

/// A well-formed email address.
///
/// Construction trims the raw input and rejects blank or malformed values;
/// the inner string is immutable afterwards. Equality is value-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Parse a raw string into an `Email`, trimming surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`ValidationError::Blank`] when the trimmed input is empty,
    /// [`ValidationError::MalformedEmail`] when it does not look like
    /// `localpart@domain.tld`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Blank);
        }
        if !valid_email(trimmed) {
            return Err(ValidationError::MalformedEmail);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A password that satisfies the minimum strength rules.
///
/// Equality is value-based; `Debug` output is redacted so raw passwords
/// never end up in logs or test failures.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Parse a raw string into a `Password`.
    ///
    /// The raw value is kept verbatim; only the checks trim.
    ///
    /// # Errors
    /// Returns [`ValidationError::Blank`] for empty or whitespace-only
    /// input, [`ValidationError::PasswordTooShort`] when the value has fewer
    /// than [`PASSWORD_MIN_LEN`] characters.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::Blank);
        }
        if raw.chars().count() < PASSWORD_MIN_LEN {
            return Err(ValidationError::PasswordTooShort(PASSWORD_MIN_LEN));
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
