//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Local part of RFC 5322 atoms, then dot-separated DNS labels.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// A type-safe wrapper for email addresses.
///
/// The grammar accepts dotted atoms in the local part and one or more DNS
/// labels in the domain. A single-label domain (`user@localhost`) is
/// accepted, matching the usual bean-validation behaviour.
///
/// # Example
///
/// ```
/// use phone_contacts::domain::EmailAddress;
///
/// let email = EmailAddress::new("val@gmail.com").unwrap();
/// assert_eq!(email.as_str(), "val@gmail.com");
/// assert!(EmailAddress::new("val@").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the address does not match.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Check an address without allocating a value object.
    pub fn is_valid(email: &str) -> bool {
        email.len() <= 254 && EMAIL_REGEX.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("val@gmail.com").unwrap();
        assert_eq!(email.as_str(), "val@gmail.com");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(EmailAddress::new("").is_err());
        assert!(EmailAddress::new("invalid").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("user@").is_err());
        assert!(EmailAddress::new("user@@example.com").is_err());
        assert!(EmailAddress::new("user name@example.com").is_err());
        assert!(EmailAddress::new("user@-example.com").is_err());
        assert!(EmailAddress::new(".user@example.com").is_err());
        assert!(EmailAddress::new("valid@example.com").is_ok());
        assert!(EmailAddress::new("user@localhost").is_ok());
        assert!(EmailAddress::new("user.name+tag@example.co.uk").is_ok());
    }

    #[test]
    fn test_email_error_carries_address() {
        assert_eq!(
            EmailAddress::new("invalid"),
            Err(ValidationError::InvalidEmail("invalid".to_string()))
        );
    }
}
