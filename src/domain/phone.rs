//! InternationalNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]{2}-[0-9]{3}-[0-9]{7}$").expect("phone pattern is valid"));

/// A phone number in the `+DD-DDD-DDDDDDD` format.
///
/// Country code, area code and subscriber number are fixed width; no
/// spaces, parentheses or alternative groupings are accepted.
///
/// # Example
///
/// ```
/// use phone_contacts::domain::InternationalNumber;
///
/// let phone = InternationalNumber::new("+12-345-6789012").unwrap();
/// assert_eq!(phone.as_str(), "+12-345-6789012");
/// assert!(InternationalNumber::new("+12 345 6789012").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InternationalNumber(String);

impl InternationalNumber {
    /// Create a new InternationalNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number does not match.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    pub fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
