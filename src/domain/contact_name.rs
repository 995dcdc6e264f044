//! ContactName value object.

use super::errors::ValidationError;

/// A contact's display name, guaranteed to contain a non-whitespace character.
///
/// Uniqueness across contacts is not checked here; that is enforced by the
/// store's UNIQUE constraint.
///
/// # Example
///
/// ```
/// use phone_contacts::domain::ContactName;
///
/// let name = ContactName::new("John Doe").unwrap();
/// assert_eq!(name.as_str(), "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty or whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !Self::is_valid(&name) {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    pub fn is_valid(name: &str) -> bool {
        !name.trim().is_empty()
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_name_valid() {
        let name = ContactName::new("John Doe").unwrap();
        assert_eq!(name.as_str(), "John Doe");
    }

    #[test]
    fn test_contact_name_rejects_blank() {
        assert_eq!(ContactName::new(""), Err(ValidationError::EmptyName));
        assert_eq!(ContactName::new("   \t"), Err(ValidationError::EmptyName));
    }
}
