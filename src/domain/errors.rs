//! Domain validation errors.

use std::fmt;

/// A single field-level violation found before anything reaches storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The contact name is empty or only whitespace.
    EmptyName,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number does not match `+DD-DDD-DDDDDDD`.
    InvalidPhone(String),

    /// An email or phone number has no owning contact.
    MissingOwner,
}

impl ValidationError {
    /// Name of the JSON field the violation refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::InvalidEmail(_) => "address",
            Self::InvalidPhone(_) => "number",
            Self::MissingOwner => "contactId",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number format: {}", phone),
            Self::MissingOwner => write!(f, "Owning contact is required"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Every violation collected while validating one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// `Ok(())` when nothing was collected, otherwise the collected list.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
