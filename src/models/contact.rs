//! Contact model: a named person owning emails and phone numbers.

use super::{Email, PhoneNumber};
use serde::{Deserialize, Serialize};

/// A contact with its owned email and phone number collections.
///
/// The contact owns its children exclusively. Children reference the
/// contact by id only; the collections here are rebuilt from a query keyed
/// on that id whenever a contact is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    /// Storage-assigned identifier; `None` until the contact is persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Display name, unique across all contacts
    pub name: String,

    /// Email addresses, in insertion order
    pub emails: Vec<Email>,

    /// Phone numbers, in insertion order
    pub phone_numbers: Vec<PhoneNumber>,

    /// Filesystem path of the uploaded image, if any
    pub image: Option<String>,
}

impl Contact {
    /// Create an unsaved contact with no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style helper that appends an unsaved email.
    pub fn with_email(mut self, address: impl Into<String>) -> Self {
        self.emails.push(Email::new(address));
        self
    }

    /// Builder-style helper that appends an unsaved phone number.
    pub fn with_phone_number(mut self, number: impl Into<String>) -> Self {
        self.phone_numbers.push(PhoneNumber::new(number));
        self
    }

    /// All email addresses as plain strings.
    pub fn addresses(&self) -> Vec<&str> {
        self.emails.iter().map(|e| e.address.as_str()).collect()
    }

    /// All phone numbers as plain strings.
    pub fn numbers(&self) -> Vec<&str> {
        self.phone_numbers.iter().map(|p| p.number.as_str()).collect()
    }
}
