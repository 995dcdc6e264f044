//! Email model, owned by exactly one contact.

use serde::{Deserialize, Serialize};

/// An email address row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Email {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The address itself, unique across all emails
    pub address: String,

    /// Owning contact; required before the row can be stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<i64>,
}

impl Email {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    /// An unsaved email already attached to `contact_id`.
    pub fn for_contact(contact_id: i64, address: impl Into<String>) -> Self {
        Self {
            id: None,
            address: address.into(),
            contact_id: Some(contact_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_deserialization_ignores_unknown_fields() {
        let email: Email =
            serde_json::from_str(r#"{"address":"val@gmail.com","label":"work"}"#).unwrap();
        assert_eq!(email.address, "val@gmail.com");
        assert_eq!(email.contact_id, None);
    }

    #[test]
    fn test_email_serialization() {
        let email = Email {
            id: Some(3),
            address: "val@gmail.com".to_string(),
            contact_id: Some(1),
        };
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, r#"{"id":3,"address":"val@gmail.com","contactId":1}"#);
    }
}
