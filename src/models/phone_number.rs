//! PhoneNumber model, owned by exactly one contact.

use serde::{Deserialize, Serialize};

/// A phone number row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PhoneNumber {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Number in `+DD-DDD-DDDDDDD` form, unique across all phone numbers
    pub number: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<i64>,
}

impl PhoneNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..Default::default()
        }
    }

    pub fn for_contact(contact_id: i64, number: impl Into<String>) -> Self {
        Self {
            id: None,
            number: number.into(),
            contact_id: Some(contact_id),
        }
    }
}
