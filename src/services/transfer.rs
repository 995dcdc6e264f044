//! Bulk JSON import and export of the whole contact set.
//!
//! The document is a JSON array of contacts. Children are written without
//! their back-reference to the owning contact. Decoding ignores unknown
//! fields and defaults missing collections to empty.

use crate::error::{ContactsError, ContactsResult};
use crate::models::{Contact, Email, PhoneNumber};
use crate::services::ContactService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// File name offered to clients downloading an export.
pub const EXPORT_FILE_NAME: &str = "contacts.json";

/// One contact as it appears in a transfer document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: Option<i64>,
    pub name: String,
    pub emails: Vec<EmailRecord>,
    pub phone_numbers: Vec<PhoneNumberRecord>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct EmailRecord {
    pub id: Option<i64>,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PhoneNumberRecord {
    pub id: Option<i64>,
    pub number: String,
}

impl From<&Contact> for ContactRecord {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name.clone(),
            emails: contact
                .emails
                .iter()
                .map(|e| EmailRecord {
                    id: e.id,
                    address: e.address.clone(),
                })
                .collect(),
            phone_numbers: contact
                .phone_numbers
                .iter()
                .map(|p| PhoneNumberRecord {
                    id: p.id,
                    number: p.number.clone(),
                })
                .collect(),
            image: contact.image.clone(),
        }
    }
}

impl From<ContactRecord> for Contact {
    /// Document ids are dropped; storage assigns new ones on create.
    fn from(record: ContactRecord) -> Self {
        Self {
            id: None,
            name: record.name,
            emails: record
                .emails
                .into_iter()
                .map(|e| Email::new(e.address))
                .collect(),
            phone_numbers: record
                .phone_numbers
                .into_iter()
                .map(|p| PhoneNumber::new(p.number))
                .collect(),
            image: record.image,
        }
    }
}

/// Encode contacts as a pretty-printed JSON array.
pub fn encode_contacts(contacts: &[Contact]) -> ContactsResult<String> {
    let records: Vec<ContactRecord> = contacts.iter().map(ContactRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Decode a transfer document into unsaved contacts, in document order.
pub fn decode_contacts(document: &str) -> ContactsResult<Vec<Contact>> {
    let records: Vec<ContactRecord> = serde_json::from_str(document)?;
    Ok(records.into_iter().map(Contact::from).collect())
}

/// Result of a completed import.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub contacts: Vec<Contact>,
}

/// Import/export driver on top of the contact lifecycle manager.
pub struct TransferService {
    contacts: Arc<dyn ContactService>,
}

impl TransferService {
    pub fn new(contacts: Arc<dyn ContactService>) -> Self {
        Self { contacts }
    }

    /// Serialize every stored contact.
    pub async fn export(&self) -> ContactsResult<String> {
        let contacts = self.contacts.list().await?;
        let document = encode_contacts(&contacts)?;
        info!(count = contacts.len(), "Contacts exported");
        Ok(document)
    }

    /// Create one contact per document entry, in order.
    ///
    /// The first failing entry aborts the import. Contacts created before
    /// it are not rolled back; the error reports how many were kept.
    pub async fn import(&self, document: &str) -> ContactsResult<ImportSummary> {
        let parsed = decode_contacts(document).map_err(|e| {
            error!(error = %e, "Import document could not be parsed");
            e
        })?;

        let mut created = Vec::with_capacity(parsed.len());
        for (position, contact) in parsed.into_iter().enumerate() {
            match self.contacts.create(contact).await {
                Ok(contact) => created.push(contact),
                Err(source) => {
                    error!(
                        position,
                        created = created.len(),
                        error = %source,
                        "Import aborted"
                    );
                    return Err(ContactsError::ImportAborted {
                        position,
                        created: created.len(),
                        source: Box::new(source),
                    });
                }
            }
        }

        info!(count = created.len(), "Contacts imported");
        Ok(ImportSummary {
            imported: created.len(),
            contacts: created,
        })
    }
}
