//! Contact service layer.
//!
//! Lifecycle of contacts: create, full-replacement update, cascading
//! delete and lookups.

use crate::domain::validate_contact;
use crate::error::{ContactsError, ContactsResult};
use crate::models::Contact;
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Persist a new contact (and the children it carries) with a fresh ID.
    ///
    /// A duplicate name surfaces as `ContactsError::Conflict`.
    async fn create(&self, contact: Contact) -> ContactsResult<Contact>;

    /// Overwrite name, emails, phone numbers and image of an existing contact.
    ///
    /// Fields missing from `patch` become empty. Returns
    /// `ContactsError::NotFound` if no contact has this ID.
    async fn update(&self, id: i64, patch: Contact) -> ContactsResult<Contact>;

    /// Delete a contact and every email and phone number it owns.
    ///
    /// Accepts any ID; callers that need a 404 check existence first.
    async fn delete(&self, id: i64) -> ContactsResult<()>;

    async fn get_by_id(&self, id: i64) -> ContactsResult<Option<Contact>>;

    async fn get_by_name(&self, name: &str) -> ContactsResult<Option<Contact>>;

    /// All contacts, ordered by ID.
    async fn list(&self) -> ContactsResult<Vec<Contact>>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    contacts: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }

    fn validate(contact: &Contact) -> ContactsResult<()> {
        validate_contact(contact).map_err(|errors| {
            warn!(name = %contact.name, %errors, "Rejected contact");
            ContactsError::Validation(errors)
        })
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn create(&self, contact: Contact) -> ContactsResult<Contact> {
        Self::validate(&contact)?;

        let created = self.contacts.insert(&contact).await?;
        info!(contact_id = ?created.id, name = %created.name, "Contact created");
        Ok(created)
    }

    async fn update(&self, id: i64, patch: Contact) -> ContactsResult<Contact> {
        Self::validate(&patch)?;

        let updated = self
            .contacts
            .update(id, &patch)
            .await?
            .ok_or_else(|| ContactsError::not_found("Contact", id))?;
        info!(contact_id = id, "Contact updated");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> ContactsResult<()> {
        self.contacts.delete_by_id(id).await?;
        info!(contact_id = id, "Contact deleted");
        Ok(())
    }

    async fn get_by_id(&self, id: i64) -> ContactsResult<Option<Contact>> {
        debug!(contact_id = id, "Looking up contact");
        self.contacts.find_by_id(id).await
    }

    async fn get_by_name(&self, name: &str) -> ContactsResult<Option<Contact>> {
        debug!(name = %name, "Looking up contact by name");
        self.contacts.find_by_name(name).await
    }

    async fn list(&self) -> ContactsResult<Vec<Contact>> {
        self.contacts.find_all().await
    }
}
