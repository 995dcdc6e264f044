use crate::error::ContactsResult;
use crate::models::*;
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage, enabling different
/// implementations (SQLite, in-memory mocks). Loaded contacts always carry
/// their current email and phone number collections.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve a single contact by ID.
    async fn find_by_id(&self, id: i64) -> ContactsResult<Option<Contact>>;

    /// Retrieve a contact by its exact name.
    async fn find_by_name(&self, name: &str) -> ContactsResult<Option<Contact>>;

    /// Retrieve every contact, ordered by ID.
    async fn find_all(&self) -> ContactsResult<Vec<Contact>>;

    /// Insert a new contact with its children.
    ///
    /// Any ids on the input are ignored; storage assigns fresh ones.
    async fn insert(&self, contact: &Contact) -> ContactsResult<Contact>;

    /// Overwrite an existing contact and replace its children.
    ///
    /// Returns `None` without writing anything if no contact has this ID.
    async fn update(&self, id: i64, contact: &Contact) -> ContactsResult<Option<Contact>>;

    /// Delete a contact together with its emails and phone numbers.
    ///
    /// Deleting a missing ID is not an error.
    async fn delete_by_id(&self, id: i64) -> ContactsResult<()>;
}

/// Repository for managing email rows.
#[async_trait]
pub trait EmailRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> ContactsResult<Option<Email>>;

    /// Find an email by address, restricted to one owning contact.
    async fn find_by_address_and_contact(
        &self,
        address: &str,
        contact_id: i64,
    ) -> ContactsResult<Option<Email>>;

    async fn find_all(&self) -> ContactsResult<Vec<Email>>;

    /// Emails owned by one contact.
    async fn find_by_contact(&self, contact_id: i64) -> ContactsResult<Vec<Email>>;

    /// Insert a new email; the ID on the input is ignored.
    async fn insert(&self, email: &Email) -> ContactsResult<Email>;

    /// Overwrite address and owner of an existing email.
    async fn update(&self, id: i64, email: &Email) -> ContactsResult<Option<Email>>;

    async fn delete_by_id(&self, id: i64) -> ContactsResult<()>;
}

/// Repository for managing phone number rows.
#[async_trait]
pub trait PhoneNumberRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> ContactsResult<Option<PhoneNumber>>;

    /// Find a phone number by value, restricted to one owning contact.
    async fn find_by_number_and_contact(
        &self,
        number: &str,
        contact_id: i64,
    ) -> ContactsResult<Option<PhoneNumber>>;

    async fn find_all(&self) -> ContactsResult<Vec<PhoneNumber>>;

    async fn find_by_contact(&self, contact_id: i64) -> ContactsResult<Vec<PhoneNumber>>;

    async fn insert(&self, phone: &PhoneNumber) -> ContactsResult<PhoneNumber>;

    async fn update(&self, id: i64, phone: &PhoneNumber) -> ContactsResult<Option<PhoneNumber>>;

    async fn delete_by_id(&self, id: i64) -> ContactsResult<()>;
}
