//! Phone number service layer.

use crate::domain::validate_phone_number;
use crate::error::{ContactsError, ContactsResult};
use crate::models::PhoneNumber;
use crate::repositories::PhoneNumberRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Phone number service trait, symmetric to `EmailService`.
#[async_trait]
pub trait PhoneNumberService: Send + Sync {
    async fn create(&self, phone: PhoneNumber) -> ContactsResult<PhoneNumber>;

    async fn update(&self, id: i64, patch: PhoneNumber) -> ContactsResult<Option<PhoneNumber>>;

    async fn delete(&self, id: i64) -> ContactsResult<()>;

    async fn get_by_id(&self, id: i64) -> ContactsResult<Option<PhoneNumber>>;

    async fn get_by_number_and_contact(
        &self,
        number: &str,
        contact_id: i64,
    ) -> ContactsResult<Option<PhoneNumber>>;

    async fn list(&self) -> ContactsResult<Vec<PhoneNumber>>;

    async fn list_for_contact(&self, contact_id: i64) -> ContactsResult<Vec<PhoneNumber>>;
}

/// Default implementation of PhoneNumberService.
pub struct PhoneNumberServiceImpl {
    phones: Arc<dyn PhoneNumberRepository>,
}

impl PhoneNumberServiceImpl {
    pub fn new(phones: Arc<dyn PhoneNumberRepository>) -> Self {
        Self { phones }
    }
}

#[async_trait]
impl PhoneNumberService for PhoneNumberServiceImpl {
    async fn create(&self, phone: PhoneNumber) -> ContactsResult<PhoneNumber> {
        validate_phone_number(&phone).map_err(|errors| {
            warn!(number = %phone.number, %errors, "Rejected phone number");
            ContactsError::Validation(errors)
        })?;

        let created = self.phones.insert(&phone).await?;
        info!(phone_number_id = ?created.id, contact_id = ?created.contact_id, "Phone number created");
        Ok(created)
    }

    async fn update(&self, id: i64, patch: PhoneNumber) -> ContactsResult<Option<PhoneNumber>> {
        validate_phone_number(&patch).map_err(|errors| {
            warn!(number = %patch.number, %errors, "Rejected phone number");
            ContactsError::Validation(errors)
        })?;

        self.phones.update(id, &patch).await
    }

    async fn delete(&self, id: i64) -> ContactsResult<()> {
        self.phones.delete_by_id(id).await?;
        info!(phone_number_id = id, "Phone number deleted");
        Ok(())
    }

    async fn get_by_id(&self, id: i64) -> ContactsResult<Option<PhoneNumber>> {
        self.phones.find_by_id(id).await
    }

    async fn get_by_number_and_contact(
        &self,
        number: &str,
        contact_id: i64,
    ) -> ContactsResult<Option<PhoneNumber>> {
        self.phones.find_by_number_and_contact(number, contact_id).await
    }

    async fn list(&self) -> ContactsResult<Vec<PhoneNumber>> {
        self.phones.find_all().await
    }

    async fn list_for_contact(&self, contact_id: i64) -> ContactsResult<Vec<PhoneNumber>> {
        self.phones.find_by_contact(contact_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contact;
    use crate::repositories::{ContactRepository, SqliteStore};

    #[tokio::test]
    async fn test_invalid_number_never_reaches_storage() {
        let store = SqliteStore::open_in_memory().unwrap();
        let contact = store.contacts().insert(&Contact::new("John Doe")).await.unwrap();
        let service = PhoneNumberServiceImpl::new(Arc::new(store.phone_numbers()));

        let err = service
            .create(PhoneNumber::for_contact(contact.id.unwrap(), "invalid"))
            .await
            .unwrap_err();
        assert!(matches!(err, ContactsError::Validation(_)));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_validation_precedes_lookup() {
        let store = SqliteStore::open_in_memory().unwrap();
        let service = PhoneNumberServiceImpl::new(Arc::new(store.phone_numbers()));

        let err = service
            .update(1, PhoneNumber::for_contact(1, "+12-345"))
            .await
            .unwrap_err();
        assert!(matches!(err, ContactsError::Validation(_)));

        let missing = service
            .update(1, PhoneNumber::for_contact(1, "+12-345-6789012"))
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
