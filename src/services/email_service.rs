//! Email service layer.

use crate::domain::validate_email;
use crate::error::{ContactsError, ContactsResult};
use crate::models::Email;
use crate::repositories::EmailRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Email service trait for business operations.
///
/// Every write expects the email to reference an already-resolved contact.
#[async_trait]
pub trait EmailService: Send + Sync {
    async fn create(&self, email: Email) -> ContactsResult<Email>;

    /// Overwrite address and owner. `Ok(None)` when the ID does not exist.
    async fn update(&self, id: i64, patch: Email) -> ContactsResult<Option<Email>>;

    /// Unconditional delete; absence is not reported.
    async fn delete(&self, id: i64) -> ContactsResult<()>;

    async fn get_by_id(&self, id: i64) -> ContactsResult<Option<Email>>;

    async fn get_by_address_and_contact(
        &self,
        address: &str,
        contact_id: i64,
    ) -> ContactsResult<Option<Email>>;

    /// Every email across all contacts.
    async fn list(&self) -> ContactsResult<Vec<Email>>;

    async fn list_for_contact(&self, contact_id: i64) -> ContactsResult<Vec<Email>>;
}

/// Default implementation of EmailService.
pub struct EmailServiceImpl {
    emails: Arc<dyn EmailRepository>,
}

impl EmailServiceImpl {
    pub fn new(emails: Arc<dyn EmailRepository>) -> Self {
        Self { emails }
    }

    fn validate(email: &Email) -> ContactsResult<()> {
        validate_email(email).map_err(|errors| {
            warn!(address = %email.address, %errors, "Rejected email");
            ContactsError::Validation(errors)
        })
    }
}

#[async_trait]
impl EmailService for EmailServiceImpl {
    async fn create(&self, email: Email) -> ContactsResult<Email> {
        Self::validate(&email)?;

        let created = self.emails.insert(&email).await?;
        info!(email_id = ?created.id, contact_id = ?created.contact_id, "Email created");
        Ok(created)
    }

    async fn update(&self, id: i64, patch: Email) -> ContactsResult<Option<Email>> {
        Self::validate(&patch)?;

        let updated = self.emails.update(id, &patch).await?;
        if updated.is_some() {
            info!(email_id = id, "Email updated");
        }
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> ContactsResult<()> {
        self.emails.delete_by_id(id).await?;
        info!(email_id = id, "Email deleted");
        Ok(())
    }

    async fn get_by_id(&self, id: i64) -> ContactsResult<Option<Email>> {
        self.emails.find_by_id(id).await
    }

    async fn get_by_address_and_contact(
        &self,
        address: &str,
        contact_id: i64,
    ) -> ContactsResult<Option<Email>> {
        self.emails
            .find_by_address_and_contact(address, contact_id)
            .await
    }

    async fn list(&self) -> ContactsResult<Vec<Email>> {
        self.emails.find_all().await
    }

    async fn list_for_contact(&self, contact_id: i64) -> ContactsResult<Vec<Email>> {
        self.emails.find_by_contact(contact_id).await
    }
}
