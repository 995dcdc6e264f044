use async_trait::async_trait;
use phone_contacts::error::{ContactsError, ContactsResult};
use phone_contacts::models::Email;
use phone_contacts::repositories::EmailRepository;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock email repository for testing.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockEmailRepository {
    emails: Arc<Mutex<BTreeMap<i64, Email>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockEmailRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn len(&self) -> usize {
        self.emails.lock().unwrap().len()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_unique(&self, address: &str, except: Option<i64>) -> ContactsResult<()> {
        let emails = self.emails.lock().unwrap();
        if emails
            .values()
            .any(|e| e.address == address && e.id != except)
        {
            return Err(ContactsError::Conflict(format!(
                "UNIQUE constraint failed: email.address ({})",
                address
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl EmailRepository for MockEmailRepository {
    async fn find_by_id(&self, id: i64) -> ContactsResult<Option<Email>> {
        self.track_call("find_by_id");
        Ok(self.emails.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_address_and_contact(
        &self,
        address: &str,
        contact_id: i64,
    ) -> ContactsResult<Option<Email>> {
        self.track_call("find_by_address_and_contact");
        Ok(self
            .emails
            .lock()
            .unwrap()
            .values()
            .find(|e| e.address == address && e.contact_id == Some(contact_id))
            .cloned())
    }

    async fn find_all(&self) -> ContactsResult<Vec<Email>> {
        self.track_call("find_all");
        Ok(self.emails.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_contact(&self, contact_id: i64) -> ContactsResult<Vec<Email>> {
        self.track_call("find_by_contact");
        Ok(self
            .emails
            .lock()
            .unwrap()
            .values()
            .filter(|e| e.contact_id == Some(contact_id))
            .cloned()
            .collect())
    }

    async fn insert(&self, email: &Email) -> ContactsResult<Email> {
        self.track_call("insert");
        self.check_unique(&email.address, None)?;

        let mut emails = self.emails.lock().unwrap();
        let id = emails.keys().next_back().copied().unwrap_or(0) + 1;
        let stored = Email {
            id: Some(id),
            ..email.clone()
        };
        emails.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i64, email: &Email) -> ContactsResult<Option<Email>> {
        self.track_call("update");
        if !self.emails.lock().unwrap().contains_key(&id) {
            return Ok(None);
        }
        self.check_unique(&email.address, Some(id))?;

        let stored = Email {
            id: Some(id),
            ..email.clone()
        };
        self.emails.lock().unwrap().insert(id, stored.clone());
        Ok(Some(stored))
    }

    async fn delete_by_id(&self, id: i64) -> ContactsResult<()> {
        self.track_call("delete_by_id");
        self.emails.lock().unwrap().remove(&id);
        Ok(())
    }
}
