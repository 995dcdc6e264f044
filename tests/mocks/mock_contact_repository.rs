use async_trait::async_trait;
use phone_contacts::error::{ContactsError, ContactsResult};
use phone_contacts::models::Contact;
use phone_contacts::repositories::ContactRepository;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily configured with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<BTreeMap<i64, Contact>>>,
    next_id: Arc<Mutex<i64>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(Mutex::new(1)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a contact as-is, assigning an ID if it has none.
    pub fn add_contact(&self, mut contact: Contact) -> i64 {
        let id = contact.id.unwrap_or_else(|| self.allocate_id());
        contact.id = Some(id);
        self.contacts.lock().unwrap().insert(id, contact);
        id
    }

    /// Snapshot of a stored contact, bypassing call tracking.
    pub fn stored(&self, id: i64) -> Option<Contact> {
        self.contacts.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn allocate_id(&self) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        let id = *next;
        *next += 1;
        id
    }

    /// Give the contact and its children fresh IDs.
    fn assign_ids(&self, id: i64, contact: &Contact) -> Contact {
        let mut stored = contact.clone();
        stored.id = Some(id);
        for email in &mut stored.emails {
            email.id = Some(self.allocate_id());
            email.contact_id = Some(id);
        }
        for phone in &mut stored.phone_numbers {
            phone.id = Some(self.allocate_id());
            phone.contact_id = Some(id);
        }
        stored
    }

    fn name_taken(&self, name: &str, except: Option<i64>) -> bool {
        self.contacts
            .lock()
            .unwrap()
            .values()
            .any(|c| c.name == name && c.id != except)
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn find_by_id(&self, id: i64) -> ContactsResult<Option<Contact>> {
        self.track_call("find_by_id");
        Ok(self.contacts.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> ContactsResult<Option<Contact>> {
        self.track_call("find_by_name");
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .values()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn find_all(&self) -> ContactsResult<Vec<Contact>> {
        self.track_call("find_all");
        Ok(self.contacts.lock().unwrap().values().cloned().collect())
    }

    async fn insert(&self, contact: &Contact) -> ContactsResult<Contact> {
        self.track_call("insert");

        if self.name_taken(&contact.name, None) {
            return Err(ContactsError::Conflict(format!(
                "UNIQUE constraint failed: contact.name ({})",
                contact.name
            )));
        }

        let id = self.allocate_id();
        let stored = self.assign_ids(id, contact);
        self.contacts.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i64, contact: &Contact) -> ContactsResult<Option<Contact>> {
        self.track_call("update");

        if !self.contacts.lock().unwrap().contains_key(&id) {
            return Ok(None);
        }
        if self.name_taken(&contact.name, Some(id)) {
            return Err(ContactsError::Conflict(format!(
                "UNIQUE constraint failed: contact.name ({})",
                contact.name
            )));
        }

        let stored = self.assign_ids(id, contact);
        self.contacts.lock().unwrap().insert(id, stored.clone());
        Ok(Some(stored))
    }

    async fn delete_by_id(&self, id: i64) -> ContactsResult<()> {
        self.track_call("delete_by_id");
        self.contacts.lock().unwrap().remove(&id);
        Ok(())
    }
}
