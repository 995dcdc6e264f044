use super::{email_repository, phone_number_repository, SqliteStore};
use crate::error::{ContactsError, ContactsResult};
use crate::models::{Contact, Email, PhoneNumber};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::HashSet;
use tracing::debug;

/// Contact repository backed by the `contact` table.
///
/// Children are written in the same transaction as their contact, and a
/// contact delete removes its children explicitly before the parent row.
pub struct SqliteContactRepository {
    store: SqliteStore,
}

impl SqliteContactRepository {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }
}

fn row_to_contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        emails: Vec::new(),
        phone_numbers: Vec::new(),
        image: row.get("image")?,
    })
}

fn with_children(conn: &Connection, mut contact: Contact) -> rusqlite::Result<Contact> {
    if let Some(id) = contact.id {
        contact.emails = email_repository::select_for_contact(conn, id)?;
        contact.phone_numbers = phone_number_repository::select_for_contact(conn, id)?;
    }
    Ok(contact)
}

fn select_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Contact>> {
    let contact = conn
        .query_row(
            "SELECT id, name, image FROM contact WHERE id = ?1",
            params![id],
            row_to_contact,
        )
        .optional()?;
    contact.map(|c| with_children(conn, c)).transpose()
}

fn child_ids(conn: &Connection, table: &str, contact_id: i64) -> rusqlite::Result<HashSet<i64>> {
    let sql = format!("SELECT id FROM {} WHERE contact_id = ?1", table);
    let mut stmt = conn.prepare(&sql)?;
    let ids = stmt
        .query_map(params![contact_id], |row| row.get(0))?
        .collect::<rusqlite::Result<HashSet<i64>>>()?;
    Ok(ids)
}

/// Replace the email set of `contact_id`.
///
/// An incoming id survives only if it already belonged to this contact, and
/// only once; everything else gets a fresh id.
fn replace_emails(conn: &Connection, contact_id: i64, emails: &[Email]) -> rusqlite::Result<()> {
    let mut reusable = child_ids(conn, "email", contact_id)?;
    conn.execute("DELETE FROM email WHERE contact_id = ?1", params![contact_id])?;
    for email in emails {
        let id = email.id.filter(|id| reusable.remove(id));
        email_repository::insert_row(conn, id, &email.address, contact_id)?;
    }
    Ok(())
}

fn replace_phone_numbers(
    conn: &Connection,
    contact_id: i64,
    phones: &[PhoneNumber],
) -> rusqlite::Result<()> {
    let mut reusable = child_ids(conn, "phone_number", contact_id)?;
    conn.execute(
        "DELETE FROM phone_number WHERE contact_id = ?1",
        params![contact_id],
    )?;
    for phone in phones {
        let id = phone.id.filter(|id| reusable.remove(id));
        phone_number_repository::insert_row(conn, id, &phone.number, contact_id)?;
    }
    Ok(())
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn find_by_id(&self, id: i64) -> ContactsResult<Option<Contact>> {
        self.store.run(move |conn| Ok(select_by_id(conn, id)?)).await
    }

    async fn find_by_name(&self, name: &str) -> ContactsResult<Option<Contact>> {
        let name = name.to_string();

        self.store
            .run(move |conn| {
                let contact = conn
                    .query_row(
                        "SELECT id, name, image FROM contact WHERE name = ?1",
                        params![name],
                        row_to_contact,
                    )
                    .optional()?;
                Ok(contact.map(|c| with_children(conn, c)).transpose()?)
            })
            .await
    }

    async fn find_all(&self) -> ContactsResult<Vec<Contact>> {
        self.store
            .run(|conn| {
                let mut stmt = conn.prepare_cached("SELECT id, name, image FROM contact ORDER BY id")?;
                let contacts = stmt
                    .query_map([], row_to_contact)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                let contacts = contacts
                    .into_iter()
                    .map(|c| with_children(conn, c))
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(contacts)
            })
            .await
    }

    async fn insert(&self, contact: &Contact) -> ContactsResult<Contact> {
        let contact = contact.clone();

        self.store
            .run(move |conn| {
                let tx = conn.transaction()?;
                tx.execute(
                    "INSERT INTO contact (name, image) VALUES (?1, ?2)",
                    params![contact.name, contact.image],
                )?;
                let id = tx.last_insert_rowid();
                for email in &contact.emails {
                    email_repository::insert_row(&tx, None, &email.address, id)?;
                }
                for phone in &contact.phone_numbers {
                    phone_number_repository::insert_row(&tx, None, &phone.number, id)?;
                }
                let stored = select_by_id(&tx, id)?.ok_or_else(|| {
                    ContactsError::Storage(format!("Contact {} missing after insert", id))
                })?;
                tx.commit()?;
                debug!(contact_id = id, "Contact row inserted");
                Ok(stored)
            })
            .await
    }

    async fn update(&self, id: i64, contact: &Contact) -> ContactsResult<Option<Contact>> {
        let contact = contact.clone();

        self.store
            .run(move |conn| {
                let tx = conn.transaction()?;
                let changed = tx.execute(
                    "UPDATE contact SET name = ?1, image = ?2 WHERE id = ?3",
                    params![contact.name, contact.image, id],
                )?;
                if changed == 0 {
                    // Dropping the transaction rolls back; nothing was written.
                    return Ok(None);
                }
                replace_emails(&tx, id, &contact.emails)?;
                replace_phone_numbers(&tx, id, &contact.phone_numbers)?;
                let stored = select_by_id(&tx, id)?;
                tx.commit()?;
                debug!(contact_id = id, "Contact row updated");
                Ok(stored)
            })
            .await
    }

    async fn delete_by_id(&self, id: i64) -> ContactsResult<()> {
        self.store
            .run(move |conn| {
                let tx = conn.transaction()?;
                let emails = tx.execute("DELETE FROM email WHERE contact_id = ?1", params![id])?;
                let phones =
                    tx.execute("DELETE FROM phone_number WHERE contact_id = ?1", params![id])?;
                tx.execute("DELETE FROM contact WHERE id = ?1", params![id])?;
                tx.commit()?;
                debug!(
                    contact_id = id,
                    emails_deleted = emails,
                    phone_numbers_deleted = phones,
                    "Contact row deleted"
                );
                Ok(())
            })
            .await
    }
}
