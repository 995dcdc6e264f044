use super::SqliteStore;
use crate::error::{ContactsError, ContactsResult};
use crate::models::Email;
use crate::repositories::traits::EmailRepository;
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Email repository backed by the `email` table.
pub struct SqliteEmailRepository {
    store: SqliteStore,
}

impl SqliteEmailRepository {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }
}

fn row_to_email(row: &Row<'_>) -> rusqlite::Result<Email> {
    Ok(Email {
        id: Some(row.get("id")?),
        address: row.get("address")?,
        contact_id: Some(row.get("contact_id")?),
    })
}

fn select_one(conn: &Connection, id: i64) -> rusqlite::Result<Option<Email>> {
    conn.query_row(
        "SELECT id, address, contact_id FROM email WHERE id = ?1",
        params![id],
        row_to_email,
    )
    .optional()
}

/// Emails owned by `contact_id`, in insertion order.
pub(super) fn select_for_contact(conn: &Connection, contact_id: i64) -> rusqlite::Result<Vec<Email>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, address, contact_id FROM email WHERE contact_id = ?1 ORDER BY id",
    )?;
    let emails = stmt
        .query_map(params![contact_id], row_to_email)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(emails)
}

/// Insert one row. `id` is only passed when an existing row is being
/// re-inserted during a contact update; `None` lets SQLite assign one.
pub(super) fn insert_row(
    conn: &Connection,
    id: Option<i64>,
    address: &str,
    contact_id: i64,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO email (id, address, contact_id) VALUES (?1, ?2, ?3)",
        params![id, address, contact_id],
    )?;
    Ok(conn.last_insert_rowid())
}

fn require_owner(email: &Email) -> ContactsResult<i64> {
    email.contact_id.ok_or_else(|| {
        ContactsError::Validation(crate::domain::ValidationError::MissingOwner.into())
    })
}

#[async_trait]
impl EmailRepository for SqliteEmailRepository {
    async fn find_by_id(&self, id: i64) -> ContactsResult<Option<Email>> {
        self.store.run(move |conn| Ok(select_one(conn, id)?)).await
    }

    async fn find_by_address_and_contact(
        &self,
        address: &str,
        contact_id: i64,
    ) -> ContactsResult<Option<Email>> {
        let address = address.to_string();

        self.store
            .run(move |conn| {
                Ok(conn
                    .query_row(
                        "SELECT id, address, contact_id FROM email \
                         WHERE address = ?1 AND contact_id = ?2",
                        params![address, contact_id],
                        row_to_email,
                    )
                    .optional()?)
            })
            .await
    }

    async fn find_all(&self) -> ContactsResult<Vec<Email>> {
        self.store
            .run(|conn| {
                let mut stmt =
                    conn.prepare_cached("SELECT id, address, contact_id FROM email ORDER BY id")?;
                let emails = stmt
                    .query_map([], row_to_email)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(emails)
            })
            .await
    }

    async fn find_by_contact(&self, contact_id: i64) -> ContactsResult<Vec<Email>> {
        self.store
            .run(move |conn| Ok(select_for_contact(conn, contact_id)?))
            .await
    }

    async fn insert(&self, email: &Email) -> ContactsResult<Email> {
        let contact_id = require_owner(email)?;
        let address = email.address.clone();

        self.store
            .run(move |conn| {
                let id = insert_row(conn, None, &address, contact_id)?;
                Ok(Email {
                    id: Some(id),
                    address,
                    contact_id: Some(contact_id),
                })
            })
            .await
    }

    async fn update(&self, id: i64, email: &Email) -> ContactsResult<Option<Email>> {
        let contact_id = require_owner(email)?;
        let address = email.address.clone();

        self.store
            .run(move |conn| {
                let changed = conn.execute(
                    "UPDATE email SET address = ?1, contact_id = ?2 WHERE id = ?3",
                    params![address, contact_id, id],
                )?;
                if changed == 0 {
                    return Ok(None);
                }
                Ok(Some(Email {
                    id: Some(id),
                    address,
                    contact_id: Some(contact_id),
                }))
            })
            .await
    }

    async fn delete_by_id(&self, id: i64) -> ContactsResult<()> {
        self.store
            .run(move |conn| {
                conn.execute("DELETE FROM email WHERE id = ?1", params![id])?;
                Ok(())
            })
            .await
    }
}
