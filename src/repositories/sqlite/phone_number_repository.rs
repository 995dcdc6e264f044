use super::SqliteStore;
use crate::domain::ValidationError;
use crate::error::{ContactsError, ContactsResult};
use crate::models::PhoneNumber;
use crate::repositories::traits::PhoneNumberRepository;
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Phone number repository backed by the `phone_number` table.
pub struct SqlitePhoneNumberRepository {
    store: SqliteStore,
}

impl SqlitePhoneNumberRepository {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }
}

fn row_to_phone(row: &Row<'_>) -> rusqlite::Result<PhoneNumber> {
    Ok(PhoneNumber {
        id: Some(row.get("id")?),
        number: row.get("number")?,
        contact_id: Some(row.get("contact_id")?),
    })
}

pub(super) fn select_for_contact(
    conn: &Connection,
    contact_id: i64,
) -> rusqlite::Result<Vec<PhoneNumber>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, number, contact_id FROM phone_number WHERE contact_id = ?1 ORDER BY id",
    )?;
    let phones = stmt
        .query_map(params![contact_id], row_to_phone)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(phones)
}

pub(super) fn insert_row(
    conn: &Connection,
    id: Option<i64>,
    number: &str,
    contact_id: i64,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO phone_number (id, number, contact_id) VALUES (?1, ?2, ?3)",
        params![id, number, contact_id],
    )?;
    Ok(conn.last_insert_rowid())
}

fn require_owner(phone: &PhoneNumber) -> ContactsResult<i64> {
    phone
        .contact_id
        .ok_or_else(|| ContactsError::Validation(ValidationError::MissingOwner.into()))
}

#[async_trait]
impl PhoneNumberRepository for SqlitePhoneNumberRepository {
    async fn find_by_id(&self, id: i64) -> ContactsResult<Option<PhoneNumber>> {
        self.store
            .run(move |conn| {
                Ok(conn
                    .query_row(
                        "SELECT id, number, contact_id FROM phone_number WHERE id = ?1",
                        params![id],
                        row_to_phone,
                    )
                    .optional()?)
            })
            .await
    }

    async fn find_by_number_and_contact(
        &self,
        number: &str,
        contact_id: i64,
    ) -> ContactsResult<Option<PhoneNumber>> {
        let number = number.to_string();

        self.store
            .run(move |conn| {
                Ok(conn
                    .query_row(
                        "SELECT id, number, contact_id FROM phone_number \
                         WHERE number = ?1 AND contact_id = ?2",
                        params![number, contact_id],
                        row_to_phone,
                    )
                    .optional()?)
            })
            .await
    }

    async fn find_all(&self) -> ContactsResult<Vec<PhoneNumber>> {
        self.store
            .run(|conn| {
                let mut stmt = conn
                    .prepare_cached("SELECT id, number, contact_id FROM phone_number ORDER BY id")?;
                let phones = stmt
                    .query_map([], row_to_phone)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(phones)
            })
            .await
    }

    async fn find_by_contact(&self, contact_id: i64) -> ContactsResult<Vec<PhoneNumber>> {
        self.store
            .run(move |conn| Ok(select_for_contact(conn, contact_id)?))
            .await
    }

    async fn insert(&self, phone: &PhoneNumber) -> ContactsResult<PhoneNumber> {
        let contact_id = require_owner(phone)?;
        let number = phone.number.clone();

        self.store
            .run(move |conn| {
                let id = insert_row(conn, None, &number, contact_id)?;
                Ok(PhoneNumber {
                    id: Some(id),
                    number,
                    contact_id: Some(contact_id),
                })
            })
            .await
    }

    async fn update(&self, id: i64, phone: &PhoneNumber) -> ContactsResult<Option<PhoneNumber>> {
        let contact_id = require_owner(phone)?;
        let number = phone.number.clone();

        self.store
            .run(move |conn| {
                let changed = conn.execute(
                    "UPDATE phone_number SET number = ?1, contact_id = ?2 WHERE id = ?3",
                    params![number, contact_id, id],
                )?;
                Ok((changed > 0).then(|| PhoneNumber {
                    id: Some(id),
                    number,
                    contact_id: Some(contact_id),
                }))
            })
            .await
    }

    async fn delete_by_id(&self, id: i64) -> ContactsResult<()> {
        self.store
            .run(move |conn| {
                conn.execute("DELETE FROM phone_number WHERE id = ?1", params![id])?;
                Ok(())
            })
            .await
    }
}
