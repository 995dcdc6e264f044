//! SQLite storage adapter.
//!
//! A single `rusqlite::Connection` is shared behind a mutex. Every
//! repository call runs on `tokio::task::spawn_blocking` so the async
//! runtime never blocks on disk I/O.

mod contact_repository;
mod email_repository;
mod phone_number_repository;

pub use contact_repository::SqliteContactRepository;
pub use email_repository::SqliteEmailRepository;
pub use phone_number_repository::SqlitePhoneNumberRepository;

use crate::error::{ContactsError, ContactsResult};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

const SCHEMA: &str = r#"
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS contact (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL UNIQUE,
    image TEXT
);

CREATE TABLE IF NOT EXISTS email (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    address    TEXT NOT NULL UNIQUE,
    contact_id INTEGER NOT NULL REFERENCES contact(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS phone_number (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    number     TEXT NOT NULL UNIQUE,
    contact_id INTEGER NOT NULL REFERENCES contact(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_email_contact ON email(contact_id);
CREATE INDEX IF NOT EXISTS idx_phone_number_contact ON phone_number(contact_id);
"#;

/// Handle to the contacts database. Cheap to clone.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) a database file and apply the schema.
    pub fn open(path: impl AsRef<Path>) -> ContactsResult<Self> {
        let path = path.as_ref();
        info!("Opening contacts database at {}", path.display());
        Self::from_connection(Connection::open(path)?)
    }

    /// Private in-memory database, used by tests and `:memory:` configs.
    pub fn open_in_memory() -> ContactsResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> ContactsResult<Self> {
        conn.execute_batch(SCHEMA)?;
        debug!("Contacts schema applied");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn contacts(&self) -> SqliteContactRepository {
        SqliteContactRepository::new(self.clone())
    }

    pub fn emails(&self) -> SqliteEmailRepository {
        SqliteEmailRepository::new(self.clone())
    }

    pub fn phone_numbers(&self) -> SqlitePhoneNumberRepository {
        SqlitePhoneNumberRepository::new(self.clone())
    }

    /// Run `op` against the connection on the blocking thread pool.
    pub(crate) async fn run<T, F>(&self, op: F) -> ContactsResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> ContactsResult<T> + Send + 'static,
    {
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| ContactsError::Storage("connection lock poisoned".to_string()))?;
            op(&mut guard)
        })
        .await
        .map_err(|e| ContactsError::Storage(format!("Task join error: {}", e)))?
    }
}
