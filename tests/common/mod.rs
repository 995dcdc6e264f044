//! Shared setup for the integration tests.
//!
//! Every helper builds on a private in-memory SQLite store, so tests never
//! share state.

#![allow(dead_code)]

use phone_contacts::services::{
    ContactService, ContactServiceImpl, EmailService, EmailServiceImpl, PhoneNumberService,
    PhoneNumberServiceImpl,
};
use phone_contacts::{build_router, AppState, SqliteStore};
use std::path::Path;
use std::sync::Arc;

pub mod fixtures;

/// Body limit used by test routers.
pub const TEST_MAX_BODY_BYTES: usize = 1024 * 1024;

/// The three lifecycle managers over one fresh store.
pub struct Services {
    pub store: SqliteStore,
    pub contacts: Arc<dyn ContactService>,
    pub emails: Arc<dyn EmailService>,
    pub phone_numbers: Arc<dyn PhoneNumberService>,
}

pub fn setup_services() -> Services {
    let store = SqliteStore::open_in_memory().expect("in-memory store should open");
    Services {
        contacts: Arc::new(ContactServiceImpl::new(Arc::new(store.contacts()))),
        emails: Arc::new(EmailServiceImpl::new(Arc::new(store.emails()))),
        phone_numbers: Arc::new(PhoneNumberServiceImpl::new(Arc::new(store.phone_numbers()))),
        store,
    }
}

/// Router over a fresh store, writing images below `upload_dir`.
pub fn setup_router(upload_dir: &Path) -> axum::Router {
    let store = SqliteStore::open_in_memory().expect("in-memory store should open");
    build_router(AppState::from_store(&store, upload_dir), TEST_MAX_BODY_BYTES)
}
