//! Phone Contacts - a REST backend for contacts with owned email addresses
//! and phone numbers.
//!
//! Contacts are stored in SQLite together with their emails and phone
//! numbers. The API supports CRUD on all three entities, bulk JSON
//! import/export and per-contact image upload.
//!
//! # Architecture
//!
//! - **domain**: Value objects and field validation rules
//! - **models**: Contact, Email and PhoneNumber records
//! - **error**: Error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Storage traits and the SQLite adapter
//! - **services**: Lifecycle managers, bulk transfer and image storage
//! - **observability**: Request metrics
//! - **server**: axum router and request handlers

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, ContactsError, ContactsResult};
pub use models::{Contact, Email, PhoneNumber};
pub use observability::{MetricsSummary, MetricsTracker};
pub use repositories::SqliteStore;
pub use server::{build_router, run_server, AppState};
pub use services::{
    ContactService, EmailService, ImageService, ImportSummary, PhoneNumberService,
    TransferService,
};
