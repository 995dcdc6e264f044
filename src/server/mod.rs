//! HTTP server for the contacts API.
//!
//! This module wires the services into an axum [`Router`] and runs it until
//! Ctrl-C is received.

mod error;
pub mod handlers;

pub use error::ErrorBody;

use crate::observability::{MetricsTracker, Timer};
use crate::repositories::{
    ContactRepository, EmailRepository, PhoneNumberRepository, SqliteStore,
};
use crate::services::{
    ContactService, ContactServiceImpl, EmailService, EmailServiceImpl, ImageService,
    PhoneNumberService, PhoneNumberServiceImpl, TransferService,
};
use anyhow::Result;
use axum::extract::{DefaultBodyLimit, Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use handlers::{contacts, emails, images, phone_numbers, transfer};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactService>,
    pub emails: Arc<dyn EmailService>,
    pub phone_numbers: Arc<dyn PhoneNumberService>,
    pub images: Arc<ImageService>,
    pub transfer: Arc<TransferService>,
    pub metrics: MetricsTracker,
}

impl AppState {
    /// Build the service graph on top of the given repositories.
    pub fn new(
        contact_repo: Arc<dyn ContactRepository>,
        email_repo: Arc<dyn EmailRepository>,
        phone_repo: Arc<dyn PhoneNumberRepository>,
        upload_dir: impl Into<PathBuf>,
    ) -> Self {
        let contacts =
            Arc::new(ContactServiceImpl::new(contact_repo)) as Arc<dyn ContactService>;
        let emails = Arc::new(EmailServiceImpl::new(email_repo)) as Arc<dyn EmailService>;
        let phone_numbers =
            Arc::new(PhoneNumberServiceImpl::new(phone_repo)) as Arc<dyn PhoneNumberService>;

        Self {
            images: Arc::new(ImageService::new(contacts.clone(), upload_dir)),
            transfer: Arc::new(TransferService::new(contacts.clone())),
            contacts,
            emails,
            phone_numbers,
            metrics: MetricsTracker::new(),
        }
    }

    /// Build the service graph over a SQLite store.
    pub fn from_store(store: &SqliteStore, upload_dir: impl Into<PathBuf>) -> Self {
        Self::new(
            Arc::new(store.contacts()),
            Arc::new(store.emails()),
            Arc::new(store.phone_numbers()),
            upload_dir,
        )
    }
}

/// Build the API router.
///
/// Request bodies larger than `max_body_bytes` are rejected before they
/// reach a handler.
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    let metrics = state.metrics.clone();

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/contacts", get(contacts::list).post(contacts::create))
        .route("/api/contacts/export", get(transfer::export))
        .route("/api/contacts/import", post(transfer::import))
        .route(
            "/api/contacts/:id",
            get(contacts::get)
                .put(contacts::update)
                .delete(contacts::delete),
        )
        .route("/api/contacts/:id/image", get(images::get_image))
        .route("/api/contacts/:id/image/upload", post(images::upload))
        .route(
            "/api/contacts/:id/emails",
            get(emails::list).post(emails::create),
        )
        .route(
            "/api/contacts/:id/emails/:child_id",
            get(emails::get).put(emails::update).delete(emails::delete),
        )
        .route(
            "/api/contacts/:id/phoneNumbers",
            get(phone_numbers::list).post(phone_numbers::create),
        )
        .route(
            "/api/contacts/:id/phoneNumbers/:child_id",
            get(phone_numbers::get)
                .put(phone_numbers::update)
                .delete(phone_numbers::delete),
        )
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(middleware::from_fn_with_state(metrics, track_metrics))
        .with_state(state)
}

async fn track_metrics(
    State(metrics): State<MetricsTracker>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let timer = Timer::start();

    let response = next.run(request).await;

    metrics.track_request(
        method.as_str(),
        &path,
        response.status().as_u16(),
        timer.elapsed_ms(),
    );
    response
}

/// Serve `router` on `addr` until Ctrl-C.
pub async fn run_server(router: Router, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Contacts API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
