//! Request handlers for the REST endpoints.
//!
//! Handlers decode the request, run boundary checks (validation first,
//! then parent existence) and delegate to the services in [`AppState`].

pub mod contacts;
pub mod emails;
pub mod images;
pub mod phone_numbers;
pub mod transfer;

use crate::error::{ContactsError, ContactsResult};
use crate::models::Contact;
use crate::observability::MetricsSummary;
use crate::server::AppState;
use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub metrics: MetricsSummary,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        metrics: state.metrics.summary(),
    })
}

/// Unwrap a JSON body, reporting decode failures as a bad request.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ContactsResult<T> {
    payload.map(|Json(value)| value).map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected request body");
        ContactsError::InvalidRequest(rejection.body_text())
    })
}

/// Look up the contact a nested route refers to.
pub(crate) async fn require_contact(state: &AppState, contact_id: i64) -> ContactsResult<Contact> {
    state
        .contacts
        .get_by_id(contact_id)
        .await?
        .ok_or_else(|| ContactsError::not_found("Contact", contact_id))
}

/// One file part of a multipart request.
#[derive(Debug)]
pub(crate) struct UploadedFile {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

/// Read the first multipart part called `name`, skipping any others.
pub(crate) async fn read_file_field(
    multipart: &mut Multipart,
    name: &str,
) -> ContactsResult<UploadedFile> {
    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some(name) {
            continue;
        }
        let file_name = field.file_name().map(str::to_owned);
        let bytes = field.bytes().await.map_err(upload_error)?;
        return Ok(UploadedFile { file_name, bytes });
    }

    warn!(field = name, "Multipart field missing");
    Err(ContactsError::InvalidUpload(format!(
        "Missing multipart field '{}'",
        name
    )))
}

fn upload_error(err: MultipartError) -> ContactsError {
    ContactsError::InvalidUpload(err.body_text())
}
