//! Email endpoints nested under a contact.
//!
//! The owning contact always comes from the path; a `contactId` in the
//! body is overwritten.

use super::{json_body, require_contact};
use crate::domain::validate_email;
use crate::error::{ContactsError, ContactsResult};
use crate::models::Email;
use crate::server::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub async fn list(
    State(state): State<AppState>,
    Path(contact_id): Path<i64>,
) -> ContactsResult<Json<Vec<Email>>> {
    require_contact(&state, contact_id).await?;
    Ok(Json(state.emails.list_for_contact(contact_id).await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path((contact_id, id)): Path<(i64, i64)>,
) -> ContactsResult<Json<Email>> {
    Ok(Json(owned_email(&state, contact_id, id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Path(contact_id): Path<i64>,
    payload: Result<Json<Email>, JsonRejection>,
) -> ContactsResult<(StatusCode, Json<Email>)> {
    let mut email = json_body(payload)?;
    email.id = None;
    email.contact_id = Some(contact_id);
    validate_email(&email)?;

    require_contact(&state, contact_id).await?;
    let created = state.emails.create(email).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path((contact_id, id)): Path<(i64, i64)>,
    payload: Result<Json<Email>, JsonRejection>,
) -> ContactsResult<Json<Email>> {
    let mut email = json_body(payload)?;
    email.contact_id = Some(contact_id);
    validate_email(&email)?;

    require_contact(&state, contact_id).await?;
    state
        .emails
        .update(id, email)
        .await?
        .map(Json)
        .ok_or_else(|| ContactsError::not_found("Email", id))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((contact_id, id)): Path<(i64, i64)>,
) -> ContactsResult<StatusCode> {
    owned_email(&state, contact_id, id).await?;
    state.emails.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// An email is only visible through the contact that owns it.
async fn owned_email(state: &AppState, contact_id: i64, id: i64) -> ContactsResult<Email> {
    state
        .emails
        .get_by_id(id)
        .await?
        .filter(|email| email.contact_id == Some(contact_id))
        .ok_or_else(|| ContactsError::not_found("Email", id))
}
