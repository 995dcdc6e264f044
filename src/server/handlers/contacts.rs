use super::{json_body, require_contact};
use crate::error::ContactsResult;
use crate::models::Contact;
use crate::server::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Contact>, JsonRejection>,
) -> ContactsResult<(StatusCode, Json<Contact>)> {
    let contact = json_body(payload)?;
    let created = state.contacts.create(contact).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(State(state): State<AppState>) -> ContactsResult<Json<Vec<Contact>>> {
    Ok(Json(state.contacts.list().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ContactsResult<Json<Contact>> {
    Ok(Json(require_contact(&state, id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<Contact>, JsonRejection>,
) -> ContactsResult<Json<Contact>> {
    let patch = json_body(payload)?;
    Ok(Json(state.contacts.update(id, patch).await?))
}

/// Deletes the contact together with its emails and phone numbers.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ContactsResult<StatusCode> {
    require_contact(&state, id).await?;
    state.contacts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
