use super::{json_body, require_contact};
use crate::domain::validate_phone_number;
use crate::error::{ContactsError, ContactsResult};
use crate::models::PhoneNumber;
use crate::server::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub async fn list(
    State(state): State<AppState>,
    Path(contact_id): Path<i64>,
) -> ContactsResult<Json<Vec<PhoneNumber>>> {
    require_contact(&state, contact_id).await?;
    Ok(Json(state.phone_numbers.list_for_contact(contact_id).await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path((contact_id, id)): Path<(i64, i64)>,
) -> ContactsResult<Json<PhoneNumber>> {
    Ok(Json(owned_phone_number(&state, contact_id, id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Path(contact_id): Path<i64>,
    payload: Result<Json<PhoneNumber>, JsonRejection>,
) -> ContactsResult<(StatusCode, Json<PhoneNumber>)> {
    let mut phone = json_body(payload)?;
    phone.id = None;
    phone.contact_id = Some(contact_id);
    validate_phone_number(&phone)?;

    require_contact(&state, contact_id).await?;
    let created = state.phone_numbers.create(phone).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path((contact_id, id)): Path<(i64, i64)>,
    payload: Result<Json<PhoneNumber>, JsonRejection>,
) -> ContactsResult<Json<PhoneNumber>> {
    let mut phone = json_body(payload)?;
    phone.contact_id = Some(contact_id);
    validate_phone_number(&phone)?;

    require_contact(&state, contact_id).await?;
    state
        .phone_numbers
        .update(id, phone)
        .await?
        .map(Json)
        .ok_or_else(|| ContactsError::not_found("Phone number", id))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((contact_id, id)): Path<(i64, i64)>,
) -> ContactsResult<StatusCode> {
    owned_phone_number(&state, contact_id, id).await?;
    state.phone_numbers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn owned_phone_number(
    state: &AppState,
    contact_id: i64,
    id: i64,
) -> ContactsResult<PhoneNumber> {
    state
        .phone_numbers
        .get_by_id(id)
        .await?
        .filter(|phone| phone.contact_id == Some(contact_id))
        .ok_or_else(|| ContactsError::not_found("Phone number", id))
}
