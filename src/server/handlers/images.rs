use super::read_file_field;
use crate::error::ContactsResult;
use crate::server::AppState;
use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Multipart part carrying the image bytes.
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadResponse {
    pub contact_id: i64,
    /// Stored path, or `null` when an empty upload was ignored.
    pub image: Option<String>,
}

pub async fn upload(
    State(state): State<AppState>,
    Path(contact_id): Path<i64>,
    mut multipart: Multipart,
) -> ContactsResult<Json<ImageUploadResponse>> {
    let file = read_file_field(&mut multipart, IMAGE_FIELD).await?;
    let image = state
        .images
        .upload(contact_id, &file.bytes, file.file_name.as_deref())
        .await?;
    Ok(Json(ImageUploadResponse { contact_id, image }))
}

pub async fn get_image(
    State(state): State<AppState>,
    Path(contact_id): Path<i64>,
) -> ContactsResult<Response> {
    let image = state.images.get_image(contact_id).await?;
    Ok(([(header::CONTENT_TYPE, image.content_type)], image.bytes).into_response())
}
