use super::read_file_field;
use crate::error::ContactsResult;
use crate::server::AppState;
use crate::services::transfer::EXPORT_FILE_NAME;
use crate::services::ImportSummary;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Multipart part carrying the import document.
pub const IMPORT_FIELD: &str = "file";

/// Download every contact as a JSON attachment.
pub async fn export(State(state): State<AppState>) -> ContactsResult<Response> {
    let document = state.transfer.export().await?;
    let disposition = format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME);
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document,
    )
        .into_response())
}

pub async fn import(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ContactsResult<Json<ImportSummary>> {
    let file = read_file_field(&mut multipart, IMPORT_FIELD).await?;
    // Invalid UTF-8 is replaced and left for the JSON decoder to reject.
    let document = String::from_utf8_lossy(&file.bytes);
    Ok(Json(state.transfer.import(&document).await?))
}
