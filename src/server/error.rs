//! HTTP mapping for [`ContactsError`].

use crate::error::ContactsError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    pub details: Vec<Value>,
}

impl ContactsError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidRequest(_) | Self::InvalidUpload(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::ImportAborted { .. } | Self::Json(_) | Self::Io(_) | Self::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Short machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::InvalidRequest(_) => "invalid_request",
            Self::InvalidUpload(_) => "invalid_upload",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::ImportAborted { .. } => "import_aborted",
            Self::Json(_) => "json",
            Self::Io(_) => "io",
            Self::Storage(_) => "storage",
        }
    }

    fn details(&self) -> Vec<Value> {
        match self {
            Self::Validation(errors) => errors
                .iter()
                .map(|e| json!({ "field": e.field(), "message": e.to_string() }))
                .collect(),
            Self::ImportAborted {
                position,
                created,
                source,
            } => vec![json!({
                "position": position,
                "created": created,
                "cause": source.kind(),
            })],
            _ => Vec::new(),
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.kind(),
            message: self.to_string(),
            details: self.details(),
        }
    }
}

impl IntoResponse for ContactsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(kind = self.kind(), error = %self, "Request failed");
        }
        (status, Json(self.to_body())).into_response()
    }
}
