//! Route handlers.

use super::page::INDEX_HTML;
use super::AppState;
use axum::extract::multipart::{Field, MultipartError};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use economind_core::{AnalysisOutput, ImageSource};
use serde_json::json;
use std::sync::Arc;

/// A request the analyzer never saw, rejected with a JSON error body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        tracing::warn!("Rejected multipart upload: {err}");
        Self {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Serve the upload page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "version": economind_core::VERSION }))
}

/// Form fields of one analysis request.
#[derive(Default)]
struct AnalyzeForm {
    api_key: String,
    prompt: Option<String>,
    image: Option<Vec<u8>>,
}

impl AnalyzeForm {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = AnalyzeForm::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("api_key") => form.api_key = field.text().await?,
                Some("prompt") => form.prompt = Some(field.text().await?),
                Some("image") => form.image = read_image(field).await?,
                other => tracing::debug!("Ignoring form field {other:?}"),
            }
        }
        Ok(form)
    }
}

async fn read_image(field: Field<'_>) -> Result<Option<Vec<u8>>, ApiError> {
    let file_name = field.file_name().map(str::to_string);
    let bytes = field.bytes().await?;
    if bytes.is_empty() {
        return Ok(None);
    }
    tracing::debug!(file_name = ?file_name, size = bytes.len(), "Received image upload");
    Ok(Some(bytes.to_vec()))
}

/// Run the pipeline on an uploaded image.
///
/// Pipeline failures (bad key, model errors, off-topic images) are part of
/// the `200` payload; only malformed requests get an error status.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<AnalysisOutput>, ApiError> {
    let form = AnalyzeForm::read(multipart).await?;
    let Some(image) = form.image else {
        return Err(ApiError::bad_request("Please upload an image."));
    };

    let output = state
        .analyzer
        .analyze(&form.api_key, &ImageSource::Bytes(image), form.prompt.as_deref())
        .await;

    tracing::info!(status = ?output.status, "Analysis finished");
    Ok(Json(output))
}
