//! HTTP request handlers for API endpoints

use axum::{
    http::{header, header::InvalidHeaderValue, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use sow_document::{generate, SowRequest, DOCX_CONTENT_TYPE};
use tracing::{error, info, warn};

use crate::types::HealthResponse;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `Content-Disposition` value for a download. The filename is not escaped.
pub fn content_disposition(filename: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_bytes(format!("attachment; filename=\"{filename}\"").as_bytes())
}

/// Render a Statement of Work as a DOCX download
///
/// Bodies that do not match [`SowRequest`] are rejected by the `Json`
/// extractor before this runs (422 for missing fields or wrong types).
pub async fn generate_sow(Json(request): Json<SowRequest>) -> Result<Response, (StatusCode, String)> {
    info!(
        "SOW generation request: title={:?}, sections={}",
        request.title,
        request.section_count()
    );

    let sow = generate(&request).map_err(|e| {
        error!("Failed to render SOW {:?}: {}", request.title, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to render document: {e}"),
        )
    })?;

    let disposition = content_disposition(&sow.filename).map_err(|e| {
        warn!("Title {:?} cannot be used in a filename header: {}", request.title, e);
        (
            StatusCode::BAD_REQUEST,
            "Title contains characters that cannot be used in a filename header".to_string(),
        )
    })?;

    info!(
        "Generated {} ({} blocks, {} bytes)",
        sow.filename,
        sow.block_count,
        sow.bytes.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(DOCX_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        sow.bytes,
    )
        .into_response())
}
