//! Embedded stylesheet and theme script.
//!
//! The files under `assets/` are compiled into the binary so the server is a
//! single executable.

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

/// Files served under `/assets/`.
#[derive(Embed)]
#[folder = "assets"]
#[include = "*.css"]
#[include = "*.js"]
pub struct StaticAssets;

/// GET /assets/{file}
pub async fn serve_asset(Path(file): Path<String>) -> Response {
    match StaticAssets::get(&file) {
        Some(content) => file_response(&file, content.data.as_ref()),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Creates an HTTP response for a file with appropriate content type.
fn file_response(path: &str, content: &[u8]) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache_control_for_path(path))
        .body(Body::from(content.to_vec()))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

/// Cache-Control per file type.
fn cache_control_for_path(path: &str) -> &'static str {
    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) if ext.eq_ignore_ascii_case("js") => "no-cache, must-revalidate",
        Some(ext) if ext.eq_ignore_ascii_case("css") => "public, max-age=3600",
        _ => "no-store",
    }
}

/// Lists all embedded asset paths.
#[must_use]
pub fn list_embedded_assets() -> Vec<String> {
    StaticAssets::iter().map(|s| s.to_string()).collect()
}
