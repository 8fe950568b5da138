//! The built client bundle, compiled into the binary.

use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

const INDEX: &str = "index.html";

#[derive(Embed)]
#[folder = "../../frontend/dist"]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.wasm"]
#[include = "*.css"]
struct ClientBundle;

/// Bundle files by path. Any other path belongs to the client router, which
/// also renders its own not-found screen, so it gets `index.html`.
pub async fn serve_client(uri: Uri) -> Response {
    let requested = uri.path().trim_start_matches('/');
    let (name, file) = match ClientBundle::get(requested) {
        Some(file) => (requested, file),
        None => match ClientBundle::get(INDEX) {
            Some(file) => (INDEX, file),
            None => {
                tracing::warn!("client bundle is missing {}", INDEX);
                return StatusCode::NOT_FOUND.into_response();
            }
        },
    };

    let mime = mime_guess::from_path(name).first_or_octet_stream();
    ([(header::CONTENT_TYPE, mime.to_string())], file.data).into_response()
}
