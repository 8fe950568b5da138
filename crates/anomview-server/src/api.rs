//! `/api/*`: relays between the browser and the analysis service.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, info, warn};

use anomview_core::gate::MAX_UPLOAD_BYTES;
use anomview_core::{GateError, Route};

use crate::state::AppState;

/// Largest upload body accepted: the file limit plus multipart framing.
pub const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES as usize + 64 * 1024;

pub const SERVICE_UNAVAILABLE: &str = "Analysis service unavailable.";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(forward_upload))
        .route("/results/{file_id}", get(forward_results))
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

fn too_large() -> Response {
    error_response(StatusCode::PAYLOAD_TOO_LARGE, &GateError::TooLarge.to_string())
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

/// Send the upstream request and hand its status, type and body back.
async fn relay(request: reqwest::RequestBuilder) -> Response {
    let upstream = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(error = %e, "analysis service unreachable");
            return error_response(StatusCode::BAD_GATEWAY, SERVICE_UNAVAILABLE);
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let body: Bytes = match upstream.bytes().await {
        Ok(b) => b,
        Err(e) => {
            warn!(error = %e, "analysis service response interrupted");
            return error_response(StatusCode::BAD_GATEWAY, SERVICE_UNAVAILABLE);
        }
    };
    debug!(%status, bytes = body.len(), "relaying upstream response");

    let mut builder = Response::builder().status(status);
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    builder
        .body(Body::from(body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

async fn forward_upload(State(state): State<AppState>, headers: HeaderMap, body: Body) -> Response {
    if declared_length(&headers).is_some_and(|n| n > UPLOAD_BODY_LIMIT) {
        return too_large();
    }
    let bytes = match axum::body::to_bytes(body, UPLOAD_BODY_LIMIT).await {
        Ok(b) => b,
        Err(e) => {
            debug!(error = %e, "upload body rejected");
            return too_large();
        }
    };

    info!(bytes = bytes.len(), "forwarding upload");
    let mut request = state
        .client
        .post(format!("{}/upload", state.service_url))
        .body(bytes);
    if let Some(ct) = headers.get(header::CONTENT_TYPE) {
        request = request.header(header::CONTENT_TYPE, ct.clone());
    }
    relay(request).await
}

/// `uri` is relative to the `/api` nest, so it already has the service's shape.
/// Only well-formed results routes go upstream, rebuilt from the parsed route.
async fn forward_results(State(state): State<AppState>, uri: Uri) -> Response {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let route = match Route::parse(path_and_query) {
        Ok(route @ Route::Results { .. }) => route,
        Ok(_) => return error_response(StatusCode::BAD_REQUEST, "Invalid results request."),
        Err(e) => {
            debug!(path_and_query, error = %e, "refusing results request");
            return error_response(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };
    if let Route::Results { file_id, algorithm } = &route {
        info!(%file_id, %algorithm, "forwarding results request");
    }

    relay(
        state
            .client
            .get(format!("{}{}", state.service_url, route.path())),
    )
    .await
}
