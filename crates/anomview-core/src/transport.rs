//! Interpretation of service responses.
//!
//! The browser performs the requests; these functions decide what a
//! `(status, body)` pair means. A network failure is reported with
//! [`upload_network_failure`] / [`results_network_failure`].

use serde::Deserialize;
use serde_json::Value;

use crate::error::{AnomviewError, Result};
use crate::models::{AlgorithmChoice, FileIdentifier};
use crate::payload::{error_message, ResultPayload};

pub const UPLOAD_FALLBACK: &str = "There was a problem uploading the file.";
pub const UPLOAD_REJECTED: &str = "File upload failed. Please try again.";
pub const RESULTS_FALLBACK: &str = "Failed to fetch results.";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    filename: Option<String>,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Read the answer to `POST /upload`.
pub fn interpret_upload(status: u16, body: &str) -> Result<FileIdentifier> {
    let value: Option<Value> = serde_json::from_str(body).ok();

    if !is_success(status) {
        let message = value
            .as_ref()
            .and_then(error_message)
            .unwrap_or_else(|| UPLOAD_FALLBACK.to_string());
        tracing::warn!(status, %message, "upload rejected");
        return Err(AnomviewError::upload(message));
    }

    let filename = value
        .clone()
        .and_then(|v| serde_json::from_value::<UploadResponse>(v).ok())
        .and_then(|r| r.filename)
        .filter(|f| !f.is_empty());
    match filename {
        Some(id) => Ok(FileIdentifier::new(id)),
        None => {
            let message = value
                .as_ref()
                .and_then(error_message)
                .unwrap_or_else(|| UPLOAD_REJECTED.to_string());
            tracing::warn!(status, %message, "upload response without filename");
            Err(AnomviewError::upload(message))
        }
    }
}

pub fn upload_network_failure(cause: impl std::fmt::Display) -> AnomviewError {
    tracing::warn!(%cause, "upload request failed");
    AnomviewError::upload(UPLOAD_FALLBACK)
}

/// Read the answer to `GET /results/{id}`. The status only matters when
/// the body carries no `error` of its own.
pub fn interpret_results(
    algorithm: AlgorithmChoice,
    status: u16,
    body: &str,
) -> Result<ResultPayload> {
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(status, error = %e, "results body is not JSON");
            return Err(AnomviewError::results(RESULTS_FALLBACK));
        }
    };
    if let Some(message) = error_message(&value) {
        tracing::warn!(status, %message, "service reported an error");
        return Err(AnomviewError::results(message));
    }
    if !is_success(status) {
        tracing::warn!(status, "results request failed");
        return Err(AnomviewError::results(RESULTS_FALLBACK));
    }
    ResultPayload::from_value(algorithm, value).map_err(|e| match e {
        AnomviewError::Results { .. } => e,
        other => {
            tracing::warn!(error = %other, "results payload has an unexpected shape");
            AnomviewError::results(RESULTS_FALLBACK)
        }
    })
}

pub fn results_network_failure(cause: impl std::fmt::Display) -> AnomviewError {
    tracing::warn!(%cause, "results request failed");
    AnomviewError::results(RESULTS_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_success_yields_identifier() {
        let id = interpret_upload(200, r#"{"message":"ok","filename":"abc123"}"#).unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_upload_error_prefers_server_text() {
        let err = interpret_upload(400, r#"{"error":"Too large"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Too large");
    }

    #[test]
    fn test_upload_error_without_text_uses_fallback() {
        assert_eq!(
            interpret_upload(500, "<html>oops</html>").unwrap_err().to_string(),
            UPLOAD_FALLBACK
        );
        assert_eq!(interpret_upload(413, "{}").unwrap_err().to_string(), UPLOAD_FALLBACK);
        assert_eq!(upload_network_failure("offline").to_string(), UPLOAD_FALLBACK);
    }

    #[test]
    fn test_upload_success_without_filename() {
        assert_eq!(
            interpret_upload(200, r#"{"message":"ok"}"#).unwrap_err().to_string(),
            UPLOAD_REJECTED
        );
        assert_eq!(
            interpret_upload(200, r#"{"error":"Too large"}"#).unwrap_err().to_string(),
            "Too large"
        );
    }

    #[test]
    fn test_upload_accepts_any_2xx() {
        for status in [201, 204, 299] {
            let id = interpret_upload(status, r#"{"filename":"a.csv"}"#).unwrap();
            assert_eq!(id.as_str(), "a.csv");
        }
        assert!(interpret_upload(300, r#"{"filename":"a.csv"}"#).is_err());
    }

    #[test]
    fn test_results_domain_error_keeps_message() {
        for status in [200, 404, 500] {
            let err = interpret_results(AlgorithmChoice::KMeans, status, r#"{"error":"File not found"}"#)
                .unwrap_err();
            assert_eq!(err.to_string(), "File not found");
        }
    }

    #[test]
    fn test_results_failures_use_fallback() {
        let algo = AlgorithmChoice::OneClassSvm;
        assert_eq!(interpret_results(algo, 200, "nope").unwrap_err().to_string(), RESULTS_FALLBACK);
        assert_eq!(interpret_results(algo, 502, "{}").unwrap_err().to_string(), RESULTS_FALLBACK);
        assert_eq!(
            interpret_results(algo, 200, r#"{"scatter_chart_data":{"actual":"x"}}"#)
                .unwrap_err()
                .to_string(),
            RESULTS_FALLBACK
        );
        assert_eq!(results_network_failure("reset").to_string(), RESULTS_FALLBACK);
    }

    #[test]
    fn test_results_success() {
        let payload =
            interpret_results(AlgorithmChoice::KMeans, 200, r#"{"num_anomalies": 4}"#).unwrap();
        assert_eq!(payload.summary.num_anomalies, 4);
    }
}
