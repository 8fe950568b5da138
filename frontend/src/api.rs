//! Requests to the analysis service. The core crate decides what each
//! response means; this module only moves bytes.

use anomview_core::transport::{
    interpret_results, interpret_upload, results_network_failure, upload_network_failure,
};
use anomview_core::{AlgorithmChoice, AnomviewError, ApiConfig, FileIdentifier, ResultPayload};
use gloo_net::http::Request;

pub fn api_config() -> ApiConfig {
    ApiConfig::from_build_env(option_env!("ANOMVIEW_API_BASE"))
}

pub async fn upload(file: web_sys::File) -> Result<FileIdentifier, AnomviewError> {
    let form = web_sys::FormData::new().map_err(|e| upload_network_failure(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| upload_network_failure(format!("{:?}", e)))?;

    let resp = Request::post(&api_config().upload_url())
        .body(form)
        .map_err(upload_network_failure)?
        .send()
        .await
        .map_err(upload_network_failure)?;

    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    interpret_upload(status, &text).inspect_err(|e| log::error!("upload failed ({}): {}", status, e))
}

pub async fn fetch_results(
    file_id: FileIdentifier,
    algorithm: AlgorithmChoice,
) -> Result<ResultPayload, AnomviewError> {
    let url = api_config().results_url(&file_id, algorithm);
    log::debug!("fetching {}", url);

    let resp = Request::get(&url)
        .send()
        .await
        .map_err(results_network_failure)?;

    let status = resp.status();
    let text = resp.text().await.map_err(results_network_failure)?;
    interpret_results(algorithm, status, &text)
        .inspect_err(|e| log::error!("results for {} ({}) failed: {}", file_id, algorithm, e))
}
