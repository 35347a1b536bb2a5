use contracts::usecases::u601_contract_review::{
    ReviewMode, SignUploadRequest, SignUploadResponse, StartAnalysisRequest,
    StartAnalysisResponse,
};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::File;

use crate::shared::api_utils::error_from_response;
use crate::shared::config::AppConfig;

/// Ask the signing service for a direct-upload URL
pub async fn sign_upload(
    config: &AppConfig,
    request: &SignUploadRequest,
) -> Result<SignUploadResponse, String> {
    let response = Request::post(&config.api_url("/api/uploads/sign"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<SignUploadResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// PUT the file body straight to storage
pub async fn put_file(upload_url: &str, file: &File) -> Result<(), String> {
    let content_type = file.type_();
    let response = Request::put(upload_url)
        .header("Content-Type", &content_type)
        .body(JsValue::from(file.clone()))
        .map_err(|e| format!("Failed to build upload request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to upload {}: {}", file.name(), e))?;

    if !response.ok() {
        return Err(format!(
            "Upload of {} failed: HTTP {}",
            file.name(),
            response.status()
        ));
    }
    Ok(())
}

pub async fn start_analysis(
    config: &AppConfig,
    request: &StartAnalysisRequest,
) -> Result<StartAnalysisResponse, String> {
    let response = Request::post(&config.api_url("/api/analysis"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<StartAnalysisResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Uploads every file through its own signed URL, then starts one analysis job over all of them
pub async fn submit_for_analysis(
    config: &AppConfig,
    mode: ReviewMode,
    files: &[File],
) -> Result<StartAnalysisResponse, String> {
    let mut object_keys = Vec::with_capacity(files.len());

    for file in files {
        let signed = sign_upload(
            config,
            &SignUploadRequest {
                file_name: file.name(),
                content_type: file.type_(),
                size_bytes: file.size() as u64,
            },
        )
        .await?;

        put_file(&signed.upload_url, file).await?;
        log::debug!("Uploaded {} as {}", file.name(), signed.object_key);
        object_keys.push(signed.object_key);
    }

    start_analysis(config, &StartAnalysisRequest::new(mode, object_keys)).await
}
