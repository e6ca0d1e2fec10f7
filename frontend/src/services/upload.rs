//! HTTP client for the cleaning backend.
//!
//! - `POST /upload` - multipart `file` + `use_llm`, answers with a [`CleanResult`]
//! - `POST /download/excel` - JSON array of records, answers with `.xlsx` bytes

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use web_sys::{File, FormData};

use crate::config::{backend_url, EXCEL_EXPORT_PATH, UPLOAD_PATH};
use crate::types::{AppError, AppResult, CleanResult, QaRecord};
use crate::workflow::CleaningService;

/// Error payload the backend sends with 4xx/5xx answers.
#[derive(Debug, Deserialize)]
struct BackendError {
    error: String,
}

/// Extract a readable reason from an error body.
fn error_reason(body: &str) -> String {
    serde_json::from_str::<BackendError>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.to_string())
}

fn use_llm_field(use_llm: bool) -> &'static str {
    if use_llm {
        "true"
    } else {
        "false"
    }
}

/// The cleaning backend reached over HTTP.
#[derive(Clone, Debug)]
pub struct HttpCleaningService {
    base_url: String,
}

impl HttpCleaningService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for HttpCleaningService {
    fn default() -> Self {
        Self::new(backend_url())
    }
}

impl CleaningService for HttpCleaningService {
    type File = File;
    type Response = Response;

    async fn send_upload(&self, file: &File, use_llm: bool) -> AppResult<Response> {
        let form_data = FormData::new()?;
        form_data.append_with_blob("file", file)?;
        form_data.append_with_str("use_llm", use_llm_field(use_llm))?;

        let response = Request::post(&self.endpoint(UPLOAD_PATH))
            .body(form_data)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            log::warn!(
                "Upload rejected ({}): {}",
                response.status(),
                error_reason(&body)
            );
            return Err(AppError::Upload("Upload failed".to_string()));
        }

        Ok(response)
    }

    async fn read_result(&self, response: Response) -> AppResult<CleanResult> {
        response
            .json::<CleanResult>()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))
    }

    async fn export_excel(&self, records: &[QaRecord]) -> AppResult<Vec<u8>> {
        let response = Request::post(&self.endpoint(EXCEL_EXPORT_PATH))
            .json(&records)
            .map_err(|e| AppError::Export(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Export(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Export(format!(
                "Server error ({}): {}",
                response.status(),
                error_reason(&body)
            )));
        }

        response
            .binary()
            .await
            .map_err(|e| AppError::Export(e.to_string()))
    }
}
