//! HTTP gateway to the copy backend.
//!
//! One thin method per remote capability; no retries, no caching, no
//! request coalescing. Concurrent calls race independently.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::info;

use crate::core::config::{AppConfig, REQUEST_TIMEOUT_SECS};
use crate::core::models::{
    BrainstormRequest, BrainstormResult, CopyRequest, CopyResult, FileUpload, IngestReceipt,
    VisionAnalysis,
};
use crate::errors::BackendError;

// Static HTTP client, shared across all gateway calls
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// The four remote operations the console depends on. Implemented over
/// HTTP by [`BackendClient`]; tests substitute in-memory fakes.
#[async_trait]
pub trait CopyGateway: Send + Sync {
    async fn generate_copy(&self, req: &CopyRequest) -> Result<CopyResult, BackendError>;
    async fn analyze_image(&self, image: &FileUpload) -> Result<VisionAnalysis, BackendError>;
    async fn brainstorm(&self, req: &BrainstormRequest) -> Result<BrainstormResult, BackendError>;
    async fn ingest_brand_document(
        &self,
        doc: &FileUpload,
    ) -> Result<IngestReceipt, BackendError>;
}

pub struct BackendClient {
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.backend_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn file_part(upload: &FileUpload) -> Result<Part, BackendError> {
        let mime = mime_guess::from_path(&upload.file_name)
            .first_or_octet_stream()
            .to_string();
        Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&mime)
            .map_err(|e| BackendError::HttpError(format!("Invalid mime type {mime}: {e}")))
    }

    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BackendError::ApiError(format!("{status}: {body}")));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl CopyGateway for BackendClient {
    async fn generate_copy(&self, req: &CopyRequest) -> Result<CopyResult, BackendError> {
        #[cfg(feature = "debug-logs")]
        info!("Generate payload:\n{:?}", req);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Generating copy for platform {} (agent={}, search={})",
            req.platform.as_str(),
            req.use_agent,
            req.use_search
        );

        let response = HTTP_CLIENT
            .post(self.url("/api/copy/generate"))
            .json(req)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn analyze_image(&self, image: &FileUpload) -> Result<VisionAnalysis, BackendError> {
        info!(
            "Analyzing image {} ({} bytes)",
            image.file_name,
            image.bytes.len()
        );

        let form = Form::new().part("file", Self::file_part(image)?);
        let response = HTTP_CLIENT
            .post(self.url("/api/vision/analyze"))
            .multipart(form)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn brainstorm(&self, req: &BrainstormRequest) -> Result<BrainstormResult, BackendError> {
        info!("Brainstorming for platform {}", req.platform.as_str());

        let response = HTTP_CLIENT
            .post(self.url("/api/copy/brainstorm"))
            .json(req)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn ingest_brand_document(
        &self,
        doc: &FileUpload,
    ) -> Result<IngestReceipt, BackendError> {
        info!(
            "Uploading brand document {} ({} bytes)",
            doc.file_name,
            doc.bytes.len()
        );

        let form = Form::new().part("file", Self::file_part(doc)?);
        let response = HTTP_CLIENT
            .post(self.url("/api/brand/upload-brand-info"))
            .multipart(form)
            .send()
            .await?;
        Self::read_json(response).await
    }
}
