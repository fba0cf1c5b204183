//! HTTP client for the part-matching backend.
//!
//! The four backend calls live behind the [`PartMatchApi`] trait so the
//! flows can run against a fake backend in tests. The real
//! implementation wraps reqwest, which works on both native and WASM
//! platforms:
//! - Native: Uses hyper with rustls-tls for HTTPS
//! - WASM: Uses browser fetch() API internally

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::config;
use crate::error::ApiError;
use crate::types::{BatchMatchResponse, Document, DocumentId, SingleSearchResponse};

/// A user-selected file queued for upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// The calls the client makes against the backend.
///
/// One method per backend endpoint; every failure mode (transport,
/// non-2xx status, undecodable body) surfaces as [`ApiError`] and is
/// handled uniformly by the calling flow.
#[async_trait(?Send)]
pub trait PartMatchApi {
    /// Fetches the full document list.
    async fn list_documents(&self) -> Result<Vec<Document>, ApiError>;

    /// Uploads one PDF. The success payload is opaque and discarded;
    /// only the status matters.
    async fn upload_document(&self, file: UploadFile) -> Result<(), ApiError>;

    /// Runs line-item matching for a previously uploaded document.
    async fn batch_match(&self, document_id: &DocumentId)
        -> Result<BatchMatchResponse, ApiError>;

    /// Matches one free-text description against the parts catalog.
    async fn single_match(&self, description: &str) -> Result<SingleSearchResponse, ApiError>;
}

/// Global HTTP client for connection pooling.
///
/// reqwest::Client handles connection pooling internally, so reusing a
/// single client across requests is much more efficient than creating
/// one per request. All four endpoints live on the same host, so the
/// pooled connections get reused for the whole session.
///
/// Configured with:
/// - 30 second timeout per request (native; the browser governs WASM)
/// - Custom user agent identifying PartMatch
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .user_agent(concat!("PartMatch/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    }

    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
});

/// reqwest-backed implementation of [`PartMatchApi`].
#[derive(Debug, Clone)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    /// Creates a client against the given base URL. Trailing slashes are
    /// stripped so endpoint paths can be joined verbatim.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// Creates a client against the configured backend address.
    pub fn from_config() -> Self {
        Self::new(config::api_base())
    }

    /// Base URL this client talks to.
    pub fn base(&self) -> &str {
        &self.base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn transport_err(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn decode_err(err: reqwest::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Maps a non-2xx response to [`ApiError::Status`], passing 2xx through.
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

#[async_trait(?Send)]
impl PartMatchApi for HttpApi {
    async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        let response = HTTP_CLIENT
            .get(self.endpoint("/api/documents"))
            .send()
            .await
            .map_err(transport_err)?;
        check_status(response)?
            .json::<Vec<Document>>()
            .await
            .map_err(decode_err)
    }

    async fn upload_document(&self, file: UploadFile) -> Result<(), ApiError> {
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.filename)
            .mime_str("application/pdf")
            .map_err(transport_err)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = HTTP_CLIENT
            .post(self.endpoint("/upload/"))
            .multipart(form)
            .send()
            .await
            .map_err(transport_err)?;
        check_status(response).map(|_| ())
    }

    async fn batch_match(
        &self,
        document_id: &DocumentId,
    ) -> Result<BatchMatchResponse, ApiError> {
        let response = HTTP_CLIENT
            .post(self.endpoint(&format!("/batch-match/{}", document_id)))
            .send()
            .await
            .map_err(transport_err)?;
        check_status(response)?
            .json::<BatchMatchResponse>()
            .await
            .map_err(decode_err)
    }

    async fn single_match(&self, description: &str) -> Result<SingleSearchResponse, ApiError> {
        let response = HTTP_CLIENT
            .post(self.endpoint("/single-match/"))
            .json(&serde_json::json!({ "description": description }))
            .send()
            .await
            .map_err(transport_err)?;
        check_status(response)?
            .json::<SingleSearchResponse>()
            .await
            .map_err(decode_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slashes_are_stripped() {
        let api = HttpApi::new("https://backend.example.com///");
        assert_eq!(api.base(), "https://backend.example.com");
        assert_eq!(
            api.endpoint("/api/documents"),
            "https://backend.example.com/api/documents"
        );
    }

    #[test]
    fn batch_match_path_embeds_document_id() {
        let api = HttpApi::new("http://localhost:8000");
        let id = DocumentId::new("663a1f2e");
        assert_eq!(
            api.endpoint(&format!("/batch-match/{}", id)),
            "http://localhost:8000/batch-match/663a1f2e"
        );
    }
}
