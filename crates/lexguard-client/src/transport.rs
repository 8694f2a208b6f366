//! `reqwest` implementation of [`AnalysisService`]

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use url::Url;

use lexguard_core::prelude::*;
use lexguard_core::{AnalysisResult, DocumentId, DocumentRecord, DocumentSummary, FileUpload};

use crate::credentials::Credentials;
use crate::response::{check_response, read_json, DocumentList};
use crate::service::AnalysisService;

const USER_AGENT: &str = concat!("lexguard/", env!("CARGO_PKG_VERSION"));

const ANALYZE_DOCUMENT_FAILED: &str = "Failed to analyze document";
const ANALYZE_TEXT_FAILED: &str = "Failed to analyze text";
const LIST_FAILED: &str = "Failed to load documents";
const LOAD_FAILED: &str = "Failed to load document";
const SAVE_FAILED: &str = "Failed to save document";

/// HTTP client for the analysis service
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    http: Client,
    base: Url,
    credentials: Credentials,
}

impl HttpAnalysisClient {
    /// Build a client for `base_url` (e.g. `http://localhost:8000`).
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(base_url: &str, credentials: Credentials, timeout: Option<Duration>) -> Result<Self> {
        let base = parse_base_url(base_url)?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;

        info!(
            "Analysis service at {} ({})",
            base,
            if credentials.is_authenticated() {
                "authenticated"
            } else {
                "anonymous"
            }
        );

        Ok(Self {
            http,
            base,
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|_| Error::invalid_server_url(format!("{}{}", self.base, path)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.credentials.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request; transport failures surface as `fallback`.
    async fn send(&self, request: RequestBuilder, fallback: &str) -> Result<reqwest::Response> {
        let resp = self.authorize(request).send().await.map_err(|e| {
            warn!("Request to analysis service failed: {}", e);
            Error::remote(None, fallback)
        })?;
        check_response(resp, fallback).await
    }
}

/// Normalise the base URL so relative endpoint paths append to it.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|_| Error::invalid_server_url(raw))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(Error::invalid_server_url(raw));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

impl AnalysisService for HttpAnalysisClient {
    async fn analyze_document(&self, upload: FileUpload) -> Result<AnalysisResult> {
        debug!(
            "Uploading {} ({} bytes, {})",
            upload.file_name,
            upload.size(),
            upload.media_type.mime()
        );
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(upload.media_type.mime())
            .map_err(|e| Error::http(e.to_string()))?;
        let form = Form::new().part("file", part);

        let url = self.endpoint("api/analyze-document")?;
        let resp = self
            .send(self.http.post(url).multipart(form), ANALYZE_DOCUMENT_FAILED)
            .await?;
        read_json(resp, ANALYZE_DOCUMENT_FAILED).await
    }

    async fn analyze_text(&self, text: String) -> Result<AnalysisResult> {
        debug!("Submitting {} characters of text", text.chars().count());
        let form = Form::new().text("text", text);

        let url = self.endpoint("api/analyze-text")?;
        let resp = self
            .send(self.http.post(url).multipart(form), ANALYZE_TEXT_FAILED)
            .await?;
        read_json(resp, ANALYZE_TEXT_FAILED).await
    }

    async fn list_documents(&self) -> Result<Vec<DocumentSummary>> {
        let url = self.endpoint("api/documents")?;
        let resp = self.send(self.http.get(url), LIST_FAILED).await?;
        let list: DocumentList = read_json(resp, LIST_FAILED).await?;
        Ok(list.into_vec())
    }

    async fn get_document(&self, id: DocumentId) -> Result<DocumentRecord> {
        let url = self.endpoint(&format!("api/documents/{id}"))?;
        let resp = self.send(self.http.get(url), LOAD_FAILED).await?;
        read_json(resp, LOAD_FAILED).await
    }

    async fn update_document(&self, id: DocumentId, edited_text: String) -> Result<DocumentRecord> {
        let url = self.endpoint(&format!("api/documents/{id}"))?;
        let body = serde_json::json!({ "edited_text": edited_text });

        let result = match self.send(self.http.put(url).json(&body), SAVE_FAILED).await {
            Ok(resp) => read_json(resp, SAVE_FAILED).await,
            Err(e) => Err(e),
        };

        // Save failures have their own taxonomy entry
        result.map_err(|e| match e {
            Error::Remote { message, .. } => Error::save(message),
            other => other,
        })
    }
}
