//! HTTP transport for the Gemini REST API.
//!
//! [`HttpTransport`] owns the `reqwest` client, the endpoint base URL and the
//! API key. Sessions and the gateway share one transport through an `Arc`.

use crate::gemini::error::{GeminiError, Result};
use crate::gemini::protocol::{
    GenerateContentRequest, GenerateContentResponse, ListModelsResponse, describe_error_body,
};
use quill_domain::Model;
use std::time::Duration;
use tracing::debug;

/// Default endpoint for the public Gemini API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Request header carrying the API key
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings for [`HttpTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSettings {
    pub base_url: String,
    pub api_key_env: String,
    /// Applies to connecting, to one-shot requests, and to each wait for the
    /// next streamed chunk.
    pub timeout: Duration,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
    timeout: Duration,
}

impl HttpTransport {
    /// Build a transport, reading the API key from the configured variable.
    ///
    /// A missing key is not an error here; it surfaces on first use.
    pub fn from_env(settings: TransportSettings) -> Result<Self> {
        let api_key = std::env::var(&settings.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::new(settings, api_key)
    }

    pub fn new(settings: TransportSettings, api_key: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.timeout)
            .build()
            .map_err(|e| GeminiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key,
            api_key_env: settings.api_key_env,
            timeout: settings.timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The API key, or [`GeminiError::MissingApiKey`].
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| GeminiError::MissingApiKey(self.api_key_env.clone()))
    }

    pub fn generate_url(&self, model: &Model) -> String {
        format!("{}/{}:generateContent", self.base_url, model)
    }

    pub fn stream_url(&self, model: &Model) -> String {
        format!("{}/{}:streamGenerateContent?alt=sse", self.base_url, model)
    }

    /// `POST :generateContent` and wait for the whole response.
    pub async fn generate(
        &self,
        model: &Model,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.generate_url(model);
        debug!(%url, "POST generateContent");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key()?)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let raw = response.text().await?;
        serde_json::from_str(&raw).map_err(|e| GeminiError::ParseError {
            error: e.to_string(),
            raw,
        })
    }

    /// `POST :streamGenerateContent` and return once headers arrive.
    ///
    /// The body is left unread for the caller to stream.
    pub async fn open_stream(
        &self,
        model: &Model,
        request: &GenerateContentRequest,
    ) -> Result<reqwest::Response> {
        let url = self.stream_url(model);
        debug!(%url, "POST streamGenerateContent");

        let send = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key()?)
            .json(request)
            .send();
        let response = tokio::time::timeout(self.timeout, send)
            .await
            .map_err(|_| GeminiError::Timeout)??;
        Self::check_status(response).await
    }

    /// `GET {base}` listing the models behind the endpoint.
    pub async fn list_models(&self) -> Result<ListModelsResponse> {
        let response = self
            .client
            .get(&self.base_url)
            .header(API_KEY_HEADER, self.api_key()?)
            .timeout(self.timeout)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "failed to read error body".to_string());
        Err(GeminiError::Api {
            status: status.as_u16(),
            message: describe_error_body(&body),
        })
    }
}
