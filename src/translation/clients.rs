//! Remote translation clients
//!
//! HTTP clients for the remote fallback. Each maps transport and status failures
//! onto [`TranslationError`] so the caller can log one uniform warning.

use crate::error::TranslationError;
use crate::translation::{TranslationConfig, TranslationProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

const GOOGLE_TRANSLATE_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";
const TRANSLATION_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Remote translation provider
#[async_trait]
pub trait TranslationClient: Send + Sync {
    /// Translate `text` from `source` to `target` language codes
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError>;

    fn provider_name(&self) -> &str;
}

fn map_http_error(error: reqwest::Error, timeout_ms: u64) -> TranslationError {
    if error.is_timeout() {
        return TranslationError::Timeout { timeout_ms };
    }
    match error.status().map(|s| s.as_u16()) {
        Some(401) | Some(403) => TranslationError::AuthFailed(error.to_string()),
        Some(429) => TranslationError::RateLimit(error.to_string()),
        Some(status) => {
            TranslationError::RequestFailed(format!("Request failed with status {}: {}", status, error))
        }
        None if error.is_connect() => {
            TranslationError::RequestFailed(format!("Connection error: {}", error))
        }
        None => TranslationError::RequestFailed(format!("HTTP error: {}", error)),
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, TranslationError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(match status.as_u16() {
        401 | 403 => TranslationError::AuthFailed(error_text),
        429 => TranslationError::RateLimit(error_text),
        _ => TranslationError::RequestFailed(format!(
            "Request failed with status {}: {}",
            status, error_text
        )),
    })
}

fn build_http_client(timeout: Duration) -> Result<Client, TranslationError> {
    Client::builder()
        .no_proxy()
        .connect_timeout(TRANSLATION_HTTP_CONNECT_TIMEOUT.min(timeout))
        .timeout(timeout)
        .build()
        .map_err(|e| TranslationError::RequestFailed(format!("Failed to create HTTP client: {}", e)))
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// Google Cloud Translation (v2 REST, API key auth)
pub struct GoogleTranslateClient {
    client: Client,
    api_key: String,
    endpoint: String,
    timeout_ms: u64,
}

impl GoogleTranslateClient {
    pub fn new(
        api_key: String,
        endpoint: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranslationError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            api_key,
            endpoint: endpoint.unwrap_or_else(|| GOOGLE_TRANSLATE_ENDPOINT.to_string()),
            timeout_ms: timeout.as_millis() as u64,
        })
    }
}

#[async_trait]
impl TranslationClient for GoogleTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        let request = TranslateRequest {
            q: text,
            source,
            target,
            format: "text",
            api_key: None,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| map_http_error(e, self.timeout_ms))?;
        let response = check_status(response).await?;

        #[derive(Deserialize)]
        struct GoogleResponse {
            data: GoogleData,
        }
        #[derive(Deserialize)]
        struct GoogleData {
            translations: Vec<GoogleTranslation>,
        }
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct GoogleTranslation {
            translated_text: String,
        }

        let body: GoogleResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        body.data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| TranslationError::InvalidResponse("No translations in response".to_string()))
    }

    fn provider_name(&self) -> &str {
        "google"
    }
}

/// Self-hosted LibreTranslate server
pub struct LibreTranslateClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout_ms: u64,
}

impl LibreTranslateClient {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranslationError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout_ms: timeout.as_millis() as u64,
        })
    }
}

#[async_trait]
impl TranslationClient for LibreTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        let request = TranslateRequest {
            q: text,
            source,
            target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let url = format!("{}/translate", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| map_http_error(e, self.timeout_ms))?;
        let response = check_status(response).await?;

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct LibreResponse {
            translated_text: String,
        }

        let body: LibreResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
        Ok(body.translated_text)
    }

    fn provider_name(&self) -> &str {
        "libretranslate"
    }
}

/// Builds the configured remote client, if any.
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// `Ok(None)` means static-only: no provider, or a provider without credentials.
    pub fn create_client(
        config: &TranslationConfig,
    ) -> Result<Option<Arc<dyn TranslationClient>>, TranslationError> {
        let timeout = config.timeout();
        match config.provider {
            TranslationProvider::None => Ok(None),
            TranslationProvider::Google => match config.api_key.as_deref() {
                Some(key) if !key.trim().is_empty() => Ok(Some(Arc::new(
                    GoogleTranslateClient::new(key.to_string(), config.endpoint.clone(), timeout)?,
                ))),
                _ => {
                    warn!("Google translation configured without an API key; using static term table only");
                    Ok(None)
                }
            },
            TranslationProvider::LibreTranslate => {
                let endpoint = config.endpoint.clone().ok_or_else(|| {
                    TranslationError::NotConfigured(
                        "libretranslate provider requires an endpoint".to_string(),
                    )
                })?;
                Ok(Some(Arc::new(LibreTranslateClient::new(
                    endpoint,
                    config.api_key.clone(),
                    timeout,
                )?)))
            }
        }
    }
}
