//! Term Translation
//!
//! Resolves English descriptor tokens to localized labels. The common vocabulary is
//! served from an immutable in-memory table; anything else may go to a remote
//! translation provider. Lookups never fail: when the remote call errors or times
//! out, the original token is returned and a warning is logged.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub mod clients;

pub use clients::{
    GoogleTranslateClient, LibreTranslateClient, TranslationClient, TranslatorFactory,
};

/// Remote translation backend selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    /// Static table only
    #[default]
    None,
    Google,
    LibreTranslate,
}

/// Translation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default)]
    pub provider: TranslationProvider,

    #[serde(default)]
    pub api_key: Option<String>,

    /// Override the provider's default endpoint (required for LibreTranslate)
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default = "default_source_language")]
    pub source_language: String,

    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Upper bound for a single remote call
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "ko".to_string()
}

fn default_timeout_ms() -> u64 {
    3000
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::None,
            api_key: None,
            endpoint: None,
            source_language: default_source_language(),
            target_language: default_target_language(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl TranslationConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_ms == 0 {
            return Err("timeout_ms must be greater than zero".to_string());
        }
        if self.source_language.trim().is_empty() || self.target_language.trim().is_empty() {
            return Err("Language codes cannot be empty".to_string());
        }
        if let Some(endpoint) = &self.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(format!("Invalid endpoint URL: {}", endpoint));
            }
        }
        if self.provider == TranslationProvider::LibreTranslate && self.endpoint.is_none() {
            return Err("libretranslate provider requires an endpoint".to_string());
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Bilingual vocabulary for places, activities, emotions, times of day and weather.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermTable {
    entries: HashMap<String, String>,
}

const KOREAN_TERMS: &[(&str, &str)] = &[
    // places
    ("beach", "해변"),
    ("mountain", "산"),
    ("park", "공원"),
    ("restaurant", "식당"),
    ("house", "집"),
    ("office", "사무실"),
    ("sea", "바다"),
    ("indoor", "실내"),
    ("room", "방"),
    ("interior", "실내"),
    // activities and achievements
    ("party", "파티"),
    ("wedding", "결혼식"),
    ("graduation", "졸업식"),
    ("travel", "여행"),
    ("sport", "운동"),
    ("dining", "식사"),
    ("vacation", "휴가"),
    ("ceremony", "행사"),
    ("award", "시상식"),
    ("performance", "공연"),
    // emotions
    ("happiness", "행복"),
    ("joy", "기쁨"),
    ("fun", "즐거움"),
    ("smile", "미소"),
    ("sadness", "슬픔"),
    ("serious", "진지함"),
    ("anger", "분노"),
    // time of day
    ("morning", "아침"),
    ("afternoon", "오후"),
    ("evening", "저녁"),
    ("night", "밤"),
    // weather
    ("sunny", "맑은"),
    ("rainy", "비오는"),
    ("cloudy", "흐린"),
    ("snowy", "눈오는"),
];

impl TermTable {
    /// English to Korean table used by default.
    pub fn korean() -> Self {
        Self::from_entries(KOREAN_TERMS.iter().copied())
    }

    /// Build a table; keys are stored lower-cased.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(&token.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TermTable {
    fn default() -> Self {
        Self::korean()
    }
}

/// Token to localized label. Tokens are lower-cased first; implementations must not fail.
#[async_trait]
pub trait TermLookup: Send + Sync {
    async fn translate(&self, token: &str) -> String;
}

/// Pure in-memory lookup; unknown tokens come back lower-cased but otherwise unchanged.
#[derive(Debug, Clone)]
pub struct StaticLookup {
    table: Arc<TermTable>,
}

impl StaticLookup {
    pub fn new(table: Arc<TermTable>) -> Self {
        Self { table }
    }

    pub fn resolve(&self, token: &str) -> Option<String> {
        self.table.get(token).map(str::to_string)
    }
}

#[async_trait]
impl TermLookup for StaticLookup {
    async fn translate(&self, token: &str) -> String {
        let token = token.to_lowercase();
        self.resolve(&token).unwrap_or(token)
    }
}

/// Static table first, then one bounded remote call, then the original token.
pub struct FallbackLookup {
    table: StaticLookup,
    remote: Arc<dyn TranslationClient>,
    source_language: String,
    target_language: String,
    timeout: Duration,
}

impl FallbackLookup {
    pub fn new(
        table: StaticLookup,
        remote: Arc<dyn TranslationClient>,
        config: &TranslationConfig,
    ) -> Self {
        Self {
            table,
            remote,
            source_language: config.source_language.clone(),
            target_language: config.target_language.clone(),
            timeout: config.timeout(),
        }
    }
}

#[async_trait]
impl TermLookup for FallbackLookup {
    async fn translate(&self, token: &str) -> String {
        let token = token.to_lowercase();
        if token.is_empty() {
            return token;
        }
        if let Some(label) = self.table.resolve(&token) {
            return label;
        }

        let call = self
            .remote
            .translate(&token, &self.source_language, &self.target_language);
        let outcome = tokio::time::timeout(self.timeout, call).await;
        match outcome {
            Ok(Ok(translated)) => {
                debug!(
                    token = %token,
                    translated = %translated,
                    provider = self.remote.provider_name(),
                    "Translated term remotely"
                );
                translated
            }
            Ok(Err(e)) => {
                warn!(
                    token = %token,
                    provider = self.remote.provider_name(),
                    error = %e,
                    "Remote translation failed, keeping original term"
                );
                token
            }
            Err(_) => {
                warn!(
                    token = %token,
                    provider = self.remote.provider_name(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Remote translation timed out, keeping original term"
                );
                token
            }
        }
    }
}

/// Compose the lookup for a configuration: remote fallback when a client can be
/// built, static-only otherwise.
pub fn build_lookup(
    config: &TranslationConfig,
    table: Arc<TermTable>,
) -> Result<Arc<dyn TermLookup>, crate::error::TranslationError> {
    let static_lookup = StaticLookup::new(table);
    match TranslatorFactory::create_client(config)? {
        Some(client) => {
            info!(
                provider = client.provider_name(),
                target = %config.target_language,
                "Remote translation fallback enabled"
            );
            Ok(Arc::new(FallbackLookup::new(static_lookup, client, config)))
        }
        None => Ok(Arc::new(static_lookup)),
    }
}
