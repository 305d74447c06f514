//! Remote translation fallback wired through the full engine

use async_trait::async_trait;
use reminisce::analysis::{AnalysisResult, Face, Label};
use reminisce::config::{ReminisceConfig, TranslationProvider};
use reminisce::error::TranslationError;
use reminisce::questions::QuestionTemplates;
use reminisce::translation::{
    FallbackLookup, StaticLookup, TermLookup, TermTable, TranslationClient, TranslationConfig,
};
use reminisce::QuestionEngine;
use std::sync::{Arc, Mutex};

/// Records every token sent to the remote provider.
#[derive(Default)]
struct RecordingClient {
    requests: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingClient {
    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationClient for RecordingClient {
    async fn translate(
        &self,
        text: &str,
        _source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        self.requests.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(TranslationError::RequestFailed("connection reset".to_string()));
        }
        Ok(format!("{}:{}", target, text))
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

fn engine_with(client: Arc<RecordingClient>) -> QuestionEngine {
    let lookup = FallbackLookup::new(
        StaticLookup::new(Arc::new(TermTable::korean())),
        client,
        &TranslationConfig::default(),
    );
    QuestionEngine::new(Arc::new(lookup), Arc::new(QuestionTemplates::korean()))
}

#[tokio::test]
async fn test_only_unknown_matching_labels_reach_remote() {
    let client = Arc::new(RecordingClient::default());
    let engine = engine_with(Arc::clone(&client));

    let analysis = AnalysisResult::new(
        vec![
            Label::new("Family", 0.95),
            Label::new("Beach", 0.9),
            Label::new("Beach house", 0.7),
            Label::new("Tree", 0.6),
        ],
        vec![Face::default()],
    );
    let context = engine.extract_context(&analysis).await;

    assert_eq!(client.requests(), ["beach house"]);
    let location = context.location.unwrap();
    assert_eq!(location.raw_key, "beach house");
    assert_eq!(location.localized_label, "ko:beach house");
}

#[tokio::test]
async fn test_remote_failure_keeps_original_term() {
    let client = Arc::new(RecordingClient {
        fail: true,
        ..RecordingClient::default()
    });
    let engine = engine_with(Arc::clone(&client));

    let set = engine
        .generate(AnalysisResult::new(
            vec![Label::new("Birthday party", 0.88)],
            vec![],
        ))
        .await;

    assert_eq!(client.requests(), ["birthday party"]);
    assert_eq!(
        set.questions[1].text,
        "이 birthday party을(를) 계획하게 된 계기가 있었나요?"
    );
}

#[tokio::test]
async fn test_unreachable_provider_never_fails_generation() {
    let mut config = ReminisceConfig::default();
    config.translation.provider = TranslationProvider::LibreTranslate;
    config.translation.endpoint = Some("http://127.0.0.1:9".to_string());
    config.translation.timeout_ms = 500;

    let engine = QuestionEngine::from_config(&config).unwrap();

    assert_eq!(engine.translate("sunny").await, "맑은");
    assert_eq!(engine.translate("lighthouse").await, "lighthouse");

    let set = engine
        .generate(AnalysisResult::new(vec![Label::new("Snowy night", 0.8)], vec![]))
        .await;
    assert!(set.questions.len() >= 5);
    assert_eq!(
        set.context.time_of_day.unwrap().localized_label,
        "snowy night"
    );
    assert!(set.context.weather.is_none());
}

#[tokio::test]
async fn test_direct_lookup_sends_lower_cased_token() {
    let client = Arc::new(RecordingClient::default());
    let lookup = FallbackLookup::new(
        StaticLookup::new(Arc::new(TermTable::korean())),
        Arc::clone(&client) as Arc<dyn TranslationClient>,
        &TranslationConfig::default(),
    );

    assert_eq!(lookup.translate("Family").await, "ko:family");
    assert_eq!(client.requests(), ["family"]);
}
