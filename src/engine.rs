//! Question Engine
//!
//! Composes the term lookup, context extractor and aggregator into the single entry
//! point callers use: analysis in, question set out. Generation never fails; only
//! construction from configuration can.

use crate::analysis::AnalysisResult;
use crate::config::ReminisceConfig;
use crate::context::{ContextExtractor, ContextSignals};
use crate::error::ApiError;
use crate::questions::{GeneratedQuestionSet, QuestionAggregator, QuestionTemplates};
use crate::translation::{build_lookup, StaticLookup, TermLookup, TermTable};
use std::sync::Arc;
use tracing::debug;

pub struct QuestionEngine {
    lookup: Arc<dyn TermLookup>,
    extractor: ContextExtractor,
    aggregator: QuestionAggregator,
}

impl QuestionEngine {
    pub fn new(lookup: Arc<dyn TermLookup>, templates: Arc<QuestionTemplates>) -> Self {
        Self {
            extractor: ContextExtractor::new(Arc::clone(&lookup)),
            aggregator: QuestionAggregator::new(templates),
            lookup,
        }
    }

    /// Korean templates with the static term table and no remote fallback.
    pub fn offline() -> Self {
        Self::new(
            Arc::new(StaticLookup::new(Arc::new(TermTable::korean()))),
            Arc::new(QuestionTemplates::korean()),
        )
    }

    pub fn from_config(config: &ReminisceConfig) -> Result<Self, ApiError> {
        let templates = config.questions.load_templates()?;
        let table = config.questions.term_table();
        let lookup = build_lookup(&config.translation, Arc::new(table))?;
        Ok(Self::new(lookup, Arc::new(templates)))
    }

    pub async fn extract_context(&self, analysis: &AnalysisResult) -> ContextSignals {
        self.extractor.extract(analysis).await
    }

    pub async fn translate(&self, token: &str) -> String {
        self.lookup.translate(token).await
    }

    pub async fn generate(&self, analysis: AnalysisResult) -> GeneratedQuestionSet {
        let context = self.extractor.extract(&analysis).await;
        debug!(?context, "Extracted context signals");
        let questions = self.aggregator.aggregate(&analysis, &context);
        GeneratedQuestionSet {
            questions,
            context,
            analysis_result: analysis,
        }
    }
}
