//! Question aggregation: category order, per-category caps and the output size window.

use crate::analysis::AnalysisResult;
use crate::context::ContextSignals;
use crate::questions::generators::generator_for;
use crate::questions::templates::QuestionTemplates;
use crate::questions::{Question, QuestionCategory, QuestionLevel};
use std::sync::Arc;
use tracing::info;

pub const PER_CATEGORY_CAP: usize = 3;
pub const MIN_QUESTIONS: usize = 5;
pub const MAX_QUESTIONS: usize = 10;

/// Categories that always run, in output order.
const PRIMARY_CATEGORIES: [QuestionCategory; 3] = [
    QuestionCategory::Temporal,
    QuestionCategory::Sensory,
    QuestionCategory::Relational,
];

#[derive(Debug, Clone)]
pub struct QuestionAggregator {
    templates: Arc<QuestionTemplates>,
}

impl QuestionAggregator {
    pub fn new(templates: Arc<QuestionTemplates>) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &QuestionTemplates {
        &self.templates
    }

    /// Category-grouped questions, between [`MIN_QUESTIONS`] and [`MAX_QUESTIONS`] long.
    pub fn aggregate(&self, analysis: &AnalysisResult, context: &ContextSignals) -> Vec<Question> {
        let mut questions: Vec<Question> = PRIMARY_CATEGORIES
            .iter()
            .flat_map(|&category| self.capped(category, analysis, context))
            .collect();

        let identity_ran = questions.len() < MIN_QUESTIONS;
        if identity_ran {
            questions.extend(self.capped(QuestionCategory::Identity, analysis, context));
        }

        let padded = MIN_QUESTIONS.saturating_sub(questions.len());
        questions.extend((0..padded).map(|_| {
            Question::new(
                QuestionCategory::Temporal,
                QuestionLevel::Basic,
                self.templates.filler.as_str(),
            )
        }));

        questions.truncate(MAX_QUESTIONS);

        info!(
            total = questions.len(),
            identity_ran,
            padded,
            people = context.people_count,
            "Generated question set"
        );
        questions
    }

    fn capped(
        &self,
        category: QuestionCategory,
        analysis: &AnalysisResult,
        context: &ContextSignals,
    ) -> Vec<Question> {
        let mut generated = generator_for(category)(&self.templates, analysis, context);
        generated.truncate(PER_CATEGORY_CAP);
        generated
    }
}
