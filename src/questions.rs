//! Question model
//!
//! Categories, levels and the question set returned to callers. Categories and levels
//! are closed enums that serialize to the fixed wire tokens (`"temporal"`, `1`, ...).

use crate::analysis::AnalysisResult;
use crate::context::ContextSignals;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod aggregator;
pub mod generators;
pub mod templates;

pub use aggregator::{QuestionAggregator, MAX_QUESTIONS, MIN_QUESTIONS, PER_CATEGORY_CAP};
pub use templates::QuestionTemplates;

/// Thematic lens a question belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Temporal,
    Sensory,
    Relational,
    Identity,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 4] = [
        QuestionCategory::Temporal,
        QuestionCategory::Sensory,
        QuestionCategory::Relational,
        QuestionCategory::Identity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Temporal => "temporal",
            QuestionCategory::Sensory => "sensory",
            QuestionCategory::Relational => "relational",
            QuestionCategory::Identity => "identity",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Depth of introspection, serialized as 1, 2 or 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum QuestionLevel {
    Basic = 1,
    Context = 2,
    Reflective = 3,
}

impl From<QuestionLevel> for u8 {
    fn from(level: QuestionLevel) -> Self {
        level as u8
    }
}

impl TryFrom<u8> for QuestionLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(QuestionLevel::Basic),
            2 => Ok(QuestionLevel::Context),
            3 => Ok(QuestionLevel::Reflective),
            other => Err(format!("Invalid question level: {} (must be 1, 2 or 3)", other)),
        }
    }
}

impl fmt::Display for QuestionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionLevel::Basic => "basic",
            QuestionLevel::Context => "context",
            QuestionLevel::Reflective => "reflective",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub category: QuestionCategory,
    pub level: QuestionLevel,
    #[serde(rename = "question")]
    pub text: String,
}

impl Question {
    pub fn new(category: QuestionCategory, level: QuestionLevel, text: impl Into<String>) -> Self {
        Self {
            category,
            level,
            text: text.into(),
        }
    }
}

/// Output of one engine run. The context stays off the wire; the analysis is echoed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedQuestionSet {
    pub questions: Vec<Question>,
    #[serde(skip)]
    pub context: ContextSignals,
    pub analysis_result: AnalysisResult,
}

impl GeneratedQuestionSet {
    pub fn count_for(&self, category: QuestionCategory) -> usize {
        self.questions
            .iter()
            .filter(|q| q.category == category)
            .count()
    }
}
