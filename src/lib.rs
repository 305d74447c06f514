//! Reminisce: contextual memory-elicitation questions
//!
//! Turns a structured image-analysis result (labels, faces, objects) into a compact
//! context summary and a bounded, category-grouped sequence of questions that prompt
//! a person to recall and narrate the moment in the photo.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod logging;
pub mod questions;
pub mod translation;

pub use analysis::{AnalysisResult, Face, Label};
pub use context::{ContextExtractor, ContextSignals};
pub use engine::QuestionEngine;
pub use questions::{GeneratedQuestionSet, Question, QuestionCategory, QuestionLevel};
