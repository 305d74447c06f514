//! Configuration System
//!
//! Layered configuration for translation, question templates and logging, loaded with
//! the `config` crate. Validation collects every problem instead of stopping at the
//! first one.

use crate::logging::LoggingConfig;
use crate::questions::QuestionTemplates;
use crate::translation::TermTable;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use crate::translation::{TranslationConfig, TranslationProvider};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReminisceConfig {
    /// Remote translation fallback
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Question template selection
    #[serde(default)]
    pub questions: QuestionsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Language of the built-in question templates and term table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateLanguage {
    #[default]
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "en")]
    English,
}

impl TemplateLanguage {
    pub fn code(&self) -> &'static str {
        match self {
            TemplateLanguage::Korean => "ko",
            TemplateLanguage::English => "en",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionsConfig {
    #[serde(default)]
    pub language: TemplateLanguage,

    /// TOML file replacing the built-in templates
    #[serde(default)]
    pub templates_file: Option<PathBuf>,
}

impl QuestionsConfig {
    /// Built-in templates for the language, or the override file when set.
    pub fn load_templates(&self) -> Result<QuestionTemplates, ApiError> {
        match &self.templates_file {
            Some(path) => load_templates_file(path),
            None => Ok(match self.language {
                TemplateLanguage::Korean => QuestionTemplates::korean(),
                TemplateLanguage::English => QuestionTemplates::english(),
            }),
        }
    }

    /// Static term table matching the template language.
    pub fn term_table(&self) -> TermTable {
        match self.language {
            TemplateLanguage::Korean => TermTable::korean(),
            TemplateLanguage::English => TermTable::from_entries(std::iter::empty::<(&str, &str)>()),
        }
    }
}

fn load_templates_file(path: &Path) -> Result<QuestionTemplates, ApiError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ApiError::ConfigError(format!("Failed to read templates file {:?}: {}", path, e))
    })?;
    toml::from_str(&text).map_err(|e| {
        ApiError::ConfigError(format!("Invalid templates file {:?}: {}", path, e))
    })
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Translation(String),
    Questions(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Translation(msg) => write!(f, "Translation: {}", msg),
            ValidationError::Questions(msg) => write!(f, "Questions: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ReminisceConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.translation.validate() {
            errors.push(ValidationError::Translation(e));
        }

        if self.translation.target_language != self.questions.language.code() {
            errors.push(ValidationError::Questions(format!(
                "Template language '{}' does not match translation target '{}'",
                self.questions.language.code(),
                self.translation.target_language
            )));
        }
        if let Some(path) = &self.questions.templates_file {
            if !path.exists() {
                errors.push(ValidationError::Questions(format!(
                    "Templates file not found: {}",
                    path.display()
                )));
            }
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all problems into one error.
    pub fn validated(self) -> Result<Self, ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(self)
    }
}
