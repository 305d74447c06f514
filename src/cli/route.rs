//! CLI route: single route table and run context. Dispatches to the question engine and presentation.

use crate::analysis::AnalysisResult;
use crate::cli::parse::{Commands, ConfigCommands, OutputFormat};
use crate::cli::presentation::{
    format_config_toml, format_context_json, format_context_text, format_question_set_json,
    format_question_set_text, format_validation_result,
};
use crate::config::{ConfigLoader, ReminisceConfig};
use crate::engine::QuestionEngine;
use crate::error::ApiError;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Runtime context for CLI execution: workspace and the loaded configuration.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config: ReminisceConfig,
}

impl RunContext {
    /// Load configuration; validation is deferred so `config validate` can report it.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    pub fn with_config(workspace_root: PathBuf, config: ReminisceConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &ReminisceConfig {
        &self.config
    }

    fn engine(&self) -> Result<QuestionEngine, ApiError> {
        let config = self.config.clone().validated()?;
        QuestionEngine::from_config(&config)
    }

    /// Execute a CLI command via the single route table.
    pub async fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command).await;
        info!(
            command = command.name(),
            workspace = %self.workspace_root.display(),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    async fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Questions { input, format } => {
                let analysis = read_analysis(input)?;
                let set = self.engine()?.generate(analysis).await;
                match format {
                    OutputFormat::Json => format_question_set_json(&set),
                    OutputFormat::Text => Ok(format_question_set_text(&set)),
                }
            }
            Commands::Context { input, format } => {
                let analysis = read_analysis(input)?;
                let context = self.engine()?.extract_context(&analysis).await;
                match format {
                    OutputFormat::Json => format_context_json(&context),
                    OutputFormat::Text => Ok(format_context_text(&context)),
                }
            }
            Commands::Translate { token } => Ok(self.engine()?.translate(token).await),
            Commands::Config { command } => match command {
                ConfigCommands::Validate => {
                    let result = self.config.validate();
                    let report = format_validation_result(&result);
                    match result {
                        Ok(()) => Ok(report),
                        Err(_) => Err(ApiError::ConfigError(report)),
                    }
                }
                ConfigCommands::Show => format_config_toml(&self.config),
            },
        }
    }
}

/// Read an analysis document from a file, or stdin for "-".
pub fn read_analysis(input: &Path) -> Result<AnalysisResult, ApiError> {
    let text = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input).map_err(|e| {
            ApiError::InvalidInput(format!("Failed to read {}: {}", input.display(), e))
        })?
    };
    AnalysisResult::from_json_str(&text)
}
