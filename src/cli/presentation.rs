//! CLI presentation: text and json formatters per command family.

mod config;
mod context;
mod questions;

pub use config::{format_config_toml, format_validation_result};
pub use context::{format_context_json, format_context_text};
pub use questions::{format_question_set_json, format_question_set_text};
