//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; single route table dispatches to the question engine.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands, OutputFormat};
pub use presentation::{
    format_config_toml, format_context_json, format_context_text, format_question_set_json,
    format_question_set_text, format_validation_result,
};
pub use route::{read_analysis, RunContext};
