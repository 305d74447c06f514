//! Config presentation: validation report and effective config dump.

use crate::config::{ReminisceConfig, ValidationError};
use crate::error::ApiError;

pub fn format_validation_result(result: &Result<(), Vec<ValidationError>>) -> String {
    match result {
        Ok(()) => "Configuration is valid.".to_string(),
        Err(errors) => {
            let mut s = format!("Configuration has {} problem(s):", errors.len());
            for e in errors {
                s.push_str(&format!("\n  - {}", e));
            }
            s
        }
    }
}

/// Effective configuration as TOML with the API key masked.
pub fn format_config_toml(config: &ReminisceConfig) -> Result<String, ApiError> {
    let mut shown = config.clone();
    if shown.translation.api_key.is_some() {
        shown.translation.api_key = Some("********".to_string());
    }
    toml::to_string_pretty(&shown).map_err(|e| ApiError::Serialization(e.to_string()))
}
