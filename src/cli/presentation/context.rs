//! Context signal presentation: text and json formatters.

use crate::context::{ContextSignals, Signal};
use crate::error::ApiError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub fn format_context_json(context: &ContextSignals) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(context)?)
}

pub fn format_context_text(context: &ContextSignals) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Signal", "Key", "Score", "Label"]);

    let rows: [(&str, Option<&Signal>); 4] = [
        ("location", context.location.as_ref()),
        ("activity", context.activity.as_ref()),
        ("time_of_day", context.time_of_day.as_ref()),
        ("weather", context.weather.as_ref()),
    ];
    for (name, signal) in rows {
        match signal {
            Some(s) => table.add_row(vec![
                name.to_string(),
                s.raw_key.clone(),
                format!("{:.2}", s.score),
                s.localized_label.clone(),
            ]),
            None => table.add_row(vec![name, "-", "-", "-"]),
        };
    }
    match &context.emotion {
        Some(e) => table.add_row(vec![
            "emotion".to_string(),
            format!("{} ({:?})", e.raw_key, e.polarity).to_lowercase(),
            format!("{:.2}", e.score),
            e.localized_label.clone(),
        ]),
        None => table.add_row(vec!["emotion", "-", "-", "-"]),
    };

    format!(
        "{}\nPeople: {}\nIndoor: {}",
        table,
        context.people_count,
        if context.is_indoor { "yes" } else { "no" }
    )
}
