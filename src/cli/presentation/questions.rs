//! Question set presentation: text table and json wire format.

use crate::error::ApiError;
use crate::questions::GeneratedQuestionSet;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

/// `{questions, analysis_result}` as pretty JSON.
pub fn format_question_set_json(set: &GeneratedQuestionSet) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(set)?)
}

pub fn format_question_set_text(set: &GeneratedQuestionSet) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Category", "Level", "Question"]);
    for (i, question) in set.questions.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            question.category.to_string(),
            format!("{} ({})", u8::from(question.level), question.level),
            question.text.clone(),
        ]);
    }
    format!("{}\n{} questions", table, set.questions.len())
}
