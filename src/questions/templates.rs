//! Question template table.
//!
//! Loaded once and shared read-only by the generators. Dynamic templates carry
//! `{slot}` placeholders filled by [`render`].

use serde::{Deserialize, Serialize};

/// Fixed and slotted question texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionTemplates {
    pub temporal_basic: String,
    /// Slot: `{activity}`
    pub activity_motivation: String,
    pub emotion_influence: String,

    /// Slot: `{location}`
    pub location_senses: String,
    /// Slots: `{time}`, `{weather}`
    pub weather_time: String,
    /// Slot: `{space}`
    pub space_atmosphere: String,
    pub indoor_space: String,
    pub outdoor_space: String,

    pub relational_basic: String,
    pub conversation: String,
    pub relational_meaning: String,

    pub identity_basic: String,
    pub identity_reflective: String,
    /// Exact (lower-cased) label descriptions that trigger identity questions
    pub achievement_terms: Vec<String>,

    pub filler: String,
}

impl QuestionTemplates {
    pub fn korean() -> Self {
        Self {
            temporal_basic: "이 사진은 언제 찍은 것인가요?".to_string(),
            activity_motivation: "이 {activity}을(를) 계획하게 된 계기가 있었나요?".to_string(),
            emotion_influence: "이 순간의 감정이 이후의 삶에 어떤 영향을 주었나요?".to_string(),
            location_senses: "이 {location}에서의 특별한 소리나 냄새가 기억나시나요?".to_string(),
            weather_time: "{time}의 {weather} 날씨는 어떤 느낌이었나요?".to_string(),
            space_atmosphere: "이 {space} 공간의 분위기는 어떠했나요?".to_string(),
            indoor_space: "실내".to_string(),
            outdoor_space: "실외".to_string(),
            relational_basic: "사진 속 사람들은 누구인가요?".to_string(),
            conversation: "이 자리에서 서로 어떤 이야기를 나누었나요?".to_string(),
            relational_meaning: "이 순간이 서로의 관계에 어떤 의미를 가져다주었나요?".to_string(),
            identity_basic: "이 시기에 어떤 일을 하고 계셨나요?".to_string(),
            identity_reflective: "이 경험이 당신을 어떻게 성장시켰나요?".to_string(),
            achievement_terms: ["graduation", "ceremony", "award", "performance", "sport"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            filler: "이 순간에 대해 기억나는 것을 자유롭게 이야기해주세요.".to_string(),
        }
    }

    pub fn english() -> Self {
        Self {
            temporal_basic: "When was this photo taken?".to_string(),
            activity_motivation: "What prompted you to plan this {activity}?".to_string(),
            emotion_influence: "How did the feelings of this moment shape your life afterwards?"
                .to_string(),
            location_senses: "Do you remember any particular sounds or smells at this {location}?"
                .to_string(),
            weather_time: "How did the {weather} weather feel that {time}?".to_string(),
            space_atmosphere: "What was the atmosphere of this {space} space like?".to_string(),
            indoor_space: "indoor".to_string(),
            outdoor_space: "outdoor".to_string(),
            relational_basic: "Who are the people in this photo?".to_string(),
            conversation: "What did you talk about with each other there?".to_string(),
            relational_meaning: "What did this moment mean for your relationship?".to_string(),
            identity_basic: "What were you doing in your life at this time?".to_string(),
            identity_reflective: "How did this experience help you grow?".to_string(),
            achievement_terms: ["graduation", "ceremony", "award", "performance", "sport"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            filler: "Tell me freely what you remember about this moment.".to_string(),
        }
    }

    pub fn is_achievement(&self, key: &str) -> bool {
        self.achievement_terms.iter().any(|term| term == key)
    }
}

impl Default for QuestionTemplates {
    fn default() -> Self {
        Self::korean()
    }
}

/// Replace each `{name}` slot with its value in one left-to-right pass.
/// Inserted values are never rescanned; unknown slots are kept verbatim.
pub fn render(template: &str, slots: &[(&str, &str)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let filled = tail.find('}').and_then(|close| {
            let name = &tail[..close];
            slots
                .iter()
                .find(|(slot, _)| *slot == name)
                .map(|(_, value)| (*value, close + 1))
        });
        match filled {
            Some((value, consumed)) => {
                rendered.push_str(value);
                rest = &tail[consumed..];
            }
            None => {
                rendered.push('{');
                rest = tail;
            }
        }
    }

    rendered.push_str(rest);
    rendered
}
