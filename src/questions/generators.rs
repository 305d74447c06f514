//! Per-category question generators.
//!
//! Each generator is a pure function of the analysis, the extracted context and the
//! template table, and returns its questions in emission order.

use crate::analysis::AnalysisResult;
use crate::context::ContextSignals;
use crate::questions::templates::{render, QuestionTemplates};
use crate::questions::{Question, QuestionCategory, QuestionLevel};

/// Emotion score a temporal reflective question requires (strictly greater).
pub const EMOTION_REFLECTIVE_THRESHOLD: f64 = 0.8;

pub type GeneratorFn = fn(&QuestionTemplates, &AnalysisResult, &ContextSignals) -> Vec<Question>;

pub fn generator_for(category: QuestionCategory) -> GeneratorFn {
    match category {
        QuestionCategory::Temporal => temporal,
        QuestionCategory::Sensory => sensory,
        QuestionCategory::Relational => relational,
        QuestionCategory::Identity => identity,
    }
}

pub fn temporal(
    templates: &QuestionTemplates,
    _analysis: &AnalysisResult,
    context: &ContextSignals,
) -> Vec<Question> {
    let mut questions = vec![Question::new(
        QuestionCategory::Temporal,
        QuestionLevel::Basic,
        templates.temporal_basic.as_str(),
    )];

    if let Some(activity) = &context.activity {
        questions.push(Question::new(
            QuestionCategory::Temporal,
            QuestionLevel::Context,
            render(
                &templates.activity_motivation,
                &[("activity", activity.localized_label.as_str())],
            ),
        ));
    }

    if context
        .emotion
        .as_ref()
        .is_some_and(|e| e.score > EMOTION_REFLECTIVE_THRESHOLD)
    {
        questions.push(Question::new(
            QuestionCategory::Temporal,
            QuestionLevel::Reflective,
            templates.emotion_influence.as_str(),
        ));
    }

    questions
}

pub fn sensory(
    templates: &QuestionTemplates,
    _analysis: &AnalysisResult,
    context: &ContextSignals,
) -> Vec<Question> {
    let mut questions = Vec::new();

    if let Some(location) = &context.location {
        questions.push(Question::new(
            QuestionCategory::Sensory,
            QuestionLevel::Basic,
            render(
                &templates.location_senses,
                &[("location", location.localized_label.as_str())],
            ),
        ));
    }

    if let (Some(weather), Some(time)) = (&context.weather, &context.time_of_day) {
        questions.push(Question::new(
            QuestionCategory::Sensory,
            QuestionLevel::Context,
            render(
                &templates.weather_time,
                &[
                    ("time", time.localized_label.as_str()),
                    ("weather", weather.localized_label.as_str()),
                ],
            ),
        ));
    }

    let space = if context.is_indoor {
        &templates.indoor_space
    } else {
        &templates.outdoor_space
    };
    questions.push(Question::new(
        QuestionCategory::Sensory,
        QuestionLevel::Reflective,
        render(&templates.space_atmosphere, &[("space", space.as_str())]),
    ));

    questions
}

pub fn relational(
    templates: &QuestionTemplates,
    _analysis: &AnalysisResult,
    context: &ContextSignals,
) -> Vec<Question> {
    let mut questions = Vec::new();

    if context.people_count > 0 {
        questions.push(Question::new(
            QuestionCategory::Relational,
            QuestionLevel::Basic,
            templates.relational_basic.as_str(),
        ));
        if context.people_count > 1 {
            questions.push(Question::new(
                QuestionCategory::Relational,
                QuestionLevel::Context,
                templates.conversation.as_str(),
            ));
        }
    }

    let positive = context.emotion.as_ref().is_some_and(|e| e.is_positive());
    if context.activity.is_some() || positive {
        questions.push(Question::new(
            QuestionCategory::Relational,
            QuestionLevel::Reflective,
            templates.relational_meaning.as_str(),
        ));
    }

    questions
}

/// Fires only when some label is exactly an achievement term.
pub fn identity(
    templates: &QuestionTemplates,
    analysis: &AnalysisResult,
    _context: &ContextSignals,
) -> Vec<Question> {
    let achieved = analysis
        .labels
        .iter()
        .any(|label| templates.is_achievement(&label.description.to_lowercase()));
    if !achieved {
        return Vec::new();
    }

    vec![
        Question::new(
            QuestionCategory::Identity,
            QuestionLevel::Basic,
            templates.identity_basic.as_str(),
        ),
        Question::new(
            QuestionCategory::Identity,
            QuestionLevel::Reflective,
            templates.identity_reflective.as_str(),
        ),
    ]
}
