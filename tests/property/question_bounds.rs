//! Property-based tests for question set bounds and determinism

use proptest::prelude::*;
use reminisce::analysis::{AnalysisResult, Face, Label};
use reminisce::questions::{
    QuestionCategory, QuestionLevel, QuestionTemplates, MAX_QUESTIONS, MIN_QUESTIONS,
    PER_CATEGORY_CAP,
};
use reminisce::QuestionEngine;

const VOCABULARY: &[&str] = &[
    "Beach", "Mountain", "Park", "Restaurant", "House", "Office", "Sea", "Party", "Wedding",
    "Graduation", "Travel", "Sport", "Dining", "Vacation", "Ceremony", "Award", "Performance",
    "Happiness", "Joy", "Fun", "Smile", "Sadness", "Serious", "Anger", "Morning", "Afternoon",
    "Evening", "Night", "Sunny", "Rainy", "Cloudy", "Snowy", "Indoor", "Room", "Interior",
    "Family", "Tree", "Sky", "Dog", "Cake",
];

fn label_strategy() -> impl Strategy<Value = Label> {
    prop_oneof![
        (prop::sample::select(VOCABULARY), 0.0f64..=1.0)
            .prop_map(|(d, s)| Label::new(d, s)),
        ("[a-zA-Z ]{0,16}", 0.0f64..=1.0).prop_map(|(d, s)| Label::new(d, s)),
    ]
}

fn analysis_strategy() -> impl Strategy<Value = AnalysisResult> {
    (prop::collection::vec(label_strategy(), 0..12), 0usize..6).prop_map(|(labels, faces)| {
        AnalysisResult::new(labels, vec![Face::default(); faces])
    })
}

fn generate(analysis: AnalysisResult) -> reminisce::GeneratedQuestionSet {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap()
        .block_on(QuestionEngine::offline().generate(analysis))
}

fn category_rank(category: QuestionCategory) -> usize {
    QuestionCategory::ALL
        .iter()
        .position(|c| *c == category)
        .unwrap()
}

proptest! {
    #[test]
    fn question_count_stays_within_bounds(analysis in analysis_strategy()) {
        let set = generate(analysis);
        prop_assert!(set.questions.len() >= MIN_QUESTIONS);
        prop_assert!(set.questions.len() <= MAX_QUESTIONS);
    }

    #[test]
    fn first_question_is_temporal_basic(analysis in analysis_strategy()) {
        let set = generate(analysis);
        let first = &set.questions[0];
        prop_assert_eq!(first.category, QuestionCategory::Temporal);
        prop_assert_eq!(first.level, QuestionLevel::Basic);
        prop_assert_eq!(&first.text, &QuestionTemplates::korean().temporal_basic);
    }

    #[test]
    fn generated_questions_are_grouped_and_capped(analysis in analysis_strategy()) {
        let filler = QuestionTemplates::korean().filler;
        let set = generate(analysis);
        let generated: Vec<_> = set.questions.iter().filter(|q| q.text != filler).collect();

        for pair in generated.windows(2) {
            prop_assert!(category_rank(pair[0].category) <= category_rank(pair[1].category));
        }
        for category in QuestionCategory::ALL {
            let count = generated.iter().filter(|q| q.category == category).count();
            prop_assert!(count <= PER_CATEGORY_CAP);
        }
        if set.questions.len() > MIN_QUESTIONS {
            prop_assert!(set.questions.iter().all(|q| q.text != filler));
        }
    }

    #[test]
    fn generation_is_deterministic(analysis in analysis_strategy()) {
        let first = generate(analysis.clone());
        let second = generate(analysis);
        prop_assert_eq!(first.questions, second.questions);
        prop_assert_eq!(first.context, second.context);
    }

    #[test]
    fn people_count_matches_faces(analysis in analysis_strategy()) {
        let faces = analysis.faces.len();
        let set = generate(analysis);
        prop_assert_eq!(set.context.people_count, faces);
    }
}
