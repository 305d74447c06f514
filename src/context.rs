//! Context Extraction
//!
//! Reduces an [`AnalysisResult`] to a compact [`ContextSignals`] summary in a single
//! pass over its labels. Every field keeps the last matching label in label order;
//! confidence scores do not decide between competing labels.

use crate::analysis::AnalysisResult;
use crate::translation::TermLookup;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

const POSITIVE_EMOTIONS: &[&str] = &["happiness", "joy", "fun", "smile"];
const NEGATIVE_EMOTIONS: &[&str] = &["sadness", "serious", "anger"];
const PLACE_TERMS: &[&str] = &[
    "beach",
    "mountain",
    "park",
    "restaurant",
    "house",
    "office",
    "sea",
];
const ACTIVITY_TERMS: &[&str] = &[
    "party",
    "wedding",
    "graduation",
    "travel",
    "sport",
    "dining",
    "vacation",
];
const INDOOR_TERMS: &[&str] = &["indoor", "room", "interior"];
const TIME_TERMS: &[&str] = &["morning", "afternoon", "evening", "night"];
const WEATHER_TERMS: &[&str] = &["sunny", "rainy", "cloudy", "snowy"];

/// One derived field: the lower-cased label it came from, its score and display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    #[serde(rename = "type")]
    pub raw_key: String,
    pub score: f64,
    #[serde(rename = "label")]
    pub localized_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionSignal {
    #[serde(rename = "type")]
    pub polarity: Polarity,
    #[serde(rename = "key")]
    pub raw_key: String,
    pub score: f64,
    #[serde(rename = "label")]
    pub localized_label: String,
}

impl EmotionSignal {
    pub fn is_positive(&self) -> bool {
        self.polarity == Polarity::Positive
    }
}

/// Per-request summary of an image used to drive question generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextSignals {
    pub location: Option<Signal>,
    pub activity: Option<Signal>,
    pub emotion: Option<EmotionSignal>,
    pub time_of_day: Option<Signal>,
    pub weather: Option<Signal>,
    pub people_count: usize,
    pub is_indoor: bool,
}

/// Which fields a single lower-cased label feeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelMatch {
    pub emotion: Option<Polarity>,
    pub location: bool,
    pub activity: bool,
    pub indoor: bool,
    pub time_of_day: bool,
    /// Only set when `time_of_day` is not.
    pub weather: bool,
}

impl LabelMatch {
    pub fn classify(key: &str) -> Self {
        let emotion = if POSITIVE_EMOTIONS.contains(&key) {
            Some(Polarity::Positive)
        } else if NEGATIVE_EMOTIONS.contains(&key) {
            Some(Polarity::Negative)
        } else {
            None
        };
        let time_of_day = contains_any(key, TIME_TERMS);

        Self {
            emotion,
            location: contains_any(key, PLACE_TERMS),
            activity: contains_any(key, ACTIVITY_TERMS),
            indoor: contains_any(key, INDOOR_TERMS),
            time_of_day,
            weather: !time_of_day && contains_any(key, WEATHER_TERMS),
        }
    }

    /// True when the label populates a field that carries a localized label.
    pub fn needs_label(&self) -> bool {
        self.emotion.is_some() || self.location || self.activity || self.time_of_day || self.weather
    }
}

fn contains_any(key: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| key.contains(term))
}

pub struct ContextExtractor {
    lookup: Arc<dyn TermLookup>,
}

impl ContextExtractor {
    pub fn new(lookup: Arc<dyn TermLookup>) -> Self {
        Self { lookup }
    }

    pub async fn extract(&self, analysis: &AnalysisResult) -> ContextSignals {
        let mut signals = ContextSignals {
            people_count: analysis.faces.len(),
            ..ContextSignals::default()
        };

        for label in &analysis.labels {
            let key = label.description.to_lowercase();
            let matched = LabelMatch::classify(&key);

            if matched.indoor {
                signals.is_indoor = true;
            }
            if !matched.needs_label() {
                continue;
            }

            let signal = Signal {
                localized_label: self.lookup.translate(&key).await,
                raw_key: key,
                score: label.score,
            };
            debug!(
                key = %signal.raw_key,
                score = signal.score,
                label = %signal.localized_label,
                ?matched,
                "Label matched context signal"
            );

            if let Some(polarity) = matched.emotion {
                signals.emotion = Some(EmotionSignal {
                    polarity,
                    raw_key: signal.raw_key.clone(),
                    score: signal.score,
                    localized_label: signal.localized_label.clone(),
                });
            }
            if matched.location {
                signals.location = Some(signal.clone());
            }
            if matched.activity {
                signals.activity = Some(signal.clone());
            }
            if matched.time_of_day {
                signals.time_of_day = Some(signal.clone());
            }
            if matched.weather {
                signals.weather = Some(signal);
            }
        }

        signals
    }
}
