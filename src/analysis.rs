//! Image analysis input model
//!
//! The shape produced by the image-analysis collaborator: labels, faces and a handful
//! of detection blocks the question engine accepts but does not read. Parsing is
//! lenient so the engine stays total: missing or `null` collections become empty and
//! unknown top-level keys are kept so the result can be echoed back unchanged.

use crate::error::ApiError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Descriptive tag for image content with its confidence score (0.0-1.0).
/// Provider extras (`mid`, `topicality`, ...) are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Label {
    pub fn new(description: impl Into<String>, score: f64) -> Self {
        Self {
            description: description.into(),
            score,
            attributes: Map::new(),
        }
    }
}

/// A detected face. Only the count matters to the engine; every key is carried through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Face {
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Structured result of analysing one image.
///
/// `objects`, `landmarks`, `text`, `safe_search` and `colors` are accepted but unused,
/// so they stay in [`AnalysisResult::extra`] exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    #[serde(deserialize_with = "null_as_default")]
    pub labels: Vec<Label>,
    #[serde(deserialize_with = "null_as_default")]
    pub faces: Vec<Face>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisResult {
    pub fn new(labels: Vec<Label>, faces: Vec<Face>) -> Self {
        Self {
            labels,
            faces,
            ..Self::default()
        }
    }

    /// Parse an analysis document. Only structurally invalid JSON is rejected.
    pub fn from_json_str(input: &str) -> Result<Self, ApiError> {
        serde_json::from_str(input)
            .map_err(|e| ApiError::InvalidInput(format!("Failed to parse analysis result: {}", e)))
    }

    pub fn from_json_value(value: Value) -> Result<Self, ApiError> {
        serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidInput(format!("Failed to parse analysis result: {}", e)))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
