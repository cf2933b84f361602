//! Mood classification and suggestion engine.
//!
//! Free text is classified into an emotion category by keyword lookup, with a
//! sentiment-polarity fallback and an optional "cheer me up" override. A
//! category's suggestions are then sampled at random.

pub mod catalog;
pub mod emotions;
pub mod engine;
pub mod keywords;
pub mod polarity;
pub mod sampler;
pub mod sentiment;

pub use catalog::{
    BoostRule, Catalog, CatalogError, EmotionCategory, KeywordRule, PolarityBuckets,
    SuggestionItem,
};
pub use engine::{Detection, DetectionMethod, MoodEngine};
pub use keywords::{match_keyword, KeywordMatch};
pub use polarity::{PolarityBucket, PolarityClassifier, PolarityOutcome};
pub use sampler::{SuggestionSampler, DEFAULT_SAMPLE_SIZE};
pub use sentiment::{LexiconScorer, SentimentError, SentimentScorer};

use serde::{Deserialize, Serialize};

/// The most recent mood submission, as echoed by the session and persisted
/// by the mood store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodSubmission {
    /// Raw (trimmed) user input
    #[serde(default)]
    pub mood_text: String,
    /// Detected category key, absent for empty input
    #[serde(default)]
    pub detected: Option<String>,
}

impl MoodSubmission {
    pub fn new(mood_text: impl Into<String>, detected: Option<String>) -> Self {
        Self {
            mood_text: mood_text.into(),
            detected,
        }
    }
}
