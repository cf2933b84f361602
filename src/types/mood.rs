//! API types for mood submission, recall and the emotion catalog.

use serde::{Deserialize, Serialize};

use crate::journal::RecallSource;
use crate::mood::{Detection, EmotionCategory, MoodSubmission, SuggestionItem};

/// Request to submit a mood
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodSubmitRequest {
    /// Free-text mood description
    #[serde(default)]
    pub mood: String,

    /// Redirect negative moods toward cheerful suggestions
    #[serde(default)]
    pub mood_boost: bool,
}

/// HTML form fields; the checkbox posts `yes` when ticked
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoodForm {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub mood_boost: Option<String>,
}

impl MoodForm {
    pub fn boost(&self) -> bool {
        self.mood_boost.as_deref() == Some("yes")
    }
}

/// Label and icon of a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionSummary {
    pub key: String,
    pub label: String,
    pub icon: String,
}

impl From<&EmotionCategory> for EmotionSummary {
    fn from(category: &EmotionCategory) -> Self {
        Self {
            key: category.key.clone(),
            label: category.label.clone(),
            icon: category.icon.clone(),
        }
    }
}

/// Response from a mood submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodSubmitResponse {
    /// Trimmed input as stored
    pub mood_text: String,
    /// Absent for empty input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection: Option<Detection>,
    /// Final category display info
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionSummary>,
    pub suggestions: Vec<SuggestionItem>,
}

/// Response describing the last mood
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastMoodResponse {
    pub source: RecallSource,
    pub mood_text: String,
    pub detected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionSummary>,
    pub suggestions: Vec<SuggestionItem>,
    /// Durable record, independent of the session
    pub saved: Option<MoodSubmission>,
}

/// Catalog entry without its suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionInfo {
    pub key: String,
    pub label: String,
    pub icon: String,
    pub keywords: Vec<String>,
    pub suggestion_count: usize,
}

/// Response listing the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEmotionsResponse {
    pub emotions: Vec<EmotionInfo>,
    pub default: String,
}

/// A single emotion with every suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionDetailResponse {
    pub key: String,
    pub label: String,
    pub icon: String,
    pub keywords: Vec<String>,
    pub suggestions: Vec<SuggestionItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_request_defaults() {
        let req: MoodSubmitRequest = serde_json::from_str(r#"{"mood": "so calm"}"#).unwrap();
        assert_eq!(req.mood, "so calm");
        assert!(!req.mood_boost);

        let req: MoodSubmitRequest = serde_json::from_str("{}").unwrap();
        assert!(req.mood.is_empty());
    }

    #[test]
    fn test_form_boost_flag() {
        let form = MoodForm {
            mood: "sad".to_string(),
            mood_boost: Some("yes".to_string()),
        };
        assert!(form.boost());

        let form = MoodForm {
            mood_boost: Some("no".to_string()),
            ..MoodForm::default()
        };
        assert!(!form.boost());
        assert!(!MoodForm::default().boost());
    }

    #[test]
    fn test_empty_submit_response_skips_detection() {
        let resp = MoodSubmitResponse {
            mood_text: String::new(),
            detection: None,
            emotion: None,
            suggestions: vec![],
        };

        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("detection"));
        assert!(!json.contains("emotion"));
        assert!(json.contains("suggestions"));
    }

    #[test]
    fn test_last_mood_source_serialization() {
        let resp = LastMoodResponse {
            source: RecallSource::Store,
            mood_text: "older".to_string(),
            detected: Some("lonely".to_string()),
            emotion: None,
            suggestions: vec![],
            saved: Some(MoodSubmission::new("older", Some("lonely".to_string()))),
        };

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["source"], "store");
        assert_eq!(json["saved"]["detected"], "lonely");
    }
}
