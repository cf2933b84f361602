//! Mood classification engine.
//!
//! Runs keyword lookup first, falls back to sentiment polarity, then applies
//! the optional boost override as a post-processing step.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::Catalog;
use super::keywords::match_keyword;
use super::polarity::{PolarityBucket, PolarityClassifier, PolarityOutcome};
use super::sentiment::{LexiconScorer, SentimentScorer};

/// How the raw category was found
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum DetectionMethod {
    /// A registered keyword occurred in the text
    Keyword { keyword: String },
    /// Drawn from the polarity bucket of the sentiment score
    Polarity { score: f32, bucket: PolarityBucket },
    /// The sentiment scorer failed; default category
    Fallback,
}

/// Classification result for a non-empty submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Final category after the boost override
    pub category: String,
    /// Category before the boost override
    pub raw_category: String,
    /// How `raw_category` was found
    #[serde(flatten)]
    pub method: DetectionMethod,
    /// Whether the boost override replaced the raw category
    pub boosted: bool,
}

/// Stateless classifier over a shared catalog
#[derive(Debug, Clone)]
pub struct MoodEngine {
    catalog: Arc<Catalog>,
    polarity: PolarityClassifier,
}

impl MoodEngine {
    pub fn new(catalog: Arc<Catalog>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self {
            catalog,
            polarity: PolarityClassifier::new(scorer),
        }
    }

    /// Engine using the built-in lexicon scorer
    pub fn with_lexicon(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, Arc::new(LexiconScorer::new()))
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Classify `text`, returning `None` for empty or whitespace-only input.
    pub fn classify<R: Rng + ?Sized>(
        &self,
        text: &str,
        boost: bool,
        rng: &mut R,
    ) -> Option<Detection> {
        let (raw_category, method) = self.detect(text, rng)?;

        let (category, boosted) = match self.catalog.boost().redirect(&raw_category) {
            Some(target) if boost => (target.to_string(), true),
            _ => (raw_category.clone(), false),
        };

        debug!(
            raw = %raw_category,
            category = %category,
            method = ?method,
            boosted,
            "Mood classified"
        );

        Some(Detection {
            category,
            raw_category,
            method,
            boosted,
        })
    }

    /// Final category key only
    pub fn classify_key<R: Rng + ?Sized>(
        &self,
        text: &str,
        boost: bool,
        rng: &mut R,
    ) -> Option<String> {
        self.classify(text, boost, rng).map(|d| d.category)
    }

    /// Raw detection: keyword first, polarity otherwise
    fn detect<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Option<(String, DetectionMethod)> {
        if text.trim().is_empty() {
            return None;
        }

        if let Some(hit) = match_keyword(self.catalog.keyword_rules(), text) {
            return Some((
                hit.key.to_string(),
                DetectionMethod::Keyword {
                    keyword: hit.keyword.to_string(),
                },
            ));
        }

        let detected = match self.polarity.classify(&self.catalog, text, rng) {
            PolarityOutcome::Scored { key, score, bucket } => {
                (key, DetectionMethod::Polarity { score, bucket })
            }
            PolarityOutcome::Fallback { key } => (key, DetectionMethod::Fallback),
        };
        Some(detected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::sentiment::SentimentError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct FixedScorer(f32);

    impl SentimentScorer for FixedScorer {
        fn polarity(&self, _text: &str) -> Result<f32, SentimentError> {
            Ok(self.0)
        }
    }

    struct BrokenScorer;

    impl SentimentScorer for BrokenScorer {
        fn polarity(&self, _text: &str) -> Result<f32, SentimentError> {
            Err(SentimentError::Failed("boom".to_string()))
        }
    }

    fn engine() -> MoodEngine {
        MoodEngine::with_lexicon(Arc::new(Catalog::reference()))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1234)
    }

    #[test]
    fn test_happy_keyword() {
        let detection = engine()
            .classify("I feel so happy today", false, &mut rng())
            .unwrap();
        assert_eq!(detection.category, "happy");
        assert_eq!(detection.raw_category, "happy");
        assert_eq!(
            detection.method,
            DetectionMethod::Keyword {
                keyword: "happy".to_string()
            }
        );
        assert!(!detection.boosted);
    }

    #[test]
    fn test_boost_is_noop_for_happy() {
        let detection = engine()
            .classify("I feel so happy today", true, &mut rng())
            .unwrap();
        assert_eq!(detection.category, "happy");
        assert!(!detection.boosted);
    }

    #[test]
    fn test_sad_and_alone_boosted() {
        let detection = engine()
            .classify("I am so sad and alone", true, &mut rng())
            .unwrap();
        assert_eq!(detection.raw_category, "sad");
        assert_eq!(detection.category, "happy");
        assert!(detection.boosted);
    }

    #[test]
    fn test_boost_law() {
        let engine = engine();
        let texts = [
            ("so sad", "sad"),
            ("totally stressed", "stressed"),
            ("feeling lonely", "lonely"),
            ("really angry", "angry"),
        ];
        for (text, raw) in texts {
            let boosted = engine.classify(text, true, &mut rng()).unwrap();
            assert_eq!(boosted.raw_category, raw);
            assert_eq!(boosted.category, "happy");

            let plain = engine.classify(text, false, &mut rng()).unwrap();
            assert_eq!(plain.category, raw);
            assert!(!plain.boosted);
        }
    }

    #[test]
    fn test_boost_leaves_other_categories() {
        let engine = engine();
        for (text, key) in [
            ("so calm", "calm"),
            ("in love", "romantic"),
            ("pumped up", "energetic"),
        ] {
            assert_eq!(engine.classify_key(text, true, &mut rng()).unwrap(), key);
        }
    }

    #[test]
    fn test_empty_input() {
        let engine = engine();
        assert_eq!(engine.classify("", false, &mut rng()), None);
        assert_eq!(engine.classify("", true, &mut rng()), None);
        assert_eq!(engine.classify("   \n\t", true, &mut rng()), None);
    }

    #[test]
    fn test_amazing_scenario() {
        assert_eq!(
            engine()
                .classify_key("life is wonderful and amazing", false, &mut rng())
                .unwrap(),
            "happy"
        );
    }

    #[test]
    fn test_polarity_fallback_positive() {
        let detection = engine()
            .classify("the weather is nice and pleasant", false, &mut rng())
            .unwrap();
        assert!(["happy", "energetic"].contains(&detection.category.as_str()));
        assert!(matches!(
            detection.method,
            DetectionMethod::Polarity {
                bucket: PolarityBucket::Positive,
                ..
            }
        ));
    }

    #[test]
    fn test_polarity_fallback_neutral() {
        let detection = engine()
            .classify("I went to the store", false, &mut rng())
            .unwrap();
        assert_eq!(detection.category, "calm");
    }

    #[test]
    fn test_override_applies_after_polarity() {
        let engine = MoodEngine::new(Arc::new(Catalog::reference()), Arc::new(FixedScorer(-0.9)));
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let detection = engine.classify("the day went by", true, &mut rng).unwrap();
            assert!(["sad", "lonely", "stressed"].contains(&detection.raw_category.as_str()));
            assert_eq!(detection.category, "happy");
            assert!(detection.boosted);
        }
    }

    #[test]
    fn test_keyword_beats_polarity() {
        let engine = MoodEngine::new(Arc::new(Catalog::reference()), Arc::new(FixedScorer(-0.9)));
        let detection = engine.classify("so relaxed", false, &mut rng()).unwrap();
        assert_eq!(detection.category, "calm");
    }

    #[test]
    fn test_scorer_failure_never_surfaces() {
        let engine = MoodEngine::new(Arc::new(Catalog::reference()), Arc::new(BrokenScorer));
        let detection = engine.classify("the day went by", true, &mut rng()).unwrap();
        assert_eq!(detection.category, "calm");
        assert_eq!(detection.method, DetectionMethod::Fallback);
    }

    #[test]
    fn test_detection_serialization() {
        let detection = engine()
            .classify("I am so sad and alone", true, &mut rng())
            .unwrap();
        let json = serde_json::to_value(&detection).unwrap();
        assert_eq!(json["category"], "happy");
        assert_eq!(json["raw_category"], "sad");
        assert_eq!(json["method"], "keyword");
        assert_eq!(json["keyword"], "sad");
        assert_eq!(json["boosted"], true);
    }
}
