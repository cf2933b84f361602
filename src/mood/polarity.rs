//! Polarity fallback: bucket a sentiment score and pick a candidate category.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::catalog::Catalog;
use super::sentiment::SentimentScorer;

/// Scores above this are positive
pub const POSITIVE_THRESHOLD: f32 = 0.25;
/// Scores below this are negative
pub const NEGATIVE_THRESHOLD: f32 = -0.25;

/// Coarse sentiment class of a polarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolarityBucket {
    Positive,
    Neutral,
    Negative,
}

impl PolarityBucket {
    pub const ALL: [PolarityBucket; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    /// Bucket a polarity score. Both thresholds are exclusive.
    pub fn from_score(score: f32) -> Self {
        if score > POSITIVE_THRESHOLD {
            Self::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for PolarityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolarityBucket::Positive => write!(f, "positive"),
            PolarityBucket::Neutral => write!(f, "neutral"),
            PolarityBucket::Negative => write!(f, "negative"),
        }
    }
}

/// Result of the polarity fallback
#[derive(Debug, Clone, PartialEq)]
pub enum PolarityOutcome {
    /// The scorer produced a score and a candidate was drawn from its bucket
    Scored {
        key: String,
        score: f32,
        bucket: PolarityBucket,
    },
    /// The scorer failed; the default category was used
    Fallback { key: String },
}

impl PolarityOutcome {
    pub fn key(&self) -> &str {
        match self {
            Self::Scored { key, .. } | Self::Fallback { key } => key,
        }
    }
}

/// Classifies text by sentiment polarity when no keyword matched
#[derive(Clone)]
pub struct PolarityClassifier {
    scorer: Arc<dyn SentimentScorer>,
}

impl PolarityClassifier {
    pub fn new(scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { scorer }
    }

    /// Never fails: a scorer error degrades to the catalog default.
    pub fn classify<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        text: &str,
        rng: &mut R,
    ) -> PolarityOutcome {
        let score = match self.scorer.polarity(text) {
            Ok(score) => score,
            Err(e) => {
                warn!(error = %e, "Sentiment scoring failed, using default emotion");
                return PolarityOutcome::Fallback {
                    key: catalog.default_category().key.clone(),
                };
            }
        };

        let bucket = PolarityBucket::from_score(score);
        match catalog.bucket(bucket).choose(rng) {
            Some(key) => PolarityOutcome::Scored {
                key: key.clone(),
                score,
                bucket,
            },
            None => PolarityOutcome::Fallback {
                key: catalog.default_category().key.clone(),
            },
        }
    }
}

impl std::fmt::Debug for PolarityClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolarityClassifier").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::sentiment::{LexiconScorer, SentimentError};
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
            Err(SentimentError::Unavailable("lexicon missing".to_string()))
        }
    }

    fn classify_with(scorer: impl SentimentScorer + 'static, seed: u64) -> PolarityOutcome {
        let classifier = PolarityClassifier::new(Arc::new(scorer));
        let mut rng = StdRng::seed_from_u64(seed);
        classifier.classify(&Catalog::reference(), "whatever", &mut rng)
    }

    #[test]
    fn test_bucket_thresholds() {
        assert_eq!(PolarityBucket::from_score(0.9), PolarityBucket::Positive);
        assert_eq!(PolarityBucket::from_score(0.26), PolarityBucket::Positive);
        assert_eq!(PolarityBucket::from_score(0.25), PolarityBucket::Neutral);
        assert_eq!(PolarityBucket::from_score(0.0), PolarityBucket::Neutral);
        assert_eq!(PolarityBucket::from_score(-0.25), PolarityBucket::Neutral);
        assert_eq!(PolarityBucket::from_score(-0.26), PolarityBucket::Negative);
        assert_eq!(PolarityBucket::from_score(-1.0), PolarityBucket::Negative);
    }

    #[test]
    fn test_bucket_display() {
        assert_eq!(PolarityBucket::Positive.to_string(), "positive");
        assert_eq!(PolarityBucket::Neutral.to_string(), "neutral");
        assert_eq!(PolarityBucket::Negative.to_string(), "negative");
    }

    #[test]
    fn test_positive_candidates_only() {
        for seed in 0..50 {
            let outcome = classify_with(FixedScorer(0.8), seed);
            assert!(["happy", "energetic"].contains(&outcome.key()));
        }
    }

    #[test]
    fn test_negative_candidates_only() {
        for seed in 0..50 {
            let outcome = classify_with(FixedScorer(-0.8), seed);
            assert!(["sad", "lonely", "stressed"].contains(&outcome.key()));
        }
    }

    #[test]
    fn test_neutral_is_calm() {
        let outcome = classify_with(FixedScorer(0.1), 7);
        assert_eq!(
            outcome,
            PolarityOutcome::Scored {
                key: "calm".to_string(),
                score: 0.1,
                bucket: PolarityBucket::Neutral,
            }
        );
    }

    #[test]
    fn test_all_positive_candidates_reachable() {
        let seen: std::collections::HashSet<String> = (0..100)
            .map(|seed| classify_with(FixedScorer(0.5), seed).key().to_string())
            .collect();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_scorer_failure_falls_back_to_calm() {
        let outcome = classify_with(BrokenScorer, 1);
        assert_eq!(
            outcome,
            PolarityOutcome::Fallback {
                key: "calm".to_string()
            }
        );
    }

    #[test]
    fn test_lexicon_scorer_end_to_end() {
        let classifier = PolarityClassifier::new(Arc::new(LexiconScorer::new()));
        let catalog = Catalog::reference();
        let mut rng = StdRng::seed_from_u64(3);

        let outcome = classifier.classify(&catalog, "everything feels awful and terrible", &mut rng);
        assert!(matches!(
            outcome,
            PolarityOutcome::Scored {
                bucket: PolarityBucket::Negative,
                ..
            }
        ));

        let outcome = classifier.classify(&catalog, "I went to the store", &mut rng);
        assert_eq!(outcome.key(), "calm");
    }
}
