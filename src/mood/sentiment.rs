//! Lexicon-based sentiment polarity scoring.
//!
//! Words are scored from a built-in polarity lexicon. An intensifier right
//! before a scored word scales it, a negator flips and halves it. The text
//! polarity is the mean of the scored words, `0.0` when none are known.

use std::collections::HashMap;

use thiserror::Error;

/// Errors from a sentiment scorer
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("Sentiment scorer unavailable: {0}")]
    Unavailable(String),

    #[error("Sentiment scoring failed: {0}")]
    Failed(String),
}

/// Scores text on a continuous negative-to-positive scale
pub trait SentimentScorer: Send + Sync {
    /// Polarity in `[-1.0, 1.0]`
    fn polarity(&self, text: &str) -> Result<f32, SentimentError>;
}

/// Applied to a scored word preceded by a negator
const NEGATION_FACTOR: f32 = -0.5;

/// How many unscored tokens a pending modifier survives
const MODIFIER_WINDOW: usize = 2;

const INTENSIFIERS: &[(&str, f32)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("super", 1.4),
    ("totally", 1.3),
];

const NEGATORS: &[&str] = &["not", "never", "no", "hardly"];

const LEXICON: &[(&str, f32)] = &[
    // positive
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("bright", 0.7),
    ("brilliant", 0.9),
    ("cheerful", 0.8),
    ("comfortable", 0.4),
    ("delighted", 0.7),
    ("excellent", 1.0),
    ("fantastic", 0.9),
    ("fine", 0.42),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("grateful", 0.6),
    ("great", 0.8),
    ("happy", 0.8),
    ("hopeful", 0.5),
    ("inspired", 0.6),
    ("interesting", 0.5),
    ("lovely", 0.5),
    ("lucky", 0.33),
    ("motivated", 0.5),
    ("nice", 0.6),
    ("ok", 0.5),
    ("okay", 0.5),
    ("optimistic", 0.6),
    ("perfect", 1.0),
    ("pleasant", 0.73),
    ("productive", 0.5),
    ("proud", 0.8),
    ("satisfied", 0.5),
    ("successful", 0.75),
    ("sunny", 0.5),
    ("thankful", 0.5),
    ("thrilled", 0.8),
    ("warm", 0.6),
    ("wonderful", 1.0),
    ("yay", 0.8),
    // negative
    ("afraid", -0.6),
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("bored", -0.5),
    ("boring", -1.0),
    ("difficult", -0.5),
    ("disappointed", -0.75),
    ("dreadful", -0.9),
    ("exhausted", -0.4),
    ("fail", -0.5),
    ("failed", -0.5),
    ("gloomy", -0.6),
    ("grim", -0.6),
    ("hate", -0.8),
    ("hopeless", -0.8),
    ("horrible", -1.0),
    ("hurt", -0.5),
    ("meh", -0.2),
    ("nervous", -0.4),
    ("pain", -0.6),
    ("painful", -0.7),
    ("poor", -0.4),
    ("sad", -0.5),
    ("scared", -0.6),
    ("sick", -0.71),
    ("sorry", -0.5),
    ("stupid", -0.8),
    ("terrible", -1.0),
    ("tired", -0.4),
    ("ugly", -0.7),
    ("upset", -0.6),
    ("worried", -0.5),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// Built-in lexicon scorer
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: HashMap<&'static str, f32>,
    intensifiers: HashMap<&'static str, f32>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    fn is_negator(token: &str) -> bool {
        NEGATORS.contains(&token) || token.ends_with("n't")
    }

    /// Score the text, returning `0.0` when no lexicon word occurs
    pub fn score(&self, text: &str) -> f32 {
        let mut scores = Vec::new();
        let mut intensity = 1.0f32;
        let mut negated = false;
        let mut window = 0usize;

        for token in tokenize(text) {
            let token = token.as_str();

            if let Some(factor) = self.intensifiers.get(token) {
                intensity *= factor;
                window = MODIFIER_WINDOW;
                continue;
            }

            if Self::is_negator(token) {
                negated = true;
                window = MODIFIER_WINDOW;
                continue;
            }

            if let Some(polarity) = self.lexicon.get(token) {
                let mut value = (polarity * intensity).clamp(-1.0, 1.0);
                if negated {
                    value *= NEGATION_FACTOR;
                }
                scores.push(value);
                intensity = 1.0;
                negated = false;
                window = 0;
                continue;
            }

            if window > 0 {
                window -= 1;
                if window == 0 {
                    intensity = 1.0;
                    negated = false;
                }
            }
        }

        if scores.is_empty() {
            return 0.0;
        }

        let mean = scores.iter().sum::<f32>() / scores.len() as f32;
        mean.clamp(-1.0, 1.0)
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> Result<f32, SentimentError> {
        Ok(self.score(text))
    }
}

/// Lowercase word tokens, keeping apostrophes inside words
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
        .map(|t| {
            t.trim_matches(|c: char| c == '\'' || c == '’')
                .replace('’', "'")
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f32 {
        LexiconScorer::new().score(text)
    }

    #[test]
    fn test_unknown_words_are_neutral() {
        assert_eq!(score("I went to the store"), 0.0);
        assert_eq!(score(""), 0.0);
        assert_eq!(score("!!! ???"), 0.0);
    }

    #[test]
    fn test_positive_and_negative() {
        assert!(score("the weather is nice and pleasant") > 0.25);
        assert!(score("everything feels awful and terrible") < -0.25);
    }

    #[test]
    fn test_mean_of_scored_words() {
        // nice 0.6, bad -0.7
        assert!((score("nice but bad") - (-0.05)).abs() < 1e-6);
    }

    #[test]
    fn test_intensifier_scales_and_clamps() {
        assert!((score("very nice") - 0.78).abs() < 1e-6);
        assert_eq!(score("extremely wonderful"), 1.0);
    }

    #[test]
    fn test_negation_flips_and_halves() {
        assert!((score("not nice") - (-0.3)).abs() < 1e-6);
        assert!((score("it isn't bad") - 0.35).abs() < 1e-6);
        assert!((score("don’t feel bad") - 0.35).abs() < 1e-6);
    }

    #[test]
    fn test_only_listed_modifiers_apply() {
        assert!((score("quite nice") - 0.6).abs() < 1e-6);
        assert!((score("cannot nice") - 0.6).abs() < 1e-6);
        assert!((score("can't nice") - (-0.3)).abs() < 1e-6);
    }

    #[test]
    fn test_modifier_expires() {
        // "not" is too far from "nice" to apply
        assert!((score("not at all the nice") - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_case_and_punctuation_ignored() {
        assert!((score("NICE!") - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_score_within_range() {
        let text = "awful terrible horrible worst extremely awful";
        let polarity = score(text);
        assert!((-1.0..=1.0).contains(&polarity));
    }
}
