//! Emotion catalog: categories, keyword precedence, polarity buckets and the
//! boost rule, validated once and shared read-only.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::emotions::{
    EmotionDef, BOOST_SOURCES, BOOST_TARGET, DEFAULT_EMOTION, KEYWORD_TABLE, NEGATIVE_CANDIDATES,
    NEUTRAL_CANDIDATES, POSITIVE_CANDIDATES, REFERENCE_EMOTIONS,
};
use super::polarity::PolarityBucket;

/// A recommended piece of media
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuggestionItem {
    /// Display title
    pub title: String,
    /// Lookup or search URI
    pub link: String,
}

impl SuggestionItem {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// An emotion category with its suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionCategory {
    /// Stable identifier, persisted in storage
    pub key: String,
    /// Display name
    pub label: String,
    /// Display glyph
    pub icon: String,
    /// Suggestions in display order
    pub suggestions: Vec<SuggestionItem>,
}

impl From<&EmotionDef> for EmotionCategory {
    fn from(def: &EmotionDef) -> Self {
        Self {
            key: def.key.to_string(),
            label: def.label.to_string(),
            icon: def.icon.to_string(),
            suggestions: def
                .suggestions
                .iter()
                .map(|(title, link)| SuggestionItem::new(*title, *link))
                .collect(),
        }
    }
}

/// Keywords that indicate a category, in match order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub key: String,
    pub keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new<I, S>(key: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            keywords: keywords.into_iter().map(|k| k.into().to_lowercase()).collect(),
        }
    }
}

/// Candidate categories for each polarity bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolarityBuckets {
    pub positive: Vec<String>,
    pub neutral: Vec<String>,
    pub negative: Vec<String>,
}

impl PolarityBuckets {
    pub fn get(&self, bucket: PolarityBucket) -> &[String] {
        match bucket {
            PolarityBucket::Positive => &self.positive,
            PolarityBucket::Neutral => &self.neutral,
            PolarityBucket::Negative => &self.negative,
        }
    }
}

/// Redirects negative categories to a positive one on request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoostRule {
    pub sources: Vec<String>,
    pub target: String,
}

impl BoostRule {
    /// Returns the boosted category, or `None` when the rule does not apply
    pub fn redirect(&self, key: &str) -> Option<&str> {
        self.sources
            .iter()
            .any(|source| source == key)
            .then_some(self.target.as_str())
    }
}

/// Errors raised while assembling a catalog
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog has no emotion categories")]
    Empty,

    #[error("Duplicate emotion key: {0}")]
    DuplicateKey(String),

    #[error("Unknown emotion key '{key}' referenced by {context}")]
    UnknownKey { key: String, context: &'static str },

    #[error("Polarity bucket '{0}' has no candidates")]
    EmptyBucket(PolarityBucket),
}

/// Immutable emotion configuration shared by the classifier and sampler
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<EmotionCategory>,
    keywords: Vec<KeywordRule>,
    buckets: PolarityBuckets,
    boost: BoostRule,
    default_index: usize,
}

impl Catalog {
    /// Build a catalog, checking that every referenced key exists.
    pub fn new(
        categories: Vec<EmotionCategory>,
        keywords: Vec<KeywordRule>,
        buckets: PolarityBuckets,
        boost: BoostRule,
        default_key: &str,
    ) -> Result<Self, CatalogError> {
        validate(&categories, &keywords, &buckets, &boost, default_key)?;

        let default_index = categories
            .iter()
            .position(|c| c.key == default_key)
            .unwrap_or_default();

        Ok(Self {
            categories,
            keywords,
            buckets,
            boost,
            default_index,
        })
    }

    /// The eight-emotion reference configuration.
    pub fn reference() -> Self {
        let categories: Vec<EmotionCategory> =
            REFERENCE_EMOTIONS.iter().map(EmotionCategory::from).collect();
        let default_index = categories
            .iter()
            .position(|c| c.key == DEFAULT_EMOTION)
            .unwrap_or_default();

        Self {
            categories,
            keywords: KEYWORD_TABLE
                .iter()
                .map(|(key, words)| KeywordRule::new(*key, words.iter().copied()))
                .collect(),
            buckets: PolarityBuckets {
                positive: to_owned(POSITIVE_CANDIDATES),
                neutral: to_owned(NEUTRAL_CANDIDATES),
                negative: to_owned(NEGATIVE_CANDIDATES),
            },
            boost: BoostRule {
                sources: to_owned(BOOST_SOURCES),
                target: BOOST_TARGET.to_string(),
            },
            default_index,
        }
    }

    pub fn categories(&self) -> &[EmotionCategory] {
        &self.categories
    }

    pub fn get(&self, key: &str) -> Option<&EmotionCategory> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Keyword rules in precedence order
    pub fn keyword_rules(&self) -> &[KeywordRule] {
        &self.keywords
    }

    /// Keywords registered for one category (empty if none)
    pub fn keywords_for(&self, key: &str) -> &[String] {
        self.keywords
            .iter()
            .find(|rule| rule.key == key)
            .map(|rule| rule.keywords.as_slice())
            .unwrap_or(&[])
    }

    pub fn bucket(&self, bucket: PolarityBucket) -> &[String] {
        self.buckets.get(bucket)
    }

    pub fn boost(&self) -> &BoostRule {
        &self.boost
    }

    /// The neutral category used for every fallback
    pub fn default_category(&self) -> &EmotionCategory {
        &self.categories[self.default_index]
    }

    /// Look up a category, substituting the default for unknown keys
    pub fn get_or_default(&self, key: &str) -> &EmotionCategory {
        self.get(key).unwrap_or_else(|| self.default_category())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}

/// Check that keys are unique and every reference resolves.
fn validate(
    categories: &[EmotionCategory],
    keywords: &[KeywordRule],
    buckets: &PolarityBuckets,
    boost: &BoostRule,
    default_key: &str,
) -> Result<(), CatalogError> {
    if categories.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for category in categories {
        if !seen.insert(category.key.as_str()) {
            return Err(CatalogError::DuplicateKey(category.key.clone()));
        }
    }

    let check = |key: &str, context: &'static str| {
        if seen.contains(key) {
            Ok(())
        } else {
            Err(CatalogError::UnknownKey {
                key: key.to_string(),
                context,
            })
        }
    };

    for rule in keywords {
        check(&rule.key, "keyword table")?;
    }
    for bucket in PolarityBucket::ALL {
        let candidates = buckets.get(bucket);
        if candidates.is_empty() {
            return Err(CatalogError::EmptyBucket(bucket));
        }
        for key in candidates {
            check(key, "polarity bucket")?;
        }
    }
    for key in &boost.sources {
        check(key, "boost sources")?;
    }
    check(&boost.target, "boost target")?;
    check(default_key, "default category")
}

fn to_owned(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| (*k).to_string()).collect()
}
