//! Random suggestion sampling.

use std::sync::Arc;

use rand::seq::index;
use rand::Rng;

use super::catalog::{Catalog, SuggestionItem};

/// Number of suggestions returned per request
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

/// Draws a bounded random subset of a category's suggestions
#[derive(Debug, Clone)]
pub struct SuggestionSampler {
    catalog: Arc<Catalog>,
    size: usize,
}

impl SuggestionSampler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_size(catalog, DEFAULT_SAMPLE_SIZE)
    }

    /// A size of zero is raised to one so a detected mood always gets a suggestion
    pub fn with_size(catalog: Arc<Catalog>, size: usize) -> Self {
        Self {
            catalog,
            size: size.max(1),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Sample without replacement, in random order.
    ///
    /// Unknown keys use the default category's suggestions.
    pub fn sample<R: Rng + ?Sized>(&self, key: &str, rng: &mut R) -> Vec<SuggestionItem> {
        let suggestions = &self.catalog.get_or_default(key).suggestions;
        let amount = self.size.min(suggestions.len());

        index::sample(rng, suggestions.len(), amount)
            .into_iter()
            .map(|i| suggestions[i].clone())
            .collect()
    }
}
