//! Keyword lookup: the first listed keyword found in the text decides.

use super::catalog::KeywordRule;

/// A keyword hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch<'a> {
    /// Category key
    pub key: &'a str,
    /// Keyword that occurred in the text
    pub keyword: &'a str,
}

/// Match lowercased `text` against the rules in order.
///
/// Keywords match as plain substrings, so "made" hits "mad".
pub fn match_keyword<'a>(rules: &'a [KeywordRule], text: &str) -> Option<KeywordMatch<'a>> {
    let normalized = text.to_lowercase();

    rules.iter().find_map(|rule| {
        rule.keywords
            .iter()
            .find(|keyword| !keyword.is_empty() && normalized.contains(keyword.as_str()))
            .map(|keyword| KeywordMatch {
                key: rule.key.as_str(),
                keyword: keyword.as_str(),
            })
    })
}
