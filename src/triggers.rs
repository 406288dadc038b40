//! Detection of text conditions that required a preprocessing step.
//!
//! Each category maps to a regular expression evaluated against a record's
//! original text. The category order of the configuration is preserved in all
//! outputs so charts render in a stable order.

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::triggers::{
    CONTRACTIONS, CONTRACTIONS_PATTERN, NUMBERS, NUMBERS_PATTERN, PUNCTUATION,
    PUNCTUATION_PATTERN, URLS, URLS_PATTERN,
};
use crate::errors::ReportError;
use crate::text::percentage;
use crate::types::{CategoryName, PatternSource};

/// Ordered mapping from category name to its detection pattern.
///
/// Deserializing layers the given entries over [`TriggerConfig::default`]: a
/// string replaces (or adds) a category's pattern and `null` drops the category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TriggerConfig {
    patterns: IndexMap<CategoryName, PatternSource>,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self::empty()
            .with_pattern(CONTRACTIONS, CONTRACTIONS_PATTERN)
            .with_pattern(NUMBERS, NUMBERS_PATTERN)
            .with_pattern(PUNCTUATION, PUNCTUATION_PATTERN)
            .with_pattern(URLS, URLS_PATTERN)
    }
}

impl<'de> Deserialize<'de> for TriggerConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let overrides = IndexMap::<CategoryName, Option<PatternSource>>::deserialize(deserializer)?;
        Ok(overrides
            .into_iter()
            .fold(Self::default(), |config, (category, pattern)| match pattern {
                Some(pattern) => config.with_pattern(category, pattern),
                None => config.without(&category),
            }))
    }
}

impl TriggerConfig {
    /// Configuration without any categories.
    pub fn empty() -> Self {
        Self {
            patterns: IndexMap::new(),
        }
    }

    /// Add or replace the pattern for `category`; replacing keeps the original position.
    pub fn with_pattern(
        mut self,
        category: impl Into<CategoryName>,
        pattern: impl Into<PatternSource>,
    ) -> Self {
        self.patterns.insert(category.into(), pattern.into());
        self
    }

    /// Drop a category.
    pub fn without(mut self, category: &str) -> Self {
        self.patterns.shift_remove(category);
        self
    }

    /// Configured categories in order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    /// Pattern configured for `category`.
    pub fn pattern(&self, category: &str) -> Option<&str> {
        self.patterns.get(category).map(String::as_str)
    }

    /// Number of configured categories.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether no categories are configured.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Compiled trigger predicates.
#[derive(Clone, Debug)]
pub struct TriggerSet {
    detectors: Vec<(CategoryName, Regex)>,
}

impl TriggerSet {
    /// Compile every pattern in `config`.
    pub fn from_config(config: &TriggerConfig) -> Result<Self, ReportError> {
        let detectors = config
            .patterns
            .iter()
            .map(|(category, pattern)| {
                Regex::new(pattern)
                    .map(|regex| (category.clone(), regex))
                    .map_err(|err| {
                        ReportError::Configuration(format!(
                            "invalid pattern for trigger category '{category}': {err}"
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { detectors })
    }

    /// Category names in evaluation order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.detectors.iter().map(|(name, _)| name.as_str())
    }

    /// Whether `category` matches `text`; `None` for an unknown category.
    pub fn matches(&self, category: &str, text: &str) -> Option<bool> {
        self.detectors
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, regex)| regex.is_match(text))
    }

    /// Evaluate every category against `text`.
    pub fn detect(&self, text: &str) -> IndexMap<CategoryName, bool> {
        self.detectors
            .iter()
            .map(|(name, regex)| (name.clone(), regex.is_match(text)))
            .collect()
    }

    /// Percentage of `texts` matching each category, rounded to one decimal.
    pub fn rates<I, T>(&self, texts: I) -> IndexMap<CategoryName, f64>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut hits = vec![0usize; self.detectors.len()];
        let mut total = 0usize;
        for text in texts {
            let text = text.as_ref();
            total += 1;
            for (slot, (_, regex)) in hits.iter_mut().zip(&self.detectors) {
                if regex.is_match(text) {
                    *slot += 1;
                }
            }
        }
        self.detectors
            .iter()
            .zip(hits)
            .map(|((name, _), count)| (name.clone(), percentage(count, total)))
            .collect()
    }
}
