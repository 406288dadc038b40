use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::config::ReportConfig;
use crate::constants::frequency::DEFAULT_TOP_N;
use crate::data::{PostRecord, RowTokenCounts, TermFrequency};
use crate::errors::ReportError;
use crate::frequency::FrequencyTable;
use crate::loader::DatasetLoader;
use crate::text::{count_chars, mean, reduction_pct, round1};
use crate::triggers::{TriggerConfig, TriggerSet};
use crate::types::CategoryName;

/// Immutable corpus-wide statistics derived from one dataset load.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CorpusMetrics {
    pub post_count: usize,
    pub avg_original_tokens: f64,
    pub avg_processed_tokens: f64,
    /// Percentage of posts whose original text matches each trigger category.
    pub trigger_rates: IndexMap<CategoryName, f64>,
    /// Most frequent stemmed terms, by descending count then ascending term.
    pub top_terms: Vec<TermFrequency>,
    /// Per-row token counts in dataset order.
    pub token_counts: Vec<RowTokenCounts>,
    pub original_distribution: Option<TokenDistribution>,
    pub processed_distribution: Option<TokenDistribution>,
    pub token_reduction_pct: f64,
    pub tokens_removed_per_post: f64,
    pub avg_original_chars: f64,
    pub avg_processed_chars: f64,
    pub text_length_reduction_pct: f64,
    /// Distinct stemmed terms across the corpus.
    pub vocabulary_size: usize,
}

impl CorpusMetrics {
    /// Trigger rate for `category`, if configured.
    pub fn trigger_rate(&self, category: &str) -> Option<f64> {
        self.trigger_rates.get(category).copied()
    }
}

/// Five-number summary (plus mean) of a per-row count series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TokenDistribution {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
}

impl TokenDistribution {
    /// Summarize `values`; `None` when empty. Quartiles use linear interpolation.
    pub fn from_counts<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut sorted: Vec<usize> = values.into_iter().collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_unstable();
        Some(Self {
            min: sorted[0] as f64,
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1] as f64,
            mean: mean(sorted.iter().copied()),
        })
    }
}

fn quantile(sorted: &[usize], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let low = sorted[lo] as f64;
    let high = sorted[hi] as f64;
    low + (high - low) * (pos - lo as f64)
}

/// Derives `CorpusMetrics` from loaded records.
#[derive(Clone, Debug)]
pub struct CorpusMetricsBuilder {
    triggers: TriggerSet,
    top_n: usize,
}

impl CorpusMetricsBuilder {
    /// Builder using compiled `triggers` and the default top-N size.
    pub fn new(triggers: TriggerSet) -> Self {
        Self {
            triggers,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Builder with the default trigger patterns.
    pub fn with_default_triggers() -> Result<Self, ReportError> {
        Ok(Self::new(TriggerSet::from_config(&TriggerConfig::default())?))
    }

    /// Builder configured from a report configuration.
    pub fn from_config(config: &ReportConfig) -> Result<Self, ReportError> {
        let triggers = TriggerSet::from_config(&config.triggers)?;
        Ok(Self::new(triggers).with_top_n(config.top_n))
    }

    /// Override the size of the top-terms table.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Configured top-terms size.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Load the dataset through `loader` and derive its metrics.
    ///
    /// No metrics are produced when loading fails.
    pub fn build(
        &self,
        loader: &DatasetLoader,
    ) -> Result<(Vec<PostRecord>, CorpusMetrics), ReportError> {
        let records = loader.load()?;
        let metrics = self.compute(&records);
        Ok((records, metrics))
    }

    /// Derive metrics from already loaded records. Pure and deterministic.
    pub fn compute(&self, records: &[PostRecord]) -> CorpusMetrics {
        let token_counts: Vec<RowTokenCounts> =
            records.iter().map(RowTokenCounts::from).collect();
        let avg_original_tokens = mean(token_counts.iter().map(|row| row.original));
        let avg_processed_tokens = mean(token_counts.iter().map(|row| row.processed));

        let trigger_rates = self
            .triggers
            .rates(records.iter().map(|record| record.original_text.as_str()));

        let mut table = FrequencyTable::new();
        for record in records {
            table.add_tokens(&record.stemmed_tokens);
        }

        let avg_original_chars = mean(records.iter().map(|r| count_chars(&r.original_text)));
        let avg_processed_chars = mean(records.iter().map(|r| count_chars(&r.processed_text)));

        debug!(
            "[prepstats:metrics] {} posts, {} distinct terms",
            records.len(),
            table.distinct()
        );

        CorpusMetrics {
            post_count: records.len(),
            avg_original_tokens,
            avg_processed_tokens,
            trigger_rates,
            top_terms: table.top(self.top_n),
            original_distribution: TokenDistribution::from_counts(
                token_counts.iter().map(|row| row.original),
            ),
            processed_distribution: TokenDistribution::from_counts(
                token_counts.iter().map(|row| row.processed),
            ),
            token_counts,
            token_reduction_pct: reduction_pct(avg_original_tokens, avg_processed_tokens),
            tokens_removed_per_post: round1(avg_original_tokens - avg_processed_tokens),
            avg_original_chars,
            avg_processed_chars,
            text_length_reduction_pct: reduction_pct(avg_original_chars, avg_processed_chars),
            vocabulary_size: table.distinct(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> CorpusMetricsBuilder {
        CorpusMetricsBuilder::with_default_triggers().unwrap()
    }

    fn two_posts() -> Vec<PostRecord> {
        vec![
            PostRecord::from_columns("I don't know", "i do not know", "know"),
            PostRecord::from_columns("I have 3 cats", "i have num cat", "cat"),
        ]
    }

    #[test]
    fn two_post_scenario() {
        let metrics = builder().compute(&two_posts());
        assert_eq!(metrics.post_count, 2);
        assert_eq!(metrics.avg_original_tokens, 3.5);
        assert_eq!(metrics.avg_processed_tokens, 1.0);
        assert_eq!(metrics.trigger_rate("contractions"), Some(50.0));
        assert_eq!(metrics.trigger_rate("numbers"), Some(50.0));
        assert_eq!(metrics.trigger_rate("urls"), Some(0.0));
        assert_eq!(
            metrics.top_terms,
            vec![TermFrequency::new("cat", 1), TermFrequency::new("know", 1)]
        );
        assert_eq!(metrics.vocabulary_size, 2);
        assert_eq!(
            metrics.token_counts,
            vec![
                RowTokenCounts {
                    original: 3,
                    processed: 1
                },
                RowTokenCounts {
                    original: 4,
                    processed: 1
                },
            ]
        );
    }

    #[test]
    fn empty_dataset_yields_zeroes() {
        let metrics = builder().compute(&[]);
        assert_eq!(metrics.post_count, 0);
        assert_eq!(metrics.avg_original_tokens, 0.0);
        assert_eq!(metrics.avg_processed_tokens, 0.0);
        assert!(metrics.top_terms.is_empty());
        assert!(metrics.token_counts.is_empty());
        assert!(metrics.original_distribution.is_none());
        assert_eq!(metrics.token_reduction_pct, 0.0);
        assert!(metrics.trigger_rates.values().all(|rate| *rate == 0.0));
    }

    #[test]
    fn empty_original_text_counts_zero() {
        let records = vec![PostRecord::from_columns("", "", "")];
        let metrics = builder().compute(&records);
        assert_eq!(metrics.token_counts[0].original, 0);
        assert_eq!(metrics.avg_original_tokens, 0.0);
        assert_eq!(metrics.post_count, 1);
    }

    #[test]
    fn recomputation_is_identical() {
        let records: Vec<PostRecord> = (0..50)
            .map(|idx| {
                PostRecord::from_columns(
                    format!("post {idx} with text!!"),
                    format!("post num text {idx}"),
                    &format!("post num text t{}", idx % 7),
                )
            })
            .collect();
        let first = builder().compute(&records);
        let second = builder().compute(&records);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn top_n_is_configurable() {
        let records = vec![PostRecord::from_columns("a b c", "a b c", "a b c a b a")];
        let metrics = builder().with_top_n(2).compute(&records);
        assert_eq!(
            metrics.top_terms,
            vec![TermFrequency::new("a", 3), TermFrequency::new("b", 2)]
        );
        assert_eq!(metrics.vocabulary_size, 3);
    }

    #[test]
    fn reduction_figures_follow_averages() {
        let records = vec![
            PostRecord::from_columns("one two three four", "one two", "one two"),
            PostRecord::from_columns("five six seven eight", "five", "five"),
        ];
        let metrics = builder().compute(&records);
        assert_eq!(metrics.avg_original_tokens, 4.0);
        assert_eq!(metrics.avg_processed_tokens, 1.5);
        assert_eq!(metrics.token_reduction_pct, 62.5);
        assert_eq!(metrics.tokens_removed_per_post, 2.5);
    }

    #[test]
    fn distribution_uses_linear_quartiles() {
        let dist = TokenDistribution::from_counts(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(dist.min, 1.0);
        assert_eq!(dist.q1, 1.75);
        assert_eq!(dist.median, 2.5);
        assert_eq!(dist.q3, 3.25);
        assert_eq!(dist.max, 4.0);
        assert_eq!(dist.mean, 2.5);

        let single = TokenDistribution::from_counts(vec![7]).unwrap();
        assert_eq!(single.q1, 7.0);
        assert_eq!(single.median, 7.0);
        assert!(TokenDistribution::from_counts(Vec::new()).is_none());
    }
}
