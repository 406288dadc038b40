use serde::{Deserialize, Serialize};

pub use crate::types::Term;

/// One dataset row. Identity is the row position in the loaded sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Title of the original post, empty when the column is absent.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Original free text, empty when the cell is missing.
    pub original_text: String,
    /// Text after the full preprocessing pipeline.
    pub processed_text: String,
    /// Tokens from the final (stemmed) pipeline stage, in order.
    pub stemmed_tokens: Vec<Term>,
}

impl PostRecord {
    /// Build a record from raw column values, splitting the stemmed column on whitespace.
    pub fn from_columns(
        original_text: impl Into<String>,
        processed_text: impl Into<String>,
        stemmed_tokens: &str,
    ) -> Self {
        Self {
            title: String::new(),
            original_text: original_text.into(),
            processed_text: processed_text.into(),
            stemmed_tokens: stemmed_tokens
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Attach a post title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Token count of the original text.
    pub fn original_token_count(&self) -> usize {
        crate::text::count_tokens(&self.original_text)
    }

    /// Token count of the final stemmed stage.
    pub fn processed_token_count(&self) -> usize {
        self.stemmed_tokens.len()
    }
}

/// Per-row token counts at the two reported pipeline stages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowTokenCounts {
    /// Tokens in the original text.
    pub original: usize,
    /// Tokens after stemming.
    pub processed: usize,
}

impl From<&PostRecord> for RowTokenCounts {
    fn from(record: &PostRecord) -> Self {
        Self {
            original: record.original_token_count(),
            processed: record.processed_token_count(),
        }
    }
}

/// A term and its corpus-wide occurrence count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFrequency {
    pub term: Term,
    pub count: usize,
}

impl TermFrequency {
    /// Create an entry from a term and count.
    pub fn new(term: impl Into<Term>, count: usize) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}
