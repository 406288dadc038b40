use std::collections::HashMap;

use crate::data::TermFrequency;
use crate::types::Term;

/// Corpus-wide term counter.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    counts: HashMap<Term, usize>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every term of one token sequence.
    pub fn add_tokens<I, T>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for token in tokens {
            let token = token.as_ref();
            if let Some(count) = self.counts.get_mut(token) {
                *count += 1;
            } else {
                self.counts.insert(token.to_string(), 1);
            }
        }
    }

    /// Occurrences of `term`.
    pub fn count(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of token occurrences seen.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The `n` most frequent terms, ties broken by ascending term.
    pub fn top(&self, n: usize) -> Vec<TermFrequency> {
        let mut entries: Vec<TermFrequency> = self
            .counts
            .iter()
            .map(|(term, count)| TermFrequency::new(term.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
        entries.truncate(n);
        entries
    }
}

/// Top-`n` terms across all token sequences.
pub fn top_terms<'a, I>(sequences: I, n: usize) -> Vec<TermFrequency>
where
    I: IntoIterator<Item = &'a [Term]>,
{
    let mut table = FrequencyTable::new();
    for tokens in sequences {
        table.add_tokens(tokens);
    }
    table.top(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seqs(rows: &[&str]) -> Vec<Vec<Term>> {
        rows.iter()
            .map(|row| row.split_whitespace().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn ties_are_broken_alphabetically() {
        let rows = seqs(&["know", "cat"]);
        let top = top_terms(rows.iter().map(Vec::as_slice), 15);
        assert_eq!(
            top,
            vec![TermFrequency::new("cat", 1), TermFrequency::new("know", 1)]
        );
    }

    #[test]
    fn orders_by_descending_count_and_truncates() {
        let rows = seqs(&["feel anxieti feel", "like feel anxieti", "work"]);
        let top = top_terms(rows.iter().map(Vec::as_slice), 2);
        assert_eq!(
            top,
            vec![TermFrequency::new("feel", 3), TermFrequency::new("anxieti", 2)]
        );
    }

    #[test]
    fn length_is_min_of_n_and_distinct_terms() {
        let rows = seqs(&["a b c", "a"]);
        assert_eq!(top_terms(rows.iter().map(Vec::as_slice), 15).len(), 3);
        assert_eq!(top_terms(rows.iter().map(Vec::as_slice), 0).len(), 0);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let rows: Vec<Vec<Term>> = Vec::new();
        assert!(top_terms(rows.iter().map(Vec::as_slice), 15).is_empty());
    }

    #[test]
    fn table_tracks_distinct_and_total() {
        let mut table = FrequencyTable::new();
        table.add_tokens(["num", "num", "day"]);
        table.add_tokens(Vec::<String>::new());
        assert_eq!(table.distinct(), 2);
        assert_eq!(table.total(), 3);
        assert_eq!(table.count("num"), 2);
        assert_eq!(table.count("missing"), 0);
    }
}
