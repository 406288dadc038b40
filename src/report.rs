//! Plain-text summary report.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::catalog::{
    DATASET, EXAMPLES, PUBLISHED_FIGURES, PUBLISHED_TOP_TERMS, REQUIREMENTS, STEPS,
    published_trigger_rate,
};
use crate::metrics::{CorpusMetrics, TokenDistribution};

const RULE: &str = "======================================================================";

/// Render the downloadable preprocessing report for `metrics`.
///
/// The output depends only on the arguments, so a fixed `generated_at` gives a
/// reproducible report.
pub fn render_text_report(metrics: &CorpusMetrics, generated_at: DateTime<Utc>) -> String {
    TextReport {
        metrics,
        generated_at,
    }
    .to_string()
}

struct TextReport<'a> {
    metrics: &'a CorpusMetrics,
    generated_at: DateTime<Utc>,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self.metrics, self.generated_at)
    }
}

fn write_report(
    out: &mut fmt::Formatter<'_>,
    metrics: &CorpusMetrics,
    generated_at: DateTime<Utc>,
) -> fmt::Result {
    writeln!(out, "{}", DATASET.title.to_uppercase())?;
    writeln!(out, "{}", DATASET.course)?;
    writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;

    writeln!(out, "DATASET")?;
    writeln!(out, "  Subreddit:           {}", DATASET.subreddit)?;
    writeln!(out, "  Date range:          {}", DATASET.date_range)?;
    writeln!(out, "  Total posts:         {}", format_count(metrics.post_count))?;
    writeln!(out, "  Preprocessing steps: {}", STEPS.len())?;
    writeln!(out)?;
    writeln!(out, "  {}", DATASET.description)?;
    for (idx, objective) in DATASET.objectives.iter().enumerate() {
        writeln!(out, "  {}. {objective}", idx + 1)?;
    }
    writeln!(out)?;

    writeln!(out, "TOKEN STATISTICS")?;
    writeln!(
        out,
        "  Avg tokens (original):  {:.1}",
        metrics.avg_original_tokens
    )?;
    writeln!(
        out,
        "  Avg tokens (processed): {:.1}",
        metrics.avg_processed_tokens
    )?;
    writeln!(
        out,
        "  Token reduction:        {:.1}% ({:.1} tokens/post)",
        metrics.token_reduction_pct, metrics.tokens_removed_per_post
    )?;
    writeln!(
        out,
        "  Text length reduction:  {:.1}%",
        metrics.text_length_reduction_pct
    )?;
    writeln!(
        out,
        "  Vocabulary size:        {} unique terms after stemming",
        format_count(metrics.vocabulary_size)
    )?;
    write_distribution(out, "original", metrics.original_distribution.as_ref())?;
    write_distribution(out, "processed", metrics.processed_distribution.as_ref())?;
    writeln!(out)?;

    writeln!(out, "POSTS REQUIRING EACH PREPROCESSING TYPE")?;
    for (category, rate) in &metrics.trigger_rates {
        match published_trigger_rate(category) {
            Some(published) => writeln!(
                out,
                "  {category:<14} {rate:>5.1}%   (published: {published:.1}%)"
            )?,
            None => writeln!(out, "  {category:<14} {rate:>5.1}%")?,
        }
    }
    writeln!(out)?;

    writeln!(out, "TOP {} TERMS", metrics.top_terms.len())?;
    for (rank, entry) in metrics.top_terms.iter().enumerate() {
        let published = PUBLISHED_TOP_TERMS
            .iter()
            .find(|(term, _)| *term == entry.term)
            .map(|(_, count)| format!("   (published: {})", format_count(*count)))
            .unwrap_or_default();
        writeln!(
            out,
            "  {:>2}. {:<16} {}{published}",
            rank + 1,
            entry.term,
            format_count(entry.count)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "PUBLISHED FIGURES")?;
    for figure in &PUBLISHED_FIGURES {
        writeln!(out, "  {}: {} ({})", figure.label, figure.value, figure.delta)?;
    }
    writeln!(out)?;

    writeln!(out, "PREPROCESSING STEPS")?;
    for (idx, step) in STEPS.iter().enumerate() {
        writeln!(out, "  {}. {}", idx + 1, step.name)?;
        writeln!(out, "     Purpose: {}", step.purpose)?;
        writeln!(out, "     Example: {}", step.example)?;
        writeln!(out, "     Impact:  {}", step.impact)?;
    }
    writeln!(out)?;

    writeln!(out, "WHY EACH STEP WAS NECESSARY")?;
    for requirement in &REQUIREMENTS {
        writeln!(out, "  {}: {}", requirement.name, requirement.reason)?;
        writeln!(out, "     Example: {}", requirement.example)?;
        writeln!(out, "     Found in: {}", requirement.frequency)?;
    }
    writeln!(out)?;

    writeln!(out, "EXAMPLES")?;
    for (idx, example) in EXAMPLES.iter().enumerate() {
        writeln!(out, "  Example {}: {}", idx + 1, example.title)?;
        writeln!(out, "    Original:  {}", example.original)?;
        writeln!(out, "    Processed: {}", example.processed)?;
    }
    writeln!(out, "{RULE}")?;
    Ok(())
}

fn write_distribution(
    out: &mut fmt::Formatter<'_>,
    label: &str,
    dist: Option<&TokenDistribution>,
) -> fmt::Result {
    match dist {
        Some(d) => writeln!(
            out,
            "  Tokens/post ({label}): min {:.0}, q1 {:.1}, median {:.1}, q3 {:.1}, max {:.0}",
            d.min, d.q1, d.median, d.q3, d.max
        ),
        None => writeln!(out, "  Tokens/post ({label}): no posts"),
    }
}

/// Format an integer with thousands separators (`12345` → `12,345`).
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
