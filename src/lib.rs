#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Static report content published with the dataset.
pub mod catalog;
/// Command-line front end used by the `prepstats` binary.
pub mod cli;
/// Report configuration types.
pub mod config;
/// Centralized constants: column names, trigger patterns, file names.
pub mod constants;
/// Dataset record and table entry types.
pub mod data;
/// Verbatim download artifacts.
pub mod download;
/// Term-frequency tables.
pub mod frequency;
/// CSV dataset loading.
pub mod loader;
/// Corpus metrics and their builder.
pub mod metrics;
/// Plain-text summary report rendering.
pub mod report;
/// Lazily computed shared snapshots.
pub mod snapshot;
/// Token counting helpers.
pub mod text;
/// Preprocessing trigger detection.
pub mod triggers;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::ReportConfig;
pub use data::{PostRecord, RowTokenCounts, TermFrequency};
pub use download::DownloadArtifact;
pub use errors::ReportError;
pub use frequency::{FrequencyTable, top_terms};
pub use loader::{ColumnMapping, DatasetLoader};
pub use metrics::{CorpusMetrics, CorpusMetricsBuilder, TokenDistribution};
pub use report::render_text_report;
pub use snapshot::{DatasetSnapshot, SnapshotCache};
pub use text::count_tokens;
pub use triggers::{TriggerConfig, TriggerSet};
pub use types::{CategoryName, ColumnName, PathString, PatternSource, Term};
