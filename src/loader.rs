use std::io;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::columns::{
    DELIMITER, ORIGINAL_TEXT, ORIGINAL_TITLE, PROCESSED_TEXT, STEMMED_TOKENS,
};
use crate::data::PostRecord;
use crate::errors::ReportError;
use crate::types::ColumnName;

/// Names of the dataset columns the loader reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    /// Original free-text column (required).
    pub original_text: ColumnName,
    /// Processed text column (required).
    pub processed_text: ColumnName,
    /// Whitespace-joined stemmed tokens column (required).
    pub stemmed_tokens: ColumnName,
    /// Optional post title column; ignored when absent from the header.
    pub title: Option<ColumnName>,
    /// Match header names case-sensitively when true.
    pub case_sensitive: bool,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            original_text: ORIGINAL_TEXT.to_string(),
            processed_text: PROCESSED_TEXT.to_string(),
            stemmed_tokens: STEMMED_TOKENS.to_string(),
            title: Some(ORIGINAL_TITLE.to_string()),
            case_sensitive: false,
        }
    }
}

impl ColumnMapping {
    fn normalize(&self, value: &str) -> String {
        let trimmed = value.trim();
        if self.case_sensitive {
            trimmed.to_string()
        } else {
            trimmed.to_lowercase()
        }
    }

    fn position(&self, headers: &StringRecord, name: &str) -> Option<usize> {
        let wanted = self.normalize(name);
        headers
            .iter()
            .position(|header| self.normalize(header) == wanted)
    }

    fn resolve(&self, headers: &StringRecord) -> Result<ResolvedColumns, Vec<ColumnName>> {
        let mut missing = Vec::new();
        let mut required = |name: &ColumnName| {
            let idx = self.position(headers, name);
            if idx.is_none() {
                missing.push(name.clone());
            }
            idx
        };
        let original_text = required(&self.original_text);
        let processed_text = required(&self.processed_text);
        let stemmed_tokens = required(&self.stemmed_tokens);
        match (original_text, processed_text, stemmed_tokens) {
            (Some(original_text), Some(processed_text), Some(stemmed_tokens)) => {
                Ok(ResolvedColumns {
                    original_text,
                    processed_text,
                    stemmed_tokens,
                    title: self
                        .title
                        .as_deref()
                        .and_then(|name| self.position(headers, name)),
                })
            }
            _ => Err(missing),
        }
    }
}

/// Header positions resolved from a `ColumnMapping`.
#[derive(Clone, Copy, Debug)]
struct ResolvedColumns {
    original_text: usize,
    processed_text: usize,
    stemmed_tokens: usize,
    title: Option<usize>,
}

impl ResolvedColumns {
    fn record_from(&self, row: &StringRecord) -> PostRecord {
        let cell = |idx: usize| row.get(idx).unwrap_or_default();
        let record = PostRecord::from_columns(
            cell(self.original_text),
            cell(self.processed_text),
            cell(self.stemmed_tokens),
        );
        match self.title {
            Some(idx) => record.with_title(cell(idx)),
            None => record,
        }
    }
}

/// Reads a delimited dataset file into `PostRecord`s.
#[derive(Clone, Debug)]
pub struct DatasetLoader {
    path: PathBuf,
    columns: ColumnMapping,
    delimiter: u8,
}

impl DatasetLoader {
    /// Loader for `path` with default column names and a comma delimiter.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            columns: ColumnMapping::default(),
            delimiter: DELIMITER,
        }
    }

    /// Override column names.
    pub fn with_columns(mut self, columns: ColumnMapping) -> Self {
        self.columns = columns;
        self
    }

    /// Override the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Path this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every row of the file.
    ///
    /// Fails with `DataUnavailable` when the file cannot be opened or a row
    /// cannot be parsed (including a field-count mismatch), and with
    /// `DataMalformed` when a required column is missing from the header.
    pub fn load(&self) -> Result<Vec<PostRecord>, ReportError> {
        let label = self.path.display().to_string();
        let file = std::fs::File::open(&self.path)
            .map_err(|err| ReportError::unavailable(label.clone(), err))?;
        let records = self.load_from_reader(file, &label)?;
        info!(
            "[prepstats:loader] loaded {} records from {}",
            records.len(),
            label
        );
        Ok(records)
    }

    /// Load rows from any reader; `label` names the input in errors.
    pub fn load_from_reader<R: io::Read>(
        &self,
        reader: R,
        label: &str,
    ) -> Result<Vec<PostRecord>, ReportError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|err| ReportError::unavailable(label, err))?
            .clone();
        let columns = self.columns.resolve(&headers).map_err(|missing| {
            ReportError::malformed(
                label,
                format!("missing required column(s): {}", missing.join(", ")),
            )
        })?;
        debug!(
            "[prepstats:loader] resolved columns {:?} in {} header fields",
            columns,
            headers.len()
        );

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|err| ReportError::unavailable(label, describe_csv_error(&err)))?;
            records.push(columns.record_from(&row));
        }
        Ok(records)
    }
}

fn describe_csv_error(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => {
            let line = pos
                .as_ref()
                .map(|pos| pos.line().to_string())
                .unwrap_or_else(|| "?".to_string());
            format!("row at line {line} has {len} fields, expected {expected_len}")
        }
        _ => err.to_string(),
    }
}
