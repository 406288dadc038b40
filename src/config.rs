use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::columns::DELIMITER;
use crate::constants::download::DATASET_FILE_NAME;
use crate::constants::frequency::DEFAULT_TOP_N;
use crate::constants::paths::DEFAULT_DATASET_PATH;
use crate::errors::ReportError;
use crate::loader::{ColumnMapping, DatasetLoader};
use crate::triggers::TriggerConfig;

/// Top-level report configuration.
///
/// Every field has a default, so a JSON file only needs to name the values it
/// overrides. Trigger entries are layered over the default categories:
///
/// ```json
/// { "dataset_path": "posts.csv", "top_n": 20, "triggers": { "numbers": "\\d{2,}" } }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Location of the preprocessed dataset.
    pub dataset_path: PathBuf,
    /// Column names read from the dataset header.
    pub columns: ColumnMapping,
    /// Field delimiter, as a single ASCII character.
    pub delimiter: char,
    /// Trigger category patterns, evaluated in order.
    pub triggers: TriggerConfig,
    /// Size of the top-terms table.
    pub top_n: usize,
    /// File name under which the dataset is offered for download.
    pub download_file_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            columns: ColumnMapping::default(),
            delimiter: DELIMITER as char,
            triggers: TriggerConfig::default(),
            top_n: DEFAULT_TOP_N,
            download_file_name: DATASET_FILE_NAME.to_string(),
        }
    }
}

impl ReportConfig {
    /// Read a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            ReportError::Configuration(format!(
                "failed reading config {}: {err}",
                path.display()
            ))
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|err| {
            ReportError::Configuration(format!(
                "failed parsing config {}: {err}",
                path.display()
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Override the dataset path.
    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = path.into();
        self
    }

    /// Override the top-terms size.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Override trigger patterns.
    pub fn with_triggers(mut self, triggers: TriggerConfig) -> Self {
        self.triggers = triggers;
        self
    }

    /// Override column names.
    pub fn with_columns(mut self, columns: ColumnMapping) -> Self {
        self.columns = columns;
        self
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<(), ReportError> {
        if !self.delimiter.is_ascii() {
            return Err(ReportError::Configuration(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            )));
        }
        if self.download_file_name.trim().is_empty() {
            return Err(ReportError::Configuration(
                "download_file_name must not be empty".to_string(),
            ));
        }
        let required = [
            &self.columns.original_text,
            &self.columns.processed_text,
            &self.columns.stemmed_tokens,
        ];
        if required.iter().any(|name| name.trim().is_empty()) {
            return Err(ReportError::Configuration(
                "required column names must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Loader reading `dataset_path` with the configured columns and delimiter.
    ///
    /// Fails with [`ReportError::Configuration`] when [`Self::validate`] does.
    pub fn loader(&self) -> Result<DatasetLoader, ReportError> {
        self.validate()?;
        Ok(DatasetLoader::new(&self.dataset_path)
            .with_columns(self.columns.clone())
            .with_delimiter(self.delimiter as u8))
    }
}
