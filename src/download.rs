use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::constants::download::{
    DATASET_FILE_NAME, DATASET_MIME, REPORT_FILE_NAME, REPORT_MIME,
};
use crate::errors::ReportError;

/// A file offered for download: fixed name, media type, and exact bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl DownloadArtifact {
    /// The dataset file, byte-for-byte, under the fixed dataset file name.
    pub fn dataset(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        Self::dataset_named(path, DATASET_FILE_NAME)
    }

    /// The dataset file, byte-for-byte, under `file_name`.
    pub fn dataset_named(
        path: impl AsRef<Path>,
        file_name: impl Into<String>,
    ) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|err| ReportError::unavailable(path.display().to_string(), err))?;
        Ok(Self {
            file_name: file_name.into(),
            mime_type: DATASET_MIME,
            bytes,
        })
    }

    /// A rendered text report under the fixed report file name.
    pub fn report(text: impl Into<String>) -> Self {
        Self {
            file_name: REPORT_FILE_NAME.to_string(),
            mime_type: REPORT_MIME,
            bytes: text.into().into_bytes(),
        }
    }

    /// Size of the payload in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the artifact into `dir` under its file name and return the written path.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ReportError> {
        let dir = dir.as_ref();
        let name = Path::new(&self.file_name);
        if name.file_name() != Some(name.as_os_str()) {
            return Err(ReportError::Configuration(format!(
                "artifact file name '{}' must not contain path separators",
                self.file_name
            )));
        }
        fs::create_dir_all(dir)?;
        let target = dir.join(name);
        fs::write(&target, &self.bytes)?;
        info!(
            "[prepstats:download] wrote {} ({} bytes) to {}",
            self.file_name,
            self.bytes.len(),
            target.display()
        );
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn dataset_bytes_are_verbatim() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("input.csv");
        let body = b"original_selftext,processed_text,tokens_stemmed\r\n\"caf\xc3\xa9\",x,x\r\n";
        fs::write(&path, body).unwrap();

        let artifact = DownloadArtifact::dataset(&path).unwrap();
        assert_eq!(artifact.file_name, "anxiety_preprocessed.csv");
        assert_eq!(artifact.mime_type, "text/csv");
        assert_eq!(artifact.bytes, body.to_vec());

        let out = artifact.write_to(temp.path().join("out")).unwrap();
        assert_eq!(out.file_name().unwrap(), "anxiety_preprocessed.csv");
        assert_eq!(fs::read(out).unwrap(), body.to_vec());
    }

    #[test]
    fn missing_dataset_is_unavailable() {
        let temp = tempdir().unwrap();
        let err = DownloadArtifact::dataset(temp.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, ReportError::DataUnavailable { .. }));
    }

    #[test]
    fn report_artifact_uses_text_plain() {
        let artifact = DownloadArtifact::report("hello");
        assert_eq!(artifact.file_name, "preprocessing_report.txt");
        assert_eq!(artifact.mime_type, "text/plain");
        assert_eq!(artifact.len(), 5);
    }

    #[test]
    fn write_to_rejects_nested_names() {
        let temp = tempdir().unwrap();
        let artifact = DownloadArtifact {
            file_name: "../escape.csv".to_string(),
            mime_type: "text/csv",
            bytes: Vec::new(),
        };
        assert!(artifact.write_to(temp.path()).is_err());
    }
}
