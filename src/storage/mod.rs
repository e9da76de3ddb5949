// src/storage/mod.rs
use crate::config::RunConfig;
use crate::fasta::{ExtractionSummary, SelectionCriterion};
use crate::utils::error::{ExtractError, StorageError};
use serde::{Serialize, Serializer};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// File access for one run: the CSV source, the FASTA sink and the report.
pub struct StorageManager<'a> {
    config: &'a RunConfig,
}

/// JSON document written by `save_run_report`
#[derive(Serialize)]
struct RunReport<'a> {
    input: String,
    output: String,
    #[serde(serialize_with = "selection_as_json")]
    selection: &'a SelectionCriterion,
    #[serde(flatten)]
    summary: &'a ExtractionSummary,
    extraction_timestamp: String,
}

// "all" for match-all, otherwise the sorted id list
fn selection_as_json<S: Serializer>(
    criterion: &&SelectionCriterion,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match criterion {
        SelectionCriterion::All => serializer.serialize_str("all"),
        SelectionCriterion::Ids(ids) => ids.serialize(serializer),
    }
}

impl<'a> StorageManager<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }

    /// Opens the CSV source for reading.
    pub fn open_source(&self) -> Result<BufReader<File>, ExtractError> {
        let path = &self.config.input;
        match File::open(path) {
            Ok(file) => Ok(BufReader::new(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ExtractError::SourceNotFound(path.clone()))
            }
            Err(e) => Err(ExtractError::Unexpected(format!(
                "could not open '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    /// Creates (or truncates) the FASTA sink, creating parent directories first.
    pub fn create_sink(&self) -> Result<BufWriter<File>, StorageError> {
        let path = &self.config.output;
        ensure_parent(path)?;

        let file = File::create(path).map_err(StorageError::IoError)?;
        tracing::debug!("Opened output file {}", path.display());
        Ok(BufWriter::new(file))
    }

    /// Saves a JSON report describing a finished run
    pub fn save_run_report(
        &self,
        path: &Path,
        summary: &ExtractionSummary,
    ) -> Result<PathBuf, StorageError> {
        ensure_parent(path)?;

        let report = RunReport {
            input: self.config.input.display().to_string(),
            output: self.config.output.display().to_string(),
            selection: &self.config.criterion,
            summary,
            extraction_timestamp: chrono::Utc::now().to_rfc3339(),
        };

        let report_str = serde_json::to_string_pretty(&report)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(path, report_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved run report to {}", path.display());

        Ok(path.to_path_buf())
    }
}

fn ensure_parent(path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(StorageError::IoError)?;
        }
    }
    Ok(())
}
