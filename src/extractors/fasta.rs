// src/extractors/fasta.rs

// --- Imports ---
use crate::config::RunConfig;
use crate::fasta::models::{ID_COLUMN, MISSING_NAME, NAME_COLUMN, REQUIRED_COLUMNS, SEQUENCE_COLUMN};
use crate::fasta::{ExtractionSummary, SelectionCriterion, SequenceEntry};
use crate::storage::StorageManager;
use crate::utils::error::ExtractError;
use csv::{Reader, ReaderBuilder, StringRecord};
use std::collections::BTreeSet;
use std::io::{Read, Write};

// --- Column Lookup ---
/// Positions of the required columns, resolved once from the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    id: usize,
    name: usize,
    sequence: usize,
}

impl ColumnIndex {
    /// A header repeated more than once resolves to its last occurrence.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, ExtractError> {
        let position = |column: &str| headers.iter().collect::<Vec<_>>().iter().rposition(|h| *h == column);

        match (position(ID_COLUMN), position(NAME_COLUMN), position(SEQUENCE_COLUMN)) {
            (Some(id), Some(name), Some(sequence)) => Ok(Self { id, name, sequence }),
            _ => Err(ExtractError::MissingColumns {
                expected: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
                found: headers.iter().map(str::to_string).collect(),
            }),
        }
    }

    pub fn id<'r>(&self, row: &'r StringRecord) -> Option<&'r str> {
        row.get(self.id)
    }

    pub fn name<'r>(&self, row: &'r StringRecord) -> Option<&'r str> {
        row.get(self.name)
    }

    pub fn sequence<'r>(&self, row: &'r StringRecord) -> Option<&'r str> {
        row.get(self.sequence)
    }
}

// --- Main Extractor Structure ---
/// Turns CSV rows into FASTA entries.
pub struct FastaExtractor;

impl FastaExtractor {
    pub fn new() -> Self { Self {} }

    /// Runs the extraction described by `config` against real files.
    ///
    /// The header is validated before the output file is created, so a
    /// source with missing columns leaves no output behind.
    pub fn extract_file(&self, config: &RunConfig) -> Result<ExtractionSummary, ExtractError> {
        let storage = StorageManager::new(config);
        let source = storage.open_source()?;
        let mut reader = csv_reader(source);
        let columns = read_columns(&mut reader)?;

        let mut sink = storage.create_sink().map_err(|e| {
            let path = config.output.display();
            ExtractError::Unexpected(format!("could not create '{}': {}", path, e))
        })?;

        self.run(&mut reader, columns, &mut sink, &config.criterion)
    }

    /// Reads CSV from `source` and writes every selected entry to `sink`.
    #[allow(dead_code)] // the binary goes through `extract_file`
    pub fn extract<R: Read, W: Write>(
        &self,
        source: R,
        sink: &mut W,
        criterion: &SelectionCriterion,
    ) -> Result<ExtractionSummary, ExtractError> {
        let mut reader = csv_reader(source);
        let columns = read_columns(&mut reader)?;
        self.run(&mut reader, columns, sink, criterion)
    }

    fn run<R: Read, W: Write>(
        &self,
        reader: &mut Reader<R>,
        columns: ColumnIndex,
        sink: &mut W,
        criterion: &SelectionCriterion,
    ) -> Result<ExtractionSummary, ExtractError> {
        tracing::info!("Starting extraction of {}...", criterion.describe());

        let mut summary = ExtractionSummary::default();
        let mut seen_ids: BTreeSet<String> = BTreeSet::new();
        let mut row = StringRecord::new();

        while reader.read_record(&mut row).map_err(ExtractError::from_csv)? {
            summary.rows_read += 1;

            let id = columns.id(&row).unwrap_or("");
            if !criterion.matches(id) {
                continue;
            }
            if matches!(criterion, SelectionCriterion::Ids(_)) {
                seen_ids.insert(id.to_string());
            }

            let name = columns.name(&row).unwrap_or(MISSING_NAME);
            let sequence = columns.sequence(&row).unwrap_or("");

            let Some(entry) = SequenceEntry::new(id, name, sequence) else {
                summary.skipped_empty += 1;
                continue;
            };

            entry.write_to(sink).map_err(|e| {
                ExtractError::Unexpected(format!("failed writing '{}': {}", entry.label, e))
            })?;
            summary.entries_written += 1;
        }

        sink.flush()
            .map_err(|e| ExtractError::Unexpected(format!("failed to flush output: {}", e)))?;

        if let SelectionCriterion::Ids(ids) = criterion {
            summary.unmatched_ids = ids.difference(&seen_ids).cloned().collect();
            if !summary.unmatched_ids.is_empty() {
                tracing::warn!(
                    "{} requested ID(s) were not found in the input: {}",
                    summary.unmatched_ids.len(),
                    summary.unmatched_ids.join(", ")
                );
            }
        }

        tracing::info!(
            "Extracted {} sequence(s) from {} row(s)",
            summary.entries_written,
            summary.rows_read
        );
        Ok(summary)
    }
}

fn csv_reader<R: Read>(source: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source)
}

fn read_columns<R: Read>(reader: &mut Reader<R>) -> Result<ColumnIndex, ExtractError> {
    let headers = reader.headers().map_err(ExtractError::from_csv)?;
    ColumnIndex::from_headers(headers).map_err(|e| {
        tracing::error!("{}", e);
        e
    })
}
